//! Pagination windowing.
//!
//! [`page_slice`] cuts one page out of an ordered row set; [`PaginationData`]
//! is the derived snapshot the host renders controls from: clamped current
//! page, page-button window, and the 1-based display range.

use serde::Serialize;
use tgrid_core::{Texts, interpolate};

/// One page worth of rows. Pages are 1-based; an out-of-range page yields an
/// empty slice, and a page size of zero means "everything on one page".
#[must_use]
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return rows;
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

/// Derived pagination snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationData {
    /// Rows across all pages (post-filter in local mode, server-reported in
    /// remote mode).
    pub total_rows: usize,
    /// Clamped 1-based current page.
    pub current_page: usize,
    /// Rows per page; zero disables pagination.
    pub page_size: usize,
    /// Last valid page, at least 1.
    pub max_page: usize,
    /// First page button shown.
    pub start_page: usize,
    /// Last page button shown.
    pub end_page: usize,
    /// Page buttons, `start_page..=end_page`.
    pub pages: Vec<usize>,
    /// 1-based index of the first displayed row, 0 when empty.
    pub start_row: usize,
    /// 1-based index of the last displayed row, 0 when empty.
    pub end_row: usize,
}

impl PaginationData {
    /// Derive the snapshot, clamping `current_page` into `[1, max_page]` and
    /// centering a window of up to `range` page buttons on it.
    #[must_use]
    pub fn compute(total_rows: usize, current_page: usize, page_size: usize, range: usize) -> Self {
        let max_page = if page_size == 0 {
            1
        } else {
            total_rows.div_ceil(page_size).max(1)
        };
        let current_page = current_page.clamp(1, max_page);
        let range = range.max(1);

        let start_page = current_page.saturating_sub(range / 2).max(1);
        let end_page = (start_page + range - 1).min(max_page);
        let start_page = end_page.saturating_sub(range - 1).max(1);

        let (start_row, end_row) = if total_rows == 0 {
            (0, 0)
        } else if page_size == 0 {
            (1, total_rows)
        } else {
            let start = (current_page - 1) * page_size + 1;
            (start, (current_page * page_size).min(total_rows))
        };

        Self {
            total_rows,
            current_page,
            page_size,
            max_page,
            start_page,
            end_page,
            pages: (start_page..=end_page).collect(),
            start_row,
            end_row,
        }
    }

    /// Render the summary line from the host's template.
    #[must_use]
    pub fn info(&self, texts: &Texts) -> String {
        interpolate(
            &texts.pagination_info,
            &[
                ("start", self.start_row.to_string()),
                ("end", self.end_row.to_string()),
                ("total", self.total_rows.to_string()),
            ],
        )
    }
}
