//! Table session: state, mode duality, and change propagation.
//!
//! [`TableSession`] owns the mutable table state (page, sort, search, column
//! filters, selection, cached widths) and coordinates the two data modes:
//!
//! - **Local**: the full record set is in memory and the session runs the
//!   pipeline itself on every view call.
//! - **Remote**: the server owns the pipeline; the session tracks intent,
//!   debounces the chatty inputs (search and filter edits), and emits
//!   [`StateDescriptor`] snapshots the host forwards as queries.
//!
//! Time never comes from the wall clock: actions that debounce take `now`
//! explicitly and the host pumps [`TableSession::tick`].

use crate::debounce::Debounce;
use crate::filter::{apply_filters, apply_search, has_active_filter};
use crate::page::{PaginationData, page_slice};
use crate::selection::{RowKey, SelectionState, SelectionTracker, row_key};
use crate::sort::sort_rows;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tgrid_core::{
    Column, DefaultFormatter, FilterCondition, SortDirection, Texts, ValueFormatter, normalize,
    unique_key,
};
use tgrid_layout::{
    AllocatorOptions, ColumnWidth, HeuristicMeasurer, TextMeasurer, resolve_widths, static_widths,
};

/// Where the row pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// All rows in memory; filter/search/sort/page run in-process.
    #[default]
    Local,
    /// The server runs the pipeline; the session emits state snapshots.
    Remote,
}

/// What triggered a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Sort column or direction changed.
    Sort,
    /// A column filter changed (post-debounce).
    Filter,
    /// The global search changed (post-debounce).
    Search,
    /// The current page changed.
    Page,
    /// The page size changed.
    PageSize,
    /// Everything was reset to defaults.
    Reset,
}

/// One active column filter inside a [`StateDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDescriptor {
    /// Filtered field path.
    pub field: String,
    /// Operator in effect.
    pub condition: FilterCondition,
    /// Operand as the caller supplied it.
    pub value: Value,
}

/// Snapshot of query-relevant state, emitted in remote mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateDescriptor {
    /// 1-based page.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Zero-based row offset of the page, for offset/limit backends.
    pub offset: usize,
    /// Sorted field, if any.
    pub sort_column: Option<String>,
    /// Direction for `sort_column`.
    pub sort_direction: SortDirection,
    /// Global search text as typed.
    pub search: String,
    /// Active column filters only.
    pub column_filters: Vec<FilterDescriptor>,
    /// What triggered this snapshot.
    pub change_type: ChangeType,
}

/// Session construction knobs.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Local or remote pipeline.
    pub mode: Mode,
    /// Initial rows per page.
    pub page_size: usize,
    /// Page buttons shown around the current page.
    pub pagination_range: usize,
    /// Quiet period for remote search emission.
    pub search_delay: Duration,
    /// Quiet period for remote filter emission.
    pub filter_delay: Duration,
    /// Quiet period for width recalculation after container resizes.
    pub resize_delay: Duration,
    /// Content-aware width allocation; hint-only widths when off.
    pub auto_widths: bool,
    /// Width allocation options.
    pub sizing: AllocatorOptions,
    /// Display label texts.
    pub texts: Texts,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Local,
            page_size: 10,
            pagination_range: 3,
            search_delay: Duration::from_millis(300),
            filter_delay: Duration::from_millis(300),
            resize_delay: Duration::from_millis(100),
            auto_widths: true,
            sizing: AllocatorOptions::default(),
            texts: Texts::default(),
        }
    }
}

/// Stateful coordinator for one table.
pub struct TableSession {
    config: TableConfig,
    columns: Vec<Column>,
    rows: Vec<Value>,
    remote_total: usize,
    current_page: usize,
    page_size: usize,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    search: String,
    loading: bool,
    selection: SelectionTracker,
    search_debounce: Debounce<String>,
    filter_debounce: Debounce<()>,
    resize_debounce: Debounce<f64>,
    container_width: f64,
    widths: Option<Vec<ColumnWidth>>,
    measurer: Box<dyn TextMeasurer>,
    formatter: Box<dyn ValueFormatter>,
    events: VecDeque<StateDescriptor>,
}

impl TableSession {
    /// New session over a column set. Columns are normalized on the way in:
    /// every column gets a concrete filter condition and at most one keeps
    /// the unique-key mark.
    #[must_use]
    pub fn new(mut columns: Vec<Column>, config: TableConfig) -> Self {
        normalize(&mut columns);
        let page_size = config.page_size;
        let search_debounce = Debounce::new(config.search_delay);
        let filter_debounce = Debounce::new(config.filter_delay);
        let resize_debounce = Debounce::new(config.resize_delay);
        Self {
            config,
            columns,
            rows: Vec::new(),
            remote_total: 0,
            current_page: 1,
            page_size,
            sort_column: None,
            sort_direction: SortDirection::Asc,
            search: String::new(),
            loading: false,
            selection: SelectionTracker::new(),
            search_debounce,
            filter_debounce,
            resize_debounce,
            container_width: 0.0,
            widths: None,
            measurer: Box::new(HeuristicMeasurer::default()),
            formatter: Box::new(DefaultFormatter),
            events: VecDeque::new(),
        }
    }

    // ----- state accessors -----

    /// Column set, post-normalization.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// 1-based current page as requested (clamping happens in views).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sorted field, if any.
    #[must_use]
    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    /// Direction for the sorted field.
    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Global search text as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether a remote fetch is in flight (set by the host).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Selection read access.
    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    // ----- data intake -----

    /// Replace the row set: the full data in local mode, the current page in
    /// remote mode. Cached widths are invalidated.
    pub fn set_rows(&mut self, rows: Vec<Value>) {
        self.rows = rows;
        self.widths = None;
    }

    /// Server-reported total row count (remote mode).
    pub fn set_remote_total(&mut self, total: usize) {
        self.remote_total = total;
    }

    /// Mark a remote fetch in flight; page navigation is ignored while set.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Swap the text measurer used for content-aware widths.
    pub fn set_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.widths = None;
    }

    /// Swap the display formatter.
    pub fn set_formatter(&mut self, formatter: Box<dyn ValueFormatter>) {
        self.formatter = formatter;
        self.widths = None;
    }

    // ----- actions -----

    /// Sort by a column: first tap ascending, second tap flips. The current
    /// page is kept. Ignored for unknown or sort-disabled columns.
    pub fn set_sort(&mut self, field: &str) {
        let Some(column) = self.columns.iter().find(|c| c.field == field) else {
            return;
        };
        if !column.sort {
            return;
        }
        if self.sort_column.as_deref() == Some(field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(field.to_string());
            self.sort_direction = SortDirection::Asc;
        }
        self.emit(ChangeType::Sort);
    }

    /// Drop the sort.
    pub fn clear_sort(&mut self) {
        self.sort_column = None;
        self.sort_direction = SortDirection::Asc;
    }

    /// Change a column's filter operand. Resets to page 1. In remote mode
    /// the emission is debounced; a zero filter delay emits immediately.
    pub fn set_filter(&mut self, field: &str, value: Value, now: Instant) {
        let Some(column) = self.columns.iter_mut().find(|c| c.field == field) else {
            return;
        };
        column.value = value;
        self.filter_changed(now);
    }

    /// Change a column's filter operator. Treated as a filter change when the
    /// column is actively filtering (null checks always are).
    pub fn set_filter_condition(&mut self, field: &str, condition: FilterCondition, now: Instant) {
        let Some(idx) = self.columns.iter().position(|c| c.field == field) else {
            return;
        };
        self.columns[idx].condition = Some(condition);
        if has_active_filter(&self.columns[idx]) {
            self.filter_changed(now);
        }
    }

    /// Clear one column's filter back to defaults.
    pub fn clear_filter(&mut self, field: &str, now: Instant) {
        let Some(column) = self.columns.iter_mut().find(|c| c.field == field) else {
            return;
        };
        column.clear_filter();
        self.filter_changed(now);
    }

    fn filter_changed(&mut self, now: Instant) {
        self.current_page = 1;
        if self.config.mode == Mode::Remote {
            if self.filter_debounce.trigger(now, ()).is_some() {
                self.emit(ChangeType::Filter);
            }
        }
    }

    /// Change the global search text.
    ///
    /// Local mode filters on the next view call and keeps the current page.
    /// Remote mode debounces, then resets to page 1 and emits; a zero search
    /// delay does both immediately.
    pub fn set_search(&mut self, query: &str, now: Instant) {
        self.search = query.to_string();
        if self.config.mode == Mode::Remote {
            if self.search_debounce.trigger(now, self.search.clone()).is_some() {
                self.current_page = 1;
                self.emit(ChangeType::Search);
            }
        }
    }

    /// Navigate to a page. Ignored while loading, outside `[1, max_page]`,
    /// or when already there.
    pub fn go_to_page(&mut self, page: usize) {
        if self.loading {
            return;
        }
        let max_page = self.pagination().max_page;
        if page < 1 || page > max_page || page == self.current_page {
            return;
        }
        self.current_page = page;
        self.emit(ChangeType::Page);
    }

    /// Navigate forward one page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Navigate back one page.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Change the page size and reset to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.current_page = 1;
        self.emit(ChangeType::PageSize);
    }

    /// Reset everything: filters, search, sort, page, selection. Pending
    /// debounces are dropped.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.clear_filter();
        }
        self.search.clear();
        self.sort_column = None;
        self.sort_direction = SortDirection::Asc;
        self.current_page = 1;
        self.selection.clear();
        self.search_debounce.cancel();
        self.filter_debounce.cancel();
        self.emit(ChangeType::Reset);
    }

    /// Report a container resize. Width recalculation is debounced so drag
    /// resizing settles before the allocator runs.
    pub fn set_container_width(&mut self, width: f64, now: Instant) {
        if let Some(width) = self.resize_debounce.trigger(now, width) {
            self.recalculate_widths(width);
        }
    }

    /// Advance time: fire any debounce whose quiet period elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.filter_debounce.poll(now).is_some() {
            self.emit(ChangeType::Filter);
        }
        if self.search_debounce.poll(now).is_some() {
            self.current_page = 1;
            self.emit(ChangeType::Search);
        }
        if let Some(width) = self.resize_debounce.poll(now) {
            self.recalculate_widths(width);
        }
    }

    /// Earliest pending deadline, for hosts that sleep between ticks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.filter_debounce.next_deadline(),
            self.search_debounce.next_deadline(),
            self.resize_debounce.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Take the emitted state snapshots (remote mode). Empty in local mode.
    pub fn drain_events(&mut self) -> Vec<StateDescriptor> {
        self.events.drain(..).collect()
    }

    fn emit(&mut self, change_type: ChangeType) {
        if self.config.mode != Mode::Remote {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?change_type, page = self.current_page, "emit state snapshot");
        let offset = if self.page_size == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size
        };
        let column_filters = self
            .columns
            .iter()
            .filter(|c| has_active_filter(c))
            .map(|c| FilterDescriptor {
                field: c.field.clone(),
                condition: c.effective_condition(),
                value: c.value.clone(),
            })
            .collect();
        self.events.push_back(StateDescriptor {
            current_page: self.current_page,
            page_size: self.page_size,
            offset,
            sort_column: self.sort_column.clone(),
            sort_direction: self.sort_direction,
            search: self.search.clone(),
            column_filters,
            change_type,
        });
    }

    // ----- views -----

    /// Rows after filter, search, and sort. In remote mode the rows pass
    /// through untouched: the server already did this work.
    #[must_use]
    pub fn filtered_rows(&self) -> Vec<&Value> {
        let refs: Vec<&Value> = self.rows.iter().collect();
        if self.config.mode == Mode::Remote {
            return refs;
        }
        let kept = apply_filters(&refs, &self.columns);
        let mut kept = apply_search(&kept, &self.columns, &self.search);
        sort_rows(
            &mut kept,
            &self.columns,
            self.sort_column.as_deref(),
            self.sort_direction,
        );
        kept
    }

    /// Row count across all pages.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        match self.config.mode {
            Mode::Local => self.filtered_rows().len(),
            Mode::Remote => self.remote_total,
        }
    }

    /// Pagination snapshot for the current state.
    #[must_use]
    pub fn pagination(&self) -> PaginationData {
        PaginationData::compute(
            self.total_rows(),
            self.current_page,
            self.page_size,
            self.config.pagination_range,
        )
    }

    /// Rendered pagination summary line.
    #[must_use]
    pub fn pagination_info(&self) -> String {
        self.pagination().info(&self.config.texts)
    }

    /// The displayed window: the current page in local mode, the rows as
    /// delivered in remote mode.
    #[must_use]
    pub fn displayed_rows(&self) -> Vec<&Value> {
        match self.config.mode {
            Mode::Local => {
                let filtered = self.filtered_rows();
                let page = self.pagination().current_page;
                page_slice(&filtered, page, self.page_size).to_vec()
            }
            Mode::Remote => self.rows.iter().collect(),
        }
    }

    /// Selection keys of the displayed window, in display order.
    #[must_use]
    pub fn displayed_keys(&self) -> Vec<RowKey> {
        let unique = unique_key(&self.columns).map(str::to_string);
        let page = self.pagination().current_page;
        let offset = if self.page_size == 0 {
            0
        } else {
            (page - 1) * self.page_size
        };
        self.displayed_rows()
            .iter()
            .enumerate()
            .map(|(i, row)| row_key(row, unique.as_deref(), offset + i))
            .collect()
    }

    /// Toggle one displayed row by its position in the window. Returns the
    /// new selected state, or `None` for an out-of-range position.
    pub fn toggle_row(&mut self, window_index: usize) -> Option<bool> {
        let key = self.displayed_keys().into_iter().nth(window_index)?;
        Some(self.selection.toggle(key))
    }

    /// Whether a displayed row is selected.
    #[must_use]
    pub fn is_row_selected(&self, window_index: usize) -> bool {
        self.displayed_keys()
            .get(window_index)
            .is_some_and(|key| self.selection.is_selected(key))
    }

    /// Header checkbox action: deselect the window when everything in it is
    /// selected, select it otherwise. Returns the new aggregate state.
    pub fn toggle_all(&mut self) -> SelectionState {
        let keys = self.displayed_keys();
        match self.selection.state_of(keys.iter()) {
            SelectionState::All => self.selection.deselect_all(keys.iter()),
            _ => self.selection.select_all(keys.iter().cloned()),
        }
        self.selection.state_of(keys.iter())
    }

    /// Tri-state aggregate over the displayed window.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state_of(self.displayed_keys().iter())
    }

    /// Drop the selection without touching anything else.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ----- widths -----

    /// Last container width handed to the allocator.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    fn recalculate_widths(&mut self, width: f64) {
        self.container_width = width;
        self.widths = Some(if self.config.auto_widths && !self.rows.is_empty() {
            resolve_widths(
                &self.columns,
                &self.rows,
                width,
                self.measurer.as_ref(),
                &self.config.texts,
                self.formatter.as_ref(),
                &self.config.sizing,
            )
        } else {
            static_widths(&self.columns, width, &self.config.sizing)
        });
    }

    /// Resolved column widths, recomputing against the cached container
    /// width when invalidated.
    pub fn column_widths(&mut self) -> &[ColumnWidth] {
        if self.widths.is_none() {
            self.recalculate_widths(self.container_width);
        }
        self.widths.as_deref().unwrap_or_default()
    }

    /// Whether the resolved widths overflow the container (the cue for
    /// horizontal scrolling).
    pub fn overflows_container(&mut self) -> bool {
        let container = self.container_width;
        tgrid_layout::overflows(self.column_widths(), container)
    }
}
