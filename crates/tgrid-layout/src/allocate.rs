//! Width allocation and redistribution.
//!
//! Allocation runs in two phases. First every visible column gets an *ideal*
//! width from its hints, the responsive default tables, and (when sample rows
//! are provided) measured header/content text. Then [`redistribute`] adjusts
//! the ideal widths to the usable container width under the active
//! [`SizingStrategy`].
//!
//! The whole phase is a pure function of its inputs and never panics; a
//! useless container width degrades to the forced-minimum path.

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::defaults;
use crate::measure::TextMeasurer;
use serde_json::Value;
use tgrid_core::{Column, ColumnType, Texts, ValueFormatter, display_value, visible};

/// Padding subtracted from the container before allocation.
pub const PADDING_OFFSET: f64 = 32.0;

/// Usable width never drops below this, whatever the container reports.
pub const MIN_USABLE_WIDTH: f64 = 300.0;

/// Extra clearance added to measured header text (checkbox / sort icons).
pub const HEADER_ALLOWANCE: f64 = 80.0;

/// At most this many rows are sampled for content-aware sizing.
pub const SAMPLE_LIMIT: usize = 15;

/// Trailing remainders below this are spread over expandable columns.
const TRAILING_REMAINDER_LIMIT: f64 = 20.0;

/// How resolved widths relate to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingStrategy {
    /// Every column gets `max(min, preferred)`; the table may overflow or
    /// underfill the container (horizontal scrolling is the caller's call).
    AutoWidth,
    /// Grow or shrink columns to match the container exactly (the default).
    #[default]
    AutoFit,
    /// Strict columns keep their preferred width unconditionally; flexible
    /// columns share whatever remains.
    Hybrid,
}

/// Resolved width for one visible column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidth {
    /// Field path this width belongs to.
    pub field: String,
    /// Assigned width in pixels.
    pub width: f64,
    /// Lower bound honored by redistribution.
    pub min_width: f64,
    /// Upper bound honored by redistribution.
    pub max_width: f64,
    /// Preferred width before redistribution.
    pub preferred_width: f64,
    /// Tie-break hint for callers; see [`column_priority`].
    pub priority: u8,
    /// Lower shrinks first when space is insufficient.
    pub shrink_priority: u8,
    /// Eligible for growth and shrink during redistribution.
    pub is_flexible: bool,
    /// Never touched by redistribution.
    pub is_strict: bool,
}

/// Tuning knobs for allocation.
#[derive(Debug, Clone)]
pub struct AllocatorOptions {
    /// Active sizing strategy.
    pub strategy: SizingStrategy,
    /// When set, allocation gives up (forced minimums) rather than shrink
    /// any column below its minimum.
    pub respect_min_widths: bool,
    /// Floor default minimums at legible widths; see [`defaults::min_width`].
    pub preserve_readability: bool,
    /// Breakpoint thresholds for responsive defaults.
    pub breakpoints: Breakpoints,
    /// Width reserved by fixed side elements (checkbox column etc.).
    pub reserved_width: f64,
    /// Padding added to each measured cell value.
    pub padding_offset: f64,
    /// Clearance added to each measured header.
    pub header_allowance: f64,
    /// Content-aware sampling depth.
    pub sample_rows: usize,
}

impl Default for AllocatorOptions {
    fn default() -> Self {
        Self {
            strategy: SizingStrategy::AutoFit,
            respect_min_widths: false,
            preserve_readability: true,
            breakpoints: Breakpoints::DEFAULT,
            reserved_width: 0.0,
            padding_offset: PADDING_OFFSET,
            header_allowance: HEADER_ALLOWANCE,
            sample_rows: SAMPLE_LIMIT,
        }
    }
}

/// Usable width: container minus reserved side elements minus padding,
/// floored at [`MIN_USABLE_WIDTH`].
#[must_use]
pub fn available_width(container_width: f64, reserved_width: f64) -> f64 {
    (container_width - reserved_width - PADDING_OFFSET).max(MIN_USABLE_WIDTH)
}

/// Tie-break rank: unique-key columns first, then string, number, date, bool.
#[must_use]
pub fn column_priority(column: &Column) -> u8 {
    if column.is_unique {
        return 1;
    }
    match column.ty {
        ColumnType::String => 2,
        ColumnType::Number => 3,
        ColumnType::Date => 4,
        ColumnType::Bool => 5,
    }
}

/// Sum of assigned widths.
#[must_use]
pub fn total_width(widths: &[ColumnWidth]) -> f64 {
    widths.iter().map(|w| w.width).sum()
}

/// Whether the assigned widths overflow the container. The caller uses this
/// to decide on horizontal scrolling.
#[must_use]
pub fn overflows(widths: &[ColumnWidth], container_width: f64) -> bool {
    total_width(widths) > container_width
}

/// Hint-only widths for when content-aware sizing is disabled or no
/// measurement has happened yet: explicit hints, defaults for the rest, no
/// redistribution.
#[must_use]
pub fn static_widths(
    columns: &[Column],
    container_width: f64,
    opts: &AllocatorOptions,
) -> Vec<ColumnWidth> {
    let bp = opts.breakpoints.classify_width(container_width);
    visible(columns)
        .map(|col| {
            let base = defaults::base_width(col.ty, bp);
            ColumnWidth {
                field: col.field.clone(),
                width: col.width.unwrap_or(base),
                min_width: col
                    .min_width
                    .unwrap_or_else(|| defaults::min_width(col.ty, bp, opts.preserve_readability)),
                max_width: col
                    .max_width
                    .unwrap_or_else(|| defaults::max_width(col.ty, bp, container_width)),
                preferred_width: col.preferred_width.unwrap_or(base),
                priority: 1,
                shrink_priority: col.shrink_priority,
                is_flexible: true,
                is_strict: col.strict,
            }
        })
        .collect()
}

/// Resolve widths for the visible columns of `columns` against a container.
///
/// Samples up to `opts.sample_rows` rows (capped at [`SAMPLE_LIMIT`]-style
/// defaults) to estimate content width, clamps each column's ideal width to
/// its bounds, then redistributes under the active strategy.
#[must_use]
pub fn resolve_widths(
    columns: &[Column],
    rows: &[Value],
    container_width: f64,
    measurer: &dyn TextMeasurer,
    texts: &Texts,
    formatter: &dyn ValueFormatter,
    opts: &AllocatorOptions,
) -> Vec<ColumnWidth> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "resolve_widths",
        columns = columns.len(),
        rows = rows.len(),
        container = container_width,
    )
    .entered();

    let bp = opts.breakpoints.classify_width(container_width);
    let available = available_width(container_width, opts.reserved_width);
    let sample = &rows[..rows.len().min(opts.sample_rows)];

    let mut widths: Vec<ColumnWidth> = visible(columns)
        .map(|col| ideal_width(col, sample, container_width, bp, measurer, texts, formatter, opts))
        .collect();

    redistribute(&mut widths, available, opts.strategy, opts.respect_min_widths);
    widths
}

#[allow(clippy::too_many_arguments)]
fn ideal_width(
    col: &Column,
    sample: &[Value],
    container_width: f64,
    bp: Breakpoint,
    measurer: &dyn TextMeasurer,
    texts: &Texts,
    formatter: &dyn ValueFormatter,
    opts: &AllocatorOptions,
) -> ColumnWidth {
    let header_width =
        measurer.measure(col.header_text(), defaults::header_font(bp)) + opts.header_allowance;

    let mut avg_content_width = header_width;
    if !sample.is_empty() {
        let mut total = header_width;
        for row in sample {
            let text = display_value(row, col, texts, formatter);
            total += measurer.measure(&text, defaults::body_font(bp)) + opts.padding_offset;
        }
        avg_content_width = total / (sample.len() + 1) as f64;
    }

    let base = defaults::base_width(col.ty, bp);
    let min = col
        .min_width
        .unwrap_or_else(|| defaults::min_width(col.ty, bp, opts.preserve_readability));
    let max = col
        .max_width
        .unwrap_or_else(|| defaults::max_width(col.ty, bp, container_width));
    let preferred = col.preferred_width.unwrap_or(base);

    let ideal = min.max(max.min(preferred.max(header_width.max(avg_content_width).ceil())));

    ColumnWidth {
        field: col.field.clone(),
        width: ideal,
        min_width: min,
        max_width: max,
        preferred_width: preferred,
        priority: column_priority(col),
        shrink_priority: col.shrink_priority,
        is_flexible: col.width.is_none() && !col.strict,
        is_strict: col.strict,
    }
}

/// Adjust ideal widths to the available width under a strategy, in place.
///
/// Minimum-width dominance: with `respect_min_widths` set, a column set whose
/// summed minimums exceed the available width is forced to
/// `max(min, preferred)` wholesale and allocation stops; the resulting
/// overflow is the caller's cue to enable horizontal scrolling.
pub fn redistribute(
    widths: &mut [ColumnWidth],
    available: f64,
    strategy: SizingStrategy,
    respect_min_widths: bool,
) {
    if widths.is_empty() {
        return;
    }

    let total_min: f64 = widths.iter().map(|w| w.min_width).sum();
    if respect_min_widths && total_min > available {
        force_preferred(widths);
        return;
    }

    match strategy {
        SizingStrategy::AutoWidth => force_preferred(widths),
        SizingStrategy::Hybrid => {
            let strict_width: f64 = widths
                .iter()
                .filter(|w| w.is_strict)
                .map(|w| w.preferred_width)
                .sum();
            let remaining = (available - strict_width).max(0.0);

            let flexible: Vec<usize> = flexible_indices(widths);
            let flex_min: f64 = flexible.iter().map(|&i| widths[i].min_width).sum();

            for w in widths.iter_mut() {
                if w.is_strict {
                    w.width = w.preferred_width;
                }
            }

            if flex_min > remaining {
                // Combined minimums overflow the leftover space: hand every
                // non-strict column its proportional share of it.
                for w in widths.iter_mut() {
                    if !w.is_strict {
                        let proportion = w.min_width / flex_min;
                        w.width = w.min_width.max((remaining * proportion).floor());
                    }
                }
                return;
            }

            auto_fit(widths, &flexible, remaining, respect_min_widths);
        }
        SizingStrategy::AutoFit => {
            let scope: Vec<usize> = (0..widths.len()).collect();
            auto_fit(widths, &scope, available, respect_min_widths);
        }
    }
}

fn force_preferred(widths: &mut [ColumnWidth]) {
    for w in widths.iter_mut() {
        w.width = w.min_width.max(w.preferred_width);
    }
}

fn flexible_indices(widths: &[ColumnWidth]) -> Vec<usize> {
    widths
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_flexible && !w.is_strict)
        .map(|(i, _)| i)
        .collect()
}

fn scope_total(widths: &[ColumnWidth], scope: &[usize]) -> f64 {
    scope.iter().map(|&i| widths[i].width).sum()
}

/// Auto-fit growth/shrink over `scope`, which is the whole set for
/// [`SizingStrategy::AutoFit`] and the flexible subset for
/// [`SizingStrategy::Hybrid`].
fn auto_fit(widths: &mut [ColumnWidth], scope: &[usize], available: f64, respect_min_widths: bool) {
    if scope.is_empty() {
        return;
    }

    let total_current = scope_total(widths, scope);
    let flexible: Vec<usize> = scope
        .iter()
        .copied()
        .filter(|&i| widths[i].is_flexible && !widths[i].is_strict)
        .collect();

    if total_current < available {
        grow(widths, scope, &flexible, available, total_current);
        return;
    }

    if total_current > available {
        shrink(
            widths,
            scope,
            &flexible,
            available,
            total_current,
            respect_min_widths,
        );
    }

    // Trailing remainder: spread small leftovers over still-expandable
    // flexible columns.
    let remainder = available - scope_total(widths, scope);
    if remainder > 0.0 && remainder < TRAILING_REMAINDER_LIMIT {
        let expandable: Vec<usize> = flexible
            .iter()
            .copied()
            .filter(|&i| widths[i].width < widths[i].max_width)
            .collect();
        if !expandable.is_empty() {
            let extra = (remainder / expandable.len() as f64).floor();
            for &i in &expandable {
                widths[i].width = widths[i].max_width.min(widths[i].width + extra);
            }
        }
    }
}

fn grow(
    widths: &mut [ColumnWidth],
    scope: &[usize],
    flexible: &[usize],
    available: f64,
    total_current: f64,
) {
    let extra = available - total_current;

    if flexible.is_empty() {
        // Nothing flexible: split evenly over every column in scope.
        let per_column = (extra / scope.len() as f64).floor();
        for &i in scope {
            widths[i].width += per_column;
        }
        return;
    }

    // First pass: equal share, capped at each column's maximum.
    let per_column = extra / flexible.len() as f64;
    for &i in flexible {
        let headroom = widths[i].max_width - widths[i].width;
        let increase = per_column.min(headroom);
        widths[i].width += increase.floor();
    }

    // Second pass: whatever the caps and flooring left over goes out
    // proportionally to current width. This pass is deliberately uncapped.
    let remaining = available - scope_total(widths, scope);
    if remaining > 0.0 {
        let total_flexible: f64 = flexible.iter().map(|&i| widths[i].width).sum();
        if total_flexible > 0.0 {
            for &i in flexible {
                let proportion = widths[i].width / total_flexible;
                widths[i].width += (remaining * proportion).floor();
            }
        }
    }
}

fn shrink(
    widths: &mut [ColumnWidth],
    scope: &[usize],
    flexible: &[usize],
    available: f64,
    total_current: f64,
    respect_min_widths: bool,
) {
    let excess = total_current - available;

    // Reduce flexible columns in shrink-priority order, each down to its
    // minimum, until the excess is absorbed.
    let mut reducible: Vec<usize> = flexible
        .iter()
        .copied()
        .filter(|&i| widths[i].width > widths[i].min_width)
        .collect();
    reducible.sort_by_key(|&i| widths[i].shrink_priority);

    let mut remaining_excess = excess;
    if !reducible.is_empty() {
        for &i in &reducible {
            let slack = widths[i].width - widths[i].min_width;
            let reduction = remaining_excess.min(slack);
            widths[i].width -= reduction.floor();
            remaining_excess -= reduction;
            if remaining_excess <= 0.0 {
                break;
            }
        }

        if remaining_excess > 0.0 && !respect_min_widths {
            // Proportional scale-down across the whole scope, floored at each
            // column's minimum at assignment. Pathological minimum
            // configurations can still end wider than available; that slack
            // break is intentional.
            let total_reducible: f64 = scope
                .iter()
                .map(|&i| widths[i].width - widths[i].min_width)
                .sum();
            if total_reducible > 0.0 {
                let scale = ((total_current - remaining_excess) / total_current).max(0.0);
                for &i in scope {
                    let scaled = widths[i].width * scale;
                    widths[i].width = widths[i].min_width.max(scaled.floor());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{FontSpec, HeuristicMeasurer};
    use proptest::prelude::*;
    use serde_json::json;
    use tgrid_core::DefaultFormatter;

    fn cw(field: &str, width: f64, min: f64, max: f64) -> ColumnWidth {
        ColumnWidth {
            field: field.into(),
            width,
            min_width: min,
            max_width: max,
            preferred_width: width,
            priority: 2,
            shrink_priority: 5,
            is_flexible: true,
            is_strict: false,
        }
    }

    #[test]
    fn available_width_floors_at_minimum() {
        assert_eq!(available_width(1000.0, 52.0), 916.0);
        assert_eq!(available_width(0.0, 0.0), MIN_USABLE_WIDTH);
        assert_eq!(available_width(-500.0, 52.0), MIN_USABLE_WIDTH);
        assert_eq!(available_width(200.0, 0.0), MIN_USABLE_WIDTH);
    }

    #[test]
    fn priority_ranks_unique_first() {
        assert_eq!(column_priority(&Column::new("id").unique(true)), 1);
        assert_eq!(column_priority(&Column::new("name")), 2);
        assert_eq!(
            column_priority(&Column::new("age").typed(ColumnType::Number)),
            3
        );
        assert_eq!(
            column_priority(&Column::new("dob").typed(ColumnType::Date)),
            4
        );
        assert_eq!(
            column_priority(&Column::new("ok").typed(ColumnType::Bool)),
            5
        );
    }

    #[test]
    fn auto_width_forces_preferred_over_min() {
        let mut widths = vec![cw("a", 120.0, 100.0, 400.0), cw("b", 90.0, 100.0, 400.0)];
        widths[1].preferred_width = 90.0;
        redistribute(&mut widths, 1000.0, SizingStrategy::AutoWidth, false);
        assert_eq!(widths[0].width, 120.0);
        // Preferred below minimum: minimum wins.
        assert_eq!(widths[1].width, 100.0);
    }

    #[test]
    fn respect_minimums_dominates_any_strategy() {
        for strategy in [SizingStrategy::AutoFit, SizingStrategy::Hybrid] {
            let mut widths = vec![cw("a", 250.0, 200.0, 400.0), cw("b", 250.0, 200.0, 400.0)];
            redistribute(&mut widths, 300.0, strategy, true);
            // Forced-minimum path: exactly max(min, preferred), overflowing.
            assert_eq!(widths[0].width, 250.0);
            assert_eq!(widths[1].width, 250.0);
            assert!(overflows(&widths, 300.0));
        }
    }

    #[test]
    fn auto_fit_grows_to_fill() {
        let mut widths = vec![cw("a", 100.0, 80.0, 400.0), cw("b", 100.0, 80.0, 400.0)];
        redistribute(&mut widths, 600.0, SizingStrategy::AutoFit, false);
        let sum = total_width(&widths);
        assert!((sum - 600.0).abs() <= 2.0, "sum {sum} should be ~600");
        assert!(widths[0].width > 100.0 && widths[1].width > 100.0);
    }

    #[test]
    fn auto_fit_growth_respects_max_then_spills() {
        let mut widths = vec![cw("a", 100.0, 80.0, 120.0), cw("b", 100.0, 80.0, 800.0)];
        redistribute(&mut widths, 600.0, SizingStrategy::AutoFit, false);
        // "a" capped in the first pass; the uncapped second pass may push it
        // slightly past its max while "b" absorbs most of the surplus.
        assert!(widths[1].width > 300.0);
        let sum = total_width(&widths);
        assert!((sum - 600.0).abs() <= 2.0, "sum {sum}");
    }

    #[test]
    fn auto_fit_no_flexible_splits_evenly() {
        let mut widths = vec![cw("a", 100.0, 80.0, 400.0), cw("b", 100.0, 80.0, 400.0)];
        for w in &mut widths {
            w.is_flexible = false;
        }
        redistribute(&mut widths, 500.0, SizingStrategy::AutoFit, false);
        assert_eq!(widths[0].width, 250.0);
        assert_eq!(widths[1].width, 250.0);
    }

    #[test]
    fn shrink_priority_order_is_respected() {
        let mut widths = vec![
            cw("low", 200.0, 100.0, 400.0),
            cw("mid", 200.0, 100.0, 400.0),
            cw("high", 200.0, 100.0, 400.0),
        ];
        widths[0].shrink_priority = 1;
        widths[1].shrink_priority = 5;
        widths[2].shrink_priority = 9;

        // Excess of 80 is fully covered by the priority-1 column's slack.
        redistribute(&mut widths, 520.0, SizingStrategy::AutoFit, false);
        assert_eq!(widths[0].width, 120.0);
        assert_eq!(widths[1].width, 200.0);
        assert_eq!(widths[2].width, 200.0);
    }

    #[test]
    fn shrink_moves_to_next_priority_when_first_exhausted() {
        let mut widths = vec![
            cw("low", 200.0, 100.0, 400.0),
            cw("mid", 200.0, 100.0, 400.0),
            cw("high", 200.0, 100.0, 400.0),
        ];
        widths[0].shrink_priority = 1;
        widths[1].shrink_priority = 5;
        widths[2].shrink_priority = 9;

        // Excess of 130: first column gives all 100 of its slack, the
        // priority-5 column covers the remaining 30.
        redistribute(&mut widths, 470.0, SizingStrategy::AutoFit, false);
        assert_eq!(widths[0].width, 100.0);
        assert_eq!(widths[1].width, 170.0);
        assert_eq!(widths[2].width, 200.0);
    }

    #[test]
    fn shrink_scale_down_floors_at_min() {
        // Flexible slack cannot absorb the excess: fixed column holds 400.
        let mut widths = vec![cw("fixed", 400.0, 100.0, 500.0), cw("flex", 200.0, 150.0, 400.0)];
        widths[0].is_flexible = false;
        redistribute(&mut widths, 400.0, SizingStrategy::AutoFit, false);
        // Flexible reduced to its min, then the proportional fallback scales
        // the scope, floored at each minimum.
        assert!(widths[1].width >= 150.0 - 1.0);
        assert!(widths[0].width >= 100.0);
        assert!(total_width(&widths) < 600.0);
    }

    #[test]
    fn hybrid_strict_columns_keep_preferred() {
        let mut widths = vec![cw("s", 150.0, 100.0, 400.0), cw("f", 200.0, 100.0, 400.0)];
        widths[0].is_strict = true;
        widths[0].is_flexible = false;
        widths[0].preferred_width = 150.0;
        redistribute(&mut widths, 800.0, SizingStrategy::Hybrid, false);
        assert_eq!(widths[0].width, 150.0);
        // Flexible column grew into the remaining 650.
        assert!(widths[1].width > 200.0);
    }

    #[test]
    fn hybrid_proportional_min_share_when_minimums_overflow() {
        let mut widths = vec![
            cw("s", 300.0, 100.0, 400.0),
            cw("f1", 200.0, 200.0, 400.0),
            cw("f2", 200.0, 100.0, 400.0),
        ];
        widths[0].is_strict = true;
        widths[0].is_flexible = false;
        widths[0].preferred_width = 300.0;
        // Remaining after strict = 100, flexible minimums = 300.
        redistribute(&mut widths, 400.0, SizingStrategy::Hybrid, false);
        assert_eq!(widths[0].width, 300.0);
        // Proportional shares floor at each column's min.
        assert_eq!(widths[1].width, 200.0);
        assert_eq!(widths[2].width, 100.0);
    }

    #[test]
    fn fractional_excess_lands_within_tolerance() {
        let mut widths = vec![cw("a", 210.0, 100.0, 400.0), cw("b", 200.0, 100.0, 400.0)];
        widths[0].shrink_priority = 1;
        redistribute(&mut widths, 403.5, SizingStrategy::AutoFit, false);
        let sum = total_width(&widths);
        assert!((sum - 403.5).abs() <= 4.0, "sum {sum}");
        // Ordered shrink took the whole excess from the priority-1 column.
        assert_eq!(widths[1].width, 200.0);
    }

    #[test]
    fn empty_columns_no_panic() {
        let mut widths: Vec<ColumnWidth> = Vec::new();
        redistribute(&mut widths, 500.0, SizingStrategy::AutoFit, false);
        assert!(widths.is_empty());
    }

    #[test]
    fn static_widths_use_hints_and_tables() {
        let columns = vec![
            Column::new("id").typed(ColumnType::Number).width(90.0),
            Column::new("name"),
        ];
        let opts = AllocatorOptions::default();
        let widths = static_widths(&columns, 1100.0, &opts);
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0].width, 90.0);
        // lg tier string base width.
        assert_eq!(widths[1].width, 160.0);
        assert!(widths.iter().all(|w| w.is_flexible));
    }

    #[test]
    fn resolve_widths_skips_hidden_columns() {
        let columns = vec![Column::new("a"), Column::new("b").hidden(true)];
        let widths = resolve_widths(
            &columns,
            &[],
            1000.0,
            &HeuristicMeasurer::default(),
            &Texts::default(),
            &DefaultFormatter,
            &AllocatorOptions::default(),
        );
        assert_eq!(widths.len(), 1);
        assert_eq!(widths[0].field, "a");
    }

    #[test]
    fn content_aware_ideal_tracks_long_values() {
        let columns = vec![Column::new("short"), Column::new("long")];
        let rows: Vec<Value> = (0..10)
            .map(|i| {
                json!({
                    "short": "ab",
                    "long": format!("a very long descriptive value number {i}"),
                })
            })
            .collect();
        // Wide max bounds so content differences survive clamping, and a
        // container whose growth the equal-share pass spreads evenly, keeping
        // the content-driven ordering intact.
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|c| c.min_width(60.0).max_width(900.0))
            .collect();
        let widths = resolve_widths(
            &columns,
            &rows,
            500.0,
            &HeuristicMeasurer::default(),
            &Texts::default(),
            &DefaultFormatter,
            &AllocatorOptions::default(),
        );
        assert!(
            widths[1].width > widths[0].width,
            "long content should get a wider column: {widths:?}"
        );
    }

    #[test]
    fn header_measurement_includes_allowance() {
        // Five columns whose ideal is exactly the header allowance (zero
        // measurer, hints pinned to 1px) against a container whose usable
        // width matches the sum: redistribution has nothing to do and the
        // allowance shows through unchanged.
        let columns: Vec<Column> = (0..5)
            .map(|i| {
                Column::new(format!("c{i}"))
                    .min_width(1.0)
                    .max_width(900.0)
                    .preferred_width(1.0)
            })
            .collect();
        let zero = |_: &str, _: FontSpec| 0.0;
        let widths = resolve_widths(
            &columns,
            &[],
            432.0,
            &zero,
            &Texts::default(),
            &DefaultFormatter,
            &AllocatorOptions::default(),
        );
        for w in &widths {
            assert_eq!(w.width, HEADER_ALLOWANCE);
        }
    }

    proptest! {
        /// Width-sum invariant: for flexible column sets whose minimums fit,
        /// auto-fit lands within one pixel per column of the target.
        #[test]
        fn auto_fit_sum_invariant(
            specs in proptest::collection::vec((50.0f64..100.0, 0.0f64..200.0), 1..12),
            available in 300.0f64..3000.0,
        ) {
            let mut widths: Vec<ColumnWidth> = specs
                .iter()
                .enumerate()
                .map(|(i, &(min, spread))| {
                    let preferred = min + spread;
                    let mut w = cw(&format!("c{i}"), preferred, min, preferred + 300.0);
                    w.preferred_width = preferred;
                    w
                })
                .collect();
            let total_min: f64 = widths.iter().map(|w| w.min_width).sum();
            prop_assume!(total_min <= available);

            redistribute(&mut widths, available, SizingStrategy::AutoFit, false);

            let sum = total_width(&widths);
            let slack = widths.len() as f64 + 1.0;
            prop_assert!(
                (sum - available).abs() <= slack,
                "sum {} vs available {} (slack {})", sum, available, slack
            );
        }

        /// Clamp invariant: the shrink path never drops a column below its
        /// minimum when minimums fit.
        #[test]
        fn shrink_respects_min_bounds(
            specs in proptest::collection::vec((50.0f64..100.0, 0.0f64..200.0), 1..12),
            available in 300.0f64..1500.0,
        ) {
            let mut widths: Vec<ColumnWidth> = specs
                .iter()
                .enumerate()
                .map(|(i, &(min, spread))| cw(&format!("c{i}"), min + spread, min, min + spread + 300.0))
                .collect();
            let total_min: f64 = widths.iter().map(|w| w.min_width).sum();
            prop_assume!(total_min <= available);

            redistribute(&mut widths, available, SizingStrategy::AutoFit, false);

            for w in &widths {
                prop_assert!(
                    w.width >= w.min_width - 1.0,
                    "column {} below min: {} < {}", w.field, w.width, w.min_width
                );
            }
        }
    }
}
