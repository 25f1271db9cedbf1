//! Stable row ordering.

use serde_json::Value;
use tgrid_core::{Column, SortDirection, field_value, natural_cmp, value_to_string};

/// Sort rows by one column, in place.
///
/// Values are compared through the natural comparator on their string casts,
/// so `"Item 2"` sorts before `"Item 10"` and numeric columns order
/// numerically without a separate code path. Missing cells compare as empty
/// strings and therefore sort first ascending. The sort is stable: equal keys
/// keep their incoming order, and re-sorting an already sorted set is a
/// no-op.
///
/// Nothing happens when `sort_column` is `None`, names an unknown field, or
/// names a column with sorting disabled.
pub fn sort_rows(
    rows: &mut [&Value],
    columns: &[Column],
    sort_column: Option<&str>,
    direction: SortDirection,
) {
    let Some(field) = sort_column else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.field == field) else {
        return;
    };
    if !column.sort {
        return;
    }

    rows.sort_by(|a, b| {
        let key_a = field_value(a, field).map(value_to_string).unwrap_or_default();
        let key_b = field_value(b, field).map(value_to_string).unwrap_or_default();
        let ordering = natural_cmp(&key_a, &key_b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
