//! Per-column filtering and global search.
//!
//! Filters combine with AND across columns; search combines with OR across
//! searchable columns. Both are case-insensitive where text is involved and
//! never panic on malformed cells: a cell that fails the type coercion for
//! its column simply does not match.

use serde_json::Value;
use tgrid_core::{Column, ColumnType, FilterCondition, field_value, iso_date, numeric_value};
use tgrid_core::value::is_null_or_empty;
use tgrid_core::value_to_string;

/// Whether a column currently constrains the row set.
///
/// Null-check operators apply without an operand. Otherwise an empty or null
/// operand means "no filter", as does the literal `all` choice on bool
/// columns.
#[must_use]
pub fn has_active_filter(column: &Column) -> bool {
    if !column.filter {
        return false;
    }
    if column.effective_condition().is_null_check() {
        return true;
    }
    match &column.value {
        Value::Null => false,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return false;
            }
            !(column.ty == ColumnType::Bool && trimmed.eq_ignore_ascii_case("all"))
        }
        _ => true,
    }
}

/// Whether one record passes one column's filter.
#[must_use]
pub fn matches_filter(record: &Value, column: &Column) -> bool {
    let cell = field_value(record, &column.field);
    let condition = column.effective_condition();

    match condition {
        FilterCondition::IsNull => return is_null_or_empty(cell),
        FilterCondition::IsNotNull => return !is_null_or_empty(cell),
        _ => {}
    }

    match column.ty {
        ColumnType::Bool => {
            let want = match &column.value {
                Value::Bool(b) => *b,
                Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
                _ => return false,
            };
            matches!(cell, Some(Value::Bool(b)) if *b == want)
        }
        ColumnType::Number => {
            let (Some(cell_num), Some(filter_num)) = (
                cell.and_then(numeric_value),
                numeric_value(&column.value),
            ) else {
                return false;
            };
            match condition {
                FilterCondition::Equal => cell_num == filter_num,
                FilterCondition::NotEqual => cell_num != filter_num,
                FilterCondition::GreaterThan => cell_num > filter_num,
                FilterCondition::GreaterThanEqual => cell_num >= filter_num,
                FilterCondition::LessThan => cell_num < filter_num,
                FilterCondition::LessThanEqual => cell_num <= filter_num,
                _ => false,
            }
        }
        ColumnType::Date => {
            // ISO day strings compare correctly as plain strings.
            let (Some(cell_date), Some(filter_date)) =
                (cell.and_then(iso_date), iso_date(&column.value))
            else {
                return false;
            };
            match condition {
                FilterCondition::Equal => cell_date == filter_date,
                FilterCondition::NotEqual => cell_date != filter_date,
                FilterCondition::GreaterThan => cell_date > filter_date,
                FilterCondition::LessThan => cell_date < filter_date,
                _ => false,
            }
        }
        ColumnType::String => {
            let cell_str = cell.map(value_to_string).unwrap_or_default().to_lowercase();
            let filter_str = value_to_string(&column.value).to_lowercase();
            match condition {
                FilterCondition::Contain => cell_str.contains(&filter_str),
                FilterCondition::NotContain => !cell_str.contains(&filter_str),
                FilterCondition::Equal => cell_str == filter_str,
                FilterCondition::NotEqual => cell_str != filter_str,
                FilterCondition::StartWith => cell_str.starts_with(&filter_str),
                FilterCondition::EndWith => cell_str.ends_with(&filter_str),
                _ => false,
            }
        }
    }
}

/// Keep the rows passing every active column filter.
#[must_use]
pub fn apply_filters<'a>(rows: &[&'a Value], columns: &[Column]) -> Vec<&'a Value> {
    let active: Vec<&Column> = columns.iter().filter(|c| has_active_filter(c)).collect();
    if active.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|row| active.iter().all(|col| matches_filter(row, col)))
        .collect()
}

/// Keep the rows where any searchable visible column contains the query.
///
/// The query is trimmed and matched case-insensitively against the raw string
/// cast of each cell. A blank query keeps everything.
#[must_use]
pub fn apply_search<'a>(rows: &[&'a Value], columns: &[Column], query: &str) -> Vec<&'a Value> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    let searchable: Vec<&Column> = columns
        .iter()
        .filter(|c| c.search && !c.hide)
        .collect();
    rows.iter()
        .copied()
        .filter(|row| {
            searchable.iter().any(|col| {
                field_value(row, &col.field)
                    .map(value_to_string)
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .collect()
}
