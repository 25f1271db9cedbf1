//! Display formatting collaborators.
//!
//! The engine needs rendered cell text in two places: content-aware width
//! estimation and the displayed row window. Actual locale formatting is the
//! host's concern; [`ValueFormatter`] is the seam for it, with a plain
//! deterministic default.

use crate::column::{Column, ColumnType};
use crate::value::{field_value, iso_date, value_to_string};
use serde_json::Value;

/// Label texts used when rendering values, overridable per table.
#[derive(Debug, Clone)]
pub struct Texts {
    /// Pagination summary template with `{start}`, `{end}`, `{total}` slots.
    pub pagination_info: String,
    /// Shown when the displayed window is empty.
    pub no_data: String,
    /// Placeholder for per-column filter inputs.
    pub filter_placeholder: String,
    /// Rendered for a truthy bool cell.
    pub boolean_yes: String,
    /// Rendered for a falsy bool cell.
    pub boolean_no: String,
    /// Bool filter option labels.
    pub boolean_true: String,
    /// See [`Texts::boolean_true`].
    pub boolean_false: String,
    /// "No bool filter" option label.
    pub boolean_all: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            pagination_info: "Showing {start} to {end} of {total} entries".into(),
            no_data: "No data available".into(),
            filter_placeholder: "Filter...".into(),
            boolean_yes: "Yes".into(),
            boolean_no: "No".into(),
            boolean_true: "True".into(),
            boolean_false: "False".into(),
            boolean_all: "All".into(),
        }
    }
}

/// Locale-aware rendering seam. Implementations must be deterministic.
pub trait ValueFormatter {
    /// Render an ISO `YYYY-MM-DD` date for display.
    fn format_date(&self, iso: &str) -> String {
        iso.to_string()
    }

    /// Render a number for display.
    fn format_number(&self, value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            format!("{value}")
        }
    }
}

/// Plain formatter: ISO dates, unseparated numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl ValueFormatter for DefaultFormatter {}

/// Render the cell at `column.field` for display.
///
/// Degrades per type: an unparseable date renders as an empty string, a
/// non-numeric number cell falls back to its string cast, a missing path is
/// empty.
#[must_use]
pub fn display_value(
    record: &Value,
    column: &Column,
    texts: &Texts,
    formatter: &dyn ValueFormatter,
) -> String {
    let value = field_value(record, &column.field);
    match column.ty {
        ColumnType::Bool => {
            let truthy = matches!(value, Some(Value::Bool(true)));
            if truthy {
                texts.boolean_yes.clone()
            } else {
                texts.boolean_no.clone()
            }
        }
        ColumnType::Date => match value.and_then(iso_date) {
            Some(iso) => formatter.format_date(&iso),
            None => String::new(),
        },
        ColumnType::Number => match value.and_then(crate::value::numeric_value) {
            Some(n) => formatter.format_number(n),
            None => value.map(value_to_string).unwrap_or_default(),
        },
        ColumnType::String => value.map(value_to_string).unwrap_or_default(),
    }
}

/// Fill `{name}` slots in a template string.
#[must_use]
pub fn interpolate(template: &str, slots: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in slots {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use serde_json::json;

    fn texts() -> Texts {
        Texts::default()
    }

    #[test]
    fn bool_cells_use_labels() {
        let col = Column::new("active").typed(ColumnType::Bool);
        let t = texts();
        assert_eq!(
            display_value(&json!({"active": true}), &col, &t, &DefaultFormatter),
            "Yes"
        );
        assert_eq!(
            display_value(&json!({"active": false}), &col, &t, &DefaultFormatter),
            "No"
        );
        // Missing counts as falsy, same as a null cell.
        assert_eq!(display_value(&json!({}), &col, &t, &DefaultFormatter), "No");
    }

    #[test]
    fn date_cells_normalize_or_blank() {
        let col = Column::new("when").typed(ColumnType::Date);
        let t = texts();
        assert_eq!(
            display_value(
                &json!({"when": "2024-03-07T12:00:00Z"}),
                &col,
                &t,
                &DefaultFormatter
            ),
            "2024-03-07"
        );
        assert_eq!(
            display_value(&json!({"when": "garbage"}), &col, &t, &DefaultFormatter),
            ""
        );
    }

    #[test]
    fn number_cells_format_or_fall_back() {
        let col = Column::new("n").typed(ColumnType::Number);
        let t = texts();
        assert_eq!(
            display_value(&json!({"n": 1200}), &col, &t, &DefaultFormatter),
            "1200"
        );
        assert_eq!(
            display_value(&json!({"n": 2.5}), &col, &t, &DefaultFormatter),
            "2.5"
        );
        assert_eq!(
            display_value(&json!({"n": {"x": 1}}), &col, &t, &DefaultFormatter),
            "{\"x\":1}"
        );
    }

    #[test]
    fn string_cells_pass_through() {
        let col = Column::new("name");
        let t = texts();
        assert_eq!(
            display_value(&json!({"name": "Ada"}), &col, &t, &DefaultFormatter),
            "Ada"
        );
        assert_eq!(display_value(&json!({}), &col, &t, &DefaultFormatter), "");
    }

    #[test]
    fn custom_formatter_is_consulted() {
        struct Dotty;
        impl ValueFormatter for Dotty {
            fn format_number(&self, value: f64) -> String {
                format!("{value:.2}")
            }
        }
        let col = Column::new("n").typed(ColumnType::Number);
        assert_eq!(
            display_value(&json!({"n": 3}), &col, &texts(), &Dotty),
            "3.00"
        );
    }

    #[test]
    fn interpolate_fills_slots() {
        let out = interpolate(
            "Showing {start} to {end} of {total} entries",
            &[
                ("start", "1".into()),
                ("end", "10".into()),
                ("total", "47".into()),
            ],
        );
        assert_eq!(out, "Showing 1 to 10 of 47 entries");
    }
}
