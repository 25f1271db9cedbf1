//! Column descriptors and normalization.
//!
//! A [`Column`] describes one displayable field: where to read it from
//! (a dotted path), how to type it, and how it participates in sorting,
//! filtering, searching, and width allocation. Descriptors arrive from the
//! caller in any state of completeness; [`normalize`] fills defaults so the
//! rest of the engine never sees a partially-specified column.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value type of a column, driving filter matching, formatting, and the
/// default width tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text (the default).
    #[default]
    String,
    /// Numeric values, compared after numeric coercion.
    Number,
    /// Dates, normalized to `YYYY-MM-DD` before comparison.
    Date,
    /// Booleans, matched by strict equality.
    Bool,
}

/// Sort order for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Filter operator applied between a cell value and the filter operand.
///
/// Which operators make sense depends on the column type; see
/// [`FilterCondition::options_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    /// Case-insensitive substring match (string default).
    Contain,
    /// Negated substring match.
    NotContain,
    /// Equality (default for number, date, and bool).
    Equal,
    /// Negated equality.
    NotEqual,
    /// Case-insensitive prefix match.
    StartWith,
    /// Case-insensitive suffix match.
    EndWith,
    /// Strictly greater than.
    GreaterThan,
    /// Greater than or equal (numbers only).
    GreaterThanEqual,
    /// Strictly less than.
    LessThan,
    /// Less than or equal (numbers only).
    LessThanEqual,
    /// Value is null or empty, regardless of declared type.
    IsNull,
    /// Value is present and non-empty.
    IsNotNull,
}

impl FilterCondition {
    /// Default condition for a column type: `Contain` for strings,
    /// `Equal` for everything else.
    #[must_use]
    pub const fn default_for(ty: ColumnType) -> Self {
        match ty {
            ColumnType::String => FilterCondition::Contain,
            _ => FilterCondition::Equal,
        }
    }

    /// True for the null-check operators, which apply without an operand.
    #[must_use]
    pub const fn is_null_check(self) -> bool {
        matches!(self, FilterCondition::IsNull | FilterCondition::IsNotNull)
    }

    /// Operators selectable for a column type.
    ///
    /// Bool columns expose no operator menu (the tri-state all/true/false
    /// select covers them), so their list is empty.
    #[must_use]
    pub const fn options_for(ty: ColumnType) -> &'static [FilterCondition] {
        match ty {
            ColumnType::String => &[
                FilterCondition::Contain,
                FilterCondition::NotContain,
                FilterCondition::Equal,
                FilterCondition::NotEqual,
                FilterCondition::StartWith,
                FilterCondition::EndWith,
                FilterCondition::IsNull,
                FilterCondition::IsNotNull,
            ],
            ColumnType::Number => &[
                FilterCondition::Equal,
                FilterCondition::NotEqual,
                FilterCondition::GreaterThan,
                FilterCondition::GreaterThanEqual,
                FilterCondition::LessThan,
                FilterCondition::LessThanEqual,
                FilterCondition::IsNull,
                FilterCondition::IsNotNull,
            ],
            ColumnType::Date => &[
                FilterCondition::Equal,
                FilterCondition::NotEqual,
                FilterCondition::GreaterThan,
                FilterCondition::LessThan,
                FilterCondition::IsNull,
                FilterCondition::IsNotNull,
            ],
            ColumnType::Bool => &[],
        }
    }
}

fn default_shrink_priority() -> u8 {
    5
}

fn default_true() -> bool {
    true
}

fn default_filter_value() -> Value {
    Value::String(String::new())
}

/// Descriptor for one displayable field.
///
/// All width hints are optional explicit pixel values; absent hints fall back
/// to the responsive default tables in the layout crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Dotted path used to read a value out of a record (e.g. `"user.name"`).
    pub field: String,
    /// Value type; defaults to string.
    #[serde(rename = "type", default)]
    pub ty: ColumnType,
    /// Header text; falls back to `field` when absent.
    #[serde(default)]
    pub title: Option<String>,
    /// Excluded from display, search, and width allocation.
    #[serde(default)]
    pub hide: bool,
    /// Eligible for sorting.
    #[serde(default = "default_true")]
    pub sort: bool,
    /// Eligible for per-column filtering.
    #[serde(default = "default_true")]
    pub filter: bool,
    /// Participates in the global search.
    #[serde(default = "default_true")]
    pub search: bool,
    /// Marks the record-identity field. At most one column wins; see
    /// [`unique_key`].
    #[serde(default)]
    pub is_unique: bool,
    /// Explicit fixed width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Explicit minimum width in pixels.
    #[serde(default)]
    pub min_width: Option<f64>,
    /// Explicit maximum width in pixels.
    #[serde(default)]
    pub max_width: Option<f64>,
    /// Explicit preferred width in pixels.
    #[serde(default)]
    pub preferred_width: Option<f64>,
    /// Never resized by redistribution; always keeps its preferred width.
    #[serde(default)]
    pub strict: bool,
    /// Lower values shrink first when space is insufficient.
    #[serde(default = "default_shrink_priority")]
    pub shrink_priority: u8,
    /// Active filter operator; `None` until normalized.
    #[serde(default)]
    pub condition: Option<FilterCondition>,
    /// Current filter operand. An empty string means "no filter".
    #[serde(default = "default_filter_value")]
    pub value: Value,
}

impl Column {
    /// Create a string column with engine defaults for the given field path.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ty: ColumnType::String,
            title: None,
            hide: false,
            sort: true,
            filter: true,
            search: true,
            is_unique: false,
            width: None,
            min_width: None,
            max_width: None,
            preferred_width: None,
            strict: false,
            shrink_priority: default_shrink_priority(),
            condition: None,
            value: default_filter_value(),
        }
    }

    /// Set the column type.
    #[must_use]
    pub fn typed(mut self, ty: ColumnType) -> Self {
        self.ty = ty;
        self
    }

    /// Set the header title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Hide the column.
    #[must_use]
    pub fn hidden(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    /// Mark as the record-identity field.
    #[must_use]
    pub fn unique(mut self, is_unique: bool) -> Self {
        self.is_unique = is_unique;
        self
    }

    /// Set an explicit fixed width in pixels.
    #[must_use]
    pub fn width(mut self, px: f64) -> Self {
        self.width = Some(px);
        self
    }

    /// Set an explicit minimum width in pixels.
    #[must_use]
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Set an explicit maximum width in pixels.
    #[must_use]
    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    /// Set an explicit preferred width in pixels.
    #[must_use]
    pub fn preferred_width(mut self, px: f64) -> Self {
        self.preferred_width = Some(px);
        self
    }

    /// Exempt from redistribution.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the shrink priority (lower shrinks first).
    #[must_use]
    pub fn shrink_priority(mut self, priority: u8) -> Self {
        self.shrink_priority = priority;
        self
    }

    /// Opt out of sorting.
    #[must_use]
    pub fn sortable(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Opt out of per-column filtering.
    #[must_use]
    pub fn filterable(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Opt out of the global search.
    #[must_use]
    pub fn searchable(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    /// Header text: the title, or the field path when no title is set.
    #[must_use]
    pub fn header_text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.field)
    }

    /// The active filter operator, falling back to the type default.
    #[must_use]
    pub fn effective_condition(&self) -> FilterCondition {
        self.condition
            .unwrap_or_else(|| FilterCondition::default_for(self.ty))
    }

    /// Clear filter state back to defaults (empty operand, type-default
    /// operator).
    pub fn clear_filter(&mut self) {
        self.value = default_filter_value();
        self.condition = Some(FilterCondition::default_for(self.ty));
    }
}

/// Fill defaults across a column set, in place.
///
/// After this every column has a concrete filter condition and at most one
/// column keeps `is_unique` (first match wins).
pub fn normalize(columns: &mut [Column]) {
    let mut unique_seen = false;
    for col in columns.iter_mut() {
        if col.condition.is_none() {
            col.condition = Some(FilterCondition::default_for(col.ty));
        }
        if col.is_unique {
            if unique_seen {
                col.is_unique = false;
            }
            unique_seen = true;
        }
    }
}

/// The field path of the record-identity column, if one is marked.
#[must_use]
pub fn unique_key(columns: &[Column]) -> Option<&str> {
    columns
        .iter()
        .find(|c| c.is_unique)
        .map(|c| c.field.as_str())
}

/// The non-hidden subset, in declaration order.
pub fn visible(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|c| !c.hide)
}
