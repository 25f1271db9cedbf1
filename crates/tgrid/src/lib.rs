#![forbid(unsafe_code)]

//! Headless table engine.
//!
//! tgrid takes a column set and a record set and answers the questions a
//! table UI has to answer, without rendering anything itself:
//!
//! - how wide is each column in this container ([`resolve_widths`],
//!   [`SizingStrategy`])
//! - which rows are visible right now, in what order, on what page
//!   ([`TableSession`] and the pipeline stages behind it)
//! - which rows are selected, and what the header checkbox should show
//!   ([`SelectionTracker`], [`SelectionState`])
//! - what to send the server when the data lives remotely
//!   ([`StateDescriptor`])
//!
//! Records are [`serde_json::Value`] objects; malformed cells degrade to
//! empty/non-matching rather than failing.
//!
//! ```
//! use serde_json::json;
//! use tgrid::{Column, ColumnType, TableConfig, TableSession};
//!
//! let columns = vec![
//!     Column::new("id").typed(ColumnType::Number).unique(true),
//!     Column::new("name").title("Name"),
//! ];
//! let mut session = TableSession::new(columns, TableConfig::default());
//! session.set_rows(vec![
//!     json!({"id": 1, "name": "Ada"}),
//!     json!({"id": 2, "name": "Grace"}),
//! ]);
//! session.set_sort("name");
//! assert_eq!(session.displayed_rows().len(), 2);
//! ```

pub use tgrid_core::{
    Column, ColumnType, DefaultFormatter, FilterCondition, SortDirection, Texts, ValueFormatter,
    display_value, field_value, natural_cmp, normalize, unique_key, value_to_string, visible,
};
pub use tgrid_layout::{
    AllocatorOptions, Breakpoint, Breakpoints, ColumnWidth, FontSpec, HeuristicMeasurer,
    SizingStrategy, TextMeasurer, available_width, overflows, resolve_widths, static_widths,
    total_width,
};
pub use tgrid_pipeline::{
    ChangeType, Debounce, FilterDescriptor, Mode, PaginationData, RowKey, SelectionState,
    SelectionTracker, StateDescriptor, TableConfig, TableSession, apply_filters, apply_search,
    matches_filter, page_slice, sort_rows,
};

/// Convenience glob import for hosts.
pub mod prelude {
    pub use crate::{
        Column, ColumnType, ColumnWidth, FilterCondition, Mode, SelectionState, SizingStrategy,
        SortDirection, StateDescriptor, TableConfig, TableSession,
    };
}
