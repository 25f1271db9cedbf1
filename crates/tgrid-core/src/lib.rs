#![forbid(unsafe_code)]

//! Core data model for the tgrid table engine.
//!
//! This crate holds the leaf data structures and utilities everything else
//! builds on:
//!
//! - [`Column`] - validated, defaulted column descriptors
//! - [`value`] - safe dotted-path access into record objects
//! - [`natural_cmp`] - deterministic, numeric-aware, case-insensitive comparator
//! - [`format`] - display formatting collaborators and label texts
//!
//! Records are [`serde_json::Value`] objects. Every lookup degrades to a safe
//! default rather than failing: a missing path reads as null, an unparseable
//! date formats as an empty string.

pub mod column;
pub mod format;
pub mod natural;
pub mod value;

pub use column::{
    Column, ColumnType, FilterCondition, SortDirection, normalize, unique_key, visible,
};
pub use format::{DefaultFormatter, Texts, ValueFormatter, display_value, interpolate};
pub use natural::natural_cmp;
pub use value::{field_value, iso_date, numeric_value, value_to_string};
