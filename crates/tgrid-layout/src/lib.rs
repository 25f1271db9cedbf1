#![forbid(unsafe_code)]

//! Column-width allocation for the tgrid table engine.
//!
//! This crate turns heterogeneous width hints (fixed, preferred, min, max,
//! shrink priority, strict) plus live container measurements into a concrete
//! per-column pixel assignment:
//!
//! - [`Breakpoint`] / [`Breakpoints`] - responsive container-width buckets
//! - [`defaults`] - per type/breakpoint base, min, and max width tables
//! - [`TextMeasurer`] - seam for rendered-text width measurement
//! - [`allocate`] - content sampling, ideal widths, and redistribution under
//!   a [`SizingStrategy`]
//!
//! The allocator is a pure function of its inputs: no side effects, never
//! panics, and a zero or negative container width degrades to the forced
//! minimum-width path instead of producing nonsense.

pub mod allocate;
pub mod breakpoint;
pub mod defaults;
pub mod measure;

pub use allocate::{
    AllocatorOptions, ColumnWidth, SizingStrategy, available_width, column_priority,
    overflows, resolve_widths, static_widths, total_width,
};
pub use breakpoint::{Breakpoint, Breakpoints};
pub use measure::{FontSpec, HeuristicMeasurer, TextMeasurer};
