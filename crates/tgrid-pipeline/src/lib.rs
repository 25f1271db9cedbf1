#![forbid(unsafe_code)]

//! Row pipeline and mode coordination for the tgrid table engine.
//!
//! The pipeline turns the caller's record set into the displayed window in a
//! fixed order: per-column filters, then global search, then sort, then
//! pagination. Each stage is a standalone pure function; [`TableSession`]
//! wires them together and adds the stateful concerns:
//!
//! - [`SelectionTracker`] - key-based row selection surviving re-sorts
//! - [`Debounce`] - poll-driven deadline timer for search/filter/resize
//! - [`TableSession`] - local/remote mode coordinator emitting
//!   [`StateDescriptor`] snapshots for server-side data sources
//!
//! In local mode every stage runs in-process. In remote mode the stages are
//! the server's job and the session only tracks state, debounces, and emits.

pub mod debounce;
pub mod filter;
pub mod page;
pub mod selection;
pub mod session;
pub mod sort;

pub use debounce::Debounce;
pub use filter::{apply_filters, apply_search, has_active_filter, matches_filter};
pub use page::{PaginationData, page_slice};
pub use selection::{RowKey, SelectionState, SelectionTracker, row_key};
pub use session::{
    ChangeType, FilterDescriptor, Mode, StateDescriptor, TableConfig, TableSession,
};
pub use sort::sort_rows;
