//! Output formatting module
//!
//! Renders each flow's result set as a table, CSV, or JSON. Result sets
//! arrive unordered from the collector; every renderer groups and sorts by
//! origin compartment before printing.

mod common;
mod listing;
mod search;
mod sweep;

pub use common::escape_csv;
pub use listing::output_listing;
pub use search::output_search;
pub use sweep::output_sweep;
