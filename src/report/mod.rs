//! Undercurrent cycle report: per-symbol snapshots and text assembly.
//!
//! Both halves are pure; fetching and delivery live in `core::pipeline`.

pub mod builder;
pub mod snapshot;

pub use builder::{build_report, summary_for, DATA_UNAVAILABLE};
pub use snapshot::SymbolSnapshot;
