//! Application flows shared by the binaries.

pub mod notify;
pub mod pipeline;

pub use notify::*;
pub use pipeline::*;
