//! Technical indicators over daily closes.
//!
//! Every function is pure and returns `None` when the input cannot support
//! a value (too little history, NaN, degenerate range).

pub mod momentum;
pub mod risk;
pub mod structure;

pub use momentum::*;
pub use risk::*;
pub use structure::*;
