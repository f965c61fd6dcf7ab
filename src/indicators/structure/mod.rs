//! Price structure: recent lows/highs and cycle position

pub mod range;

pub use range::*;
