//! Risk indicators: maximum drawdown

pub mod drawdown;

pub use drawdown::*;
