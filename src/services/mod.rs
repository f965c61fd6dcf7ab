//! External collaborators: market data in, messages out.

pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use market_data::{MarketDataProvider, StaticMarketDataProvider};
pub use notifier::{DeliveryReceipt, Notifier};
