pub mod client;

pub use client::{MarketError, YahooMarketClient};
