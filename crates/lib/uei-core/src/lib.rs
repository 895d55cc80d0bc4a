//! Core market data services for uei-mcp.
//!
//! This crate owns the provider configuration, the one-shot HTTP fetch helper,
//! the typed response schemas for brapi.dev, Alpha Vantage and FRED, and the
//! [`market::MarketClient`] that turns those responses into tool results.

pub mod config;
pub mod error;
pub mod fetch;
pub mod market;
pub mod providers;
