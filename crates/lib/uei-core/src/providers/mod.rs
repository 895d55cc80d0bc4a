//! Typed response schemas, one module per upstream provider.
//!
//! Each schema is decoded once from the provider body and then reshaped into a
//! tool result; fields the tools never read are left out.

pub mod alphavantage;
pub mod brapi;
pub mod fred;
