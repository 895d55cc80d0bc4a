//! MCP tool modules.
//!
//! Tools are grouped by domain: equity quotes, rates (Treasury yields and FX),
//! and contextual help.

pub mod quotes;
pub mod rates;
mod context;
