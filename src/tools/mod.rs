//! Whimsy Tools module
//!
//! MCP tool implementations for the measurement converter.

pub mod catalog;
pub mod convert;
pub mod history;
pub mod status;
