//! Whimsy Measurement Converter Library
//!
//! Core functionality for converting measurements into quirky,
//! relatable units.

pub mod build_info;
pub mod convert;
pub mod db;
pub mod mcp;
pub mod models;
pub mod tools;
