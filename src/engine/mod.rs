//! Validation engine module.
//!
//! Provides issue detection, product aggregation, status rollup, and fixes.

pub mod aggregate;
pub mod detector;
pub mod fix;
pub mod result;
