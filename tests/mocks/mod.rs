//! Fixtures for testing without real MSDS data.
//!
//! This module provides record builders and canned products covering clean,
//! fixable, overfilled, and hazardous cases.

pub mod products;

pub use products::*;
