//! Data models for inkmood
//!
//! This module contains the core data records:
//! - Theme records carrying the color-psychology metadata
//! - Time-of-day rules pairing hour blocks with theme recommendations

pub mod theme;
pub mod time_rule;

// Re-exports for convenient access
pub use theme::Theme;
pub use time_rule::TimeRule;
