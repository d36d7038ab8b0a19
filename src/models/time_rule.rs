//! Time-of-day recommendation rules

use serde::Serialize;

/// One time-of-day rule mapping a block of hours to a theme.
///
/// Rules are evaluated in catalog order, first match wins. The final rule
/// carries no hour bounds and catches everything the earlier rules missed
/// (late night and early morning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRule {
    /// Display label for the hour range, e.g. "6:00 AM - 9:00 AM"
    pub hour_range: &'static str,
    /// Display label for the period, e.g. "Morning Energy"
    pub period: &'static str,
    /// Name of the recommended theme, resolved against the catalog
    pub theme: &'static str,
    /// Inclusive hour bounds, or None for the catch-all rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<(u8, u8)>,
}

impl TimeRule {
    /// Whether this rule claims the given hour (catch-all matches any hour)
    pub fn matches(&self, hour: i32) -> bool {
        match self.hours {
            Some((start, end)) => hour >= i32::from(start) && hour <= i32::from(end),
            None => true,
        }
    }
}
