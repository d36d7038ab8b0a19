//! Console palette for inkmood
//!
//! This module provides the centralized colors and styling helpers used by
//! the demo output. Semantic names only; sections decide what to emphasize.

use crossterm::style::{Color, StyledContent, Stylize};

/// Primary accent for section headers and the banner
pub const ACCENT: Color = Color::Magenta;

/// Highlight color for theme names and values
pub const HIGHLIGHT: Color = Color::Cyan;

/// Labels in front of values ("Psychology:", "Best for:")
pub const LABEL: Color = Color::DarkYellow;

/// Secondary text that should recede (separators, hints)
pub const MUTED: Color = Color::DarkGrey;

/// Style a section header line
pub fn header(text: &str) -> StyledContent<&str> {
    text.with(ACCENT).bold()
}

/// Style a theme or value name
pub fn highlight(text: &str) -> StyledContent<&str> {
    text.with(HIGHLIGHT).bold()
}

/// Style a field label
pub fn label(text: &str) -> StyledContent<&str> {
    text.with(LABEL)
}

/// Style muted secondary text
pub fn muted(text: &str) -> StyledContent<&str> {
    text.with(MUTED)
}

/// Separator line matching a header's width
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}
