//! Writing theme record
//!
//! A theme bundles the psychological metadata shown throughout the demo:
//! what the color palette claims to do and which kinds of writing it suits.

use serde::Serialize;

/// A named color-psychology theme for a writing context.
///
/// All fields are static display strings defined once in the catalog; the
/// claimed effect numbers ("+23% focus") are flavor text and stay opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Unique human-readable name, e.g. "Focused Flow"
    pub name: &'static str,
    /// Decorative display glyph
    pub emoji: &'static str,
    /// One-sentence psychological rationale
    pub description: &'static str,
    /// One-sentence claimed benefit
    pub effect: &'static str,
    /// Use-case tags in display order, never empty
    pub best_for: &'static [&'static str],
}

impl Theme {
    /// Format the use-case tags as a single comma-separated line
    pub fn best_for_line(&self) -> String {
        self.best_for.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_for_line_joins_tags() {
        let theme = Theme {
            name: "Test",
            emoji: "🔵",
            description: "desc",
            effect: "effect",
            best_for: &["Poetry", "Fiction"],
        };
        assert_eq!(theme.best_for_line(), "Poetry, Fiction");
    }

    #[test]
    fn test_best_for_line_single_tag() {
        let theme = Theme {
            name: "Test",
            emoji: "🔵",
            description: "desc",
            effect: "effect",
            best_for: &["Editing"],
        };
        assert_eq!(theme.best_for_line(), "Editing");
    }
}
