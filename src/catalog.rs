//! Theme catalog and recommendation lookups
//!
//! The catalog is the heart of inkmood: 12 color-psychology themes, a genre
//! recommendation map, and a set of time-of-day rules. Everything is built
//! once at startup, validated, and never mutated afterwards, so lookups are
//! pure functions over immutable data.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::{Theme, TimeRule};

/// Number of themes in the catalog
pub const THEME_COUNT: usize = 12;

/// Number of writing genres with a mapped recommendation
pub const GENRE_COUNT: usize = 8;

static THEMES: [Theme; THEME_COUNT] = [
    Theme {
        name: "Focused Flow",
        emoji: "🔵",
        description: "Cool blues enhance concentration and reduce mental fatigue",
        effect: "Increases focus by 23%, reduces eye strain",
        best_for: &[
            "Academic writing",
            "Technical documentation",
            "Non-fiction",
            "Business content",
        ],
    },
    Theme {
        name: "Creative Burst",
        emoji: "🟠",
        description: "Vibrant oranges and purples stimulate imagination and innovation",
        effect: "Boosts creative thinking by 31%, enhances innovation",
        best_for: &["Fiction", "Brainstorming", "Creative writing", "Poetry"],
    },
    Theme {
        name: "Zen Garden",
        emoji: "🟢",
        description: "Soft greens promote relaxation and steady writing flow",
        effect: "Reduces stress cortisol by 18%, improves flow state",
        best_for: &[
            "Long writing sessions",
            "Meditation writing",
            "Journaling",
            "Peaceful narratives",
        ],
    },
    Theme {
        name: "Power Writing",
        emoji: "🔴",
        description: "Bold reds increase alertness and writing speed",
        effect: "Increases alertness by 27%, speeds up typing",
        best_for: &[
            "Action scenes",
            "Fast-paced writing",
            "Motivation",
            "High energy content",
        ],
    },
    Theme {
        name: "Romance Mode",
        emoji: "🩷",
        description: "Warm pinks and roses inspire emotional writing",
        effect: "Enhances emotional expression by 35%",
        best_for: &[
            "Romance novels",
            "Emotional scenes",
            "Love letters",
            "Intimate narratives",
        ],
    },
    Theme {
        name: "Dark Mystery",
        emoji: "🟣",
        description: "Deep purples and blacks create atmospheric tension",
        effect: "Creates atmospheric immersion, enhances mood writing",
        best_for: &["Thrillers", "Horror", "Suspense", "Dark fiction"],
    },
    Theme {
        name: "Futuristic",
        emoji: "🔷",
        description: "Electric blues and cyans for futuristic storytelling",
        effect: "Stimulates futuristic thinking, tech inspiration",
        best_for: &[
            "Science fiction",
            "Futuristic stories",
            "Tech writing",
            "Speculative fiction",
        ],
    },
    Theme {
        name: "Forest Retreat",
        emoji: "🟤",
        description: "Earth tones connect you with natural creativity",
        effect: "Connects with natural creativity, reduces writer's block",
        best_for: &[
            "Nature writing",
            "Environmental content",
            "Outdoor adventures",
            "Organic storytelling",
        ],
    },
    Theme {
        name: "Vintage Paper",
        emoji: "🟡",
        description: "Sepia and cream for classic, timeless writing",
        effect: "Evokes nostalgia, perfect for period writing",
        best_for: &[
            "Historical fiction",
            "Period pieces",
            "Classic style",
            "Nostalgic writing",
        ],
    },
    Theme {
        name: "Pure Focus",
        emoji: "⚪",
        description: "High contrast for distraction-free focus",
        effect: "Eliminates distractions, pure focus on words",
        best_for: &[
            "Clean prose",
            "Distraction-free writing",
            "Editing",
            "Technical accuracy",
        ],
    },
    Theme {
        name: "Cozy Fireplace",
        emoji: "🧡",
        description: "Golden hues create comfortable, inviting atmosphere",
        effect: "Creates comfort zone, reduces writing anxiety",
        best_for: &[
            "Cozy fiction",
            "Family stories",
            "Comfort writing",
            "Heartwarming tales",
        ],
    },
    Theme {
        name: "Ocean Depths",
        emoji: "🔵",
        description: "Deep blue-greens for contemplative, flowing prose",
        effect: "Promotes deep thinking, philosophical writing",
        best_for: &[
            "Philosophical writing",
            "Deep thinking",
            "Contemplative prose",
            "Wisdom literature",
        ],
    },
];

/// Genre label -> theme name, in display order
static GENRE_RECOMMENDATIONS: [(&str, &str); GENRE_COUNT] = [
    ("Fiction", "Creative Burst"),
    ("Non-Fiction", "Focused Flow"),
    ("Romance", "Romance Mode"),
    ("Mystery/Thriller", "Dark Mystery"),
    ("Science Fiction", "Futuristic"),
    ("Memoir/Biography", "Cozy Fireplace"),
    ("Academic/Technical", "Pure Focus"),
    ("Poetry/Creative", "Forest Retreat"),
];

/// Time-of-day rules, evaluated top to bottom with the catch-all last
static TIME_RULES: [TimeRule; 5] = [
    TimeRule {
        hour_range: "6:00 AM - 9:00 AM",
        period: "Morning Energy",
        theme: "Power Writing",
        hours: Some((6, 9)),
    },
    TimeRule {
        hour_range: "10:00 AM - 2:00 PM",
        period: "Peak Focus",
        theme: "Focused Flow",
        hours: Some((10, 14)),
    },
    TimeRule {
        hour_range: "3:00 PM - 6:00 PM",
        period: "Creative Hours",
        theme: "Creative Burst",
        hours: Some((15, 18)),
    },
    TimeRule {
        hour_range: "7:00 PM - 9:00 PM",
        period: "Evening Calm",
        theme: "Zen Garden",
        hours: Some((19, 21)),
    },
    TimeRule {
        hour_range: "10:00 PM - 5:59 AM",
        period: "Night Writing",
        theme: "Dark Mystery",
        hours: None,
    },
];

/// The immutable theme catalog with its genre and time-of-day lookups.
///
/// Construction resolves every mapped theme name to a catalog index, so a
/// broken reference surfaces once as [`CatalogError::NotFound`] instead of
/// failing deep inside a render pass.
#[derive(Debug)]
pub struct ThemeCatalog {
    themes: &'static [Theme],
    by_name: HashMap<&'static str, usize>,
    // (genre label, catalog index), insertion order preserved for display
    genres: Vec<(&'static str, usize)>,
    // (rule, catalog index), evaluation order preserved
    time_rules: Vec<(&'static TimeRule, usize)>,
}

impl ThemeCatalog {
    /// Build and validate the full catalog
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_parts(&THEMES, &GENRE_RECOMMENDATIONS, &TIME_RULES)
    }

    /// Build a catalog from explicit data, validating referential integrity.
    ///
    /// Duplicate names and empty fields are authoring errors in static data
    /// and fail hard; a mapped name missing from the catalog is reported as
    /// [`CatalogError::NotFound`].
    fn from_parts(
        themes: &'static [Theme],
        genres: &'static [(&'static str, &'static str)],
        rules: &'static [TimeRule],
    ) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(themes.len());
        for (index, theme) in themes.iter().enumerate() {
            assert!(
                !theme.name.is_empty() && !theme.description.is_empty(),
                "catalog entry {index} has an empty field"
            );
            assert!(
                !theme.best_for.is_empty(),
                "theme \"{}\" has no use-case tags",
                theme.name
            );
            let previous = by_name.insert(theme.name, index);
            assert!(previous.is_none(), "duplicate theme name \"{}\"", theme.name);
        }

        let resolve = |name: &'static str| -> Result<usize, CatalogError> {
            by_name.get(name).copied().ok_or(CatalogError::NotFound {
                name: name.to_string(),
            })
        };

        let mut genre_entries = Vec::with_capacity(genres.len());
        for (genre, theme_name) in genres {
            genre_entries.push((*genre, resolve(theme_name)?));
        }

        let mut rule_entries = Vec::with_capacity(rules.len());
        for rule in rules {
            rule_entries.push((rule, resolve(rule.theme)?));
        }

        Ok(Self {
            themes,
            by_name,
            genres: genre_entries,
            time_rules: rule_entries,
        })
    }

    /// Look up a theme by its exact name
    pub fn find_by_name(&self, name: &str) -> Result<&Theme, CatalogError> {
        self.by_name
            .get(name)
            .map(|&index| &self.themes[index])
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Recommend a theme for one of the fixed writing genres.
    ///
    /// Labels match exactly; there is no case folding or fuzzy matching.
    pub fn recommend_for_genre(&self, genre: &str) -> Result<&Theme, CatalogError> {
        self.genres
            .iter()
            .find(|(label, _)| *label == genre)
            .map(|&(_, index)| &self.themes[index])
            .ok_or_else(|| CatalogError::UnknownGenre {
                genre: genre.to_string(),
            })
    }

    /// Recommend a theme for an hour of the day (0-23).
    ///
    /// Rules are checked in order and the first match wins; the final rule
    /// has no bounds, so every valid hour resolves. Returns the theme and
    /// the period label ("Peak Focus", "Night Writing", ...).
    pub fn recommend_for_hour(&self, hour: i32) -> Result<(&Theme, &'static str), CatalogError> {
        if !(0..=23).contains(&hour) {
            return Err(CatalogError::InvalidHour { hour });
        }
        let (rule, index) = self
            .time_rules
            .iter()
            .find(|(rule, _)| rule.matches(hour))
            .ok_or(CatalogError::InvalidHour { hour })?;
        Ok((&self.themes[*index], rule.period))
    }

    /// All themes in fixed display order
    pub fn list_all(&self) -> &[Theme] {
        self.themes
    }

    /// Genre recommendations in display order, themes resolved
    pub fn list_genre_recommendations(&self) -> Vec<(&'static str, &Theme)> {
        self.genres
            .iter()
            .map(|&(genre, index)| (genre, &self.themes[index]))
            .collect()
    }

    /// All time-of-day rules in evaluation order, themes resolved
    pub fn list_time_rules(&self) -> Vec<(&'static TimeRule, &Theme)> {
        self.time_rules
            .iter()
            .map(|&(rule, index)| (rule, &self.themes[index]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ThemeCatalog {
        ThemeCatalog::new().expect("static catalog data must validate")
    }

    #[test]
    fn test_find_by_name_round_trips_every_theme() {
        let catalog = catalog();
        for theme in catalog.list_all() {
            let found = catalog.find_by_name(theme.name).unwrap();
            assert_eq!(found, theme);
        }
    }

    #[test]
    fn test_find_by_name_unknown() {
        let catalog = catalog();
        let err = catalog.find_by_name("Neon Abyss").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                name: "Neon Abyss".to_string()
            }
        );
    }

    #[test]
    fn test_genre_recommendations_match_exactly() {
        let catalog = catalog();
        let expected = [
            ("Fiction", "Creative Burst"),
            ("Non-Fiction", "Focused Flow"),
            ("Romance", "Romance Mode"),
            ("Mystery/Thriller", "Dark Mystery"),
            ("Science Fiction", "Futuristic"),
            ("Memoir/Biography", "Cozy Fireplace"),
            ("Academic/Technical", "Pure Focus"),
            ("Poetry/Creative", "Forest Retreat"),
        ];
        for (genre, theme_name) in expected {
            assert_eq!(catalog.recommend_for_genre(genre).unwrap().name, theme_name);
        }
    }

    #[test]
    fn test_genre_lookup_is_exact_match_only() {
        let catalog = catalog();
        assert!(catalog.recommend_for_genre("romance").is_err());
        assert!(catalog.recommend_for_genre(" Romance").is_err());
        let err = catalog.recommend_for_genre("Haiku").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownGenre {
                genre: "Haiku".to_string()
            }
        );
    }

    #[test]
    fn test_hour_buckets() {
        let catalog = catalog();
        let cases = [
            (6, "Power Writing", "Morning Energy"),
            (9, "Power Writing", "Morning Energy"),
            (10, "Focused Flow", "Peak Focus"),
            (14, "Focused Flow", "Peak Focus"),
            (15, "Creative Burst", "Creative Hours"),
            (18, "Creative Burst", "Creative Hours"),
            (19, "Zen Garden", "Evening Calm"),
            (21, "Zen Garden", "Evening Calm"),
            (22, "Dark Mystery", "Night Writing"),
            (23, "Dark Mystery", "Night Writing"),
            (0, "Dark Mystery", "Night Writing"),
            (5, "Dark Mystery", "Night Writing"),
        ];
        for (hour, theme_name, period) in cases {
            let (theme, label) = catalog.recommend_for_hour(hour).unwrap();
            assert_eq!(theme.name, theme_name, "hour {hour}");
            assert_eq!(label, period, "hour {hour}");
        }
    }

    #[test]
    fn test_hour_rules_partition_the_day() {
        let catalog = catalog();
        for hour in 0..24 {
            let bounded_matches = catalog
                .list_time_rules()
                .iter()
                .filter(|(rule, _)| rule.hours.is_some() && rule.matches(hour))
                .count();
            assert!(bounded_matches <= 1, "hour {hour} hit {bounded_matches} rules");
            // Total: every hour resolves through exactly one winning rule
            assert!(catalog.recommend_for_hour(hour).is_ok());
        }
        // The catch-all owns exactly the late-night and early-morning hours
        for hour in [0, 1, 2, 3, 4, 5, 22, 23] {
            let (theme, period) = catalog.recommend_for_hour(hour).unwrap();
            assert_eq!(theme.name, "Dark Mystery");
            assert_eq!(period, "Night Writing");
        }
    }

    #[test]
    fn test_out_of_range_hours_rejected() {
        let catalog = catalog();
        assert_eq!(
            catalog.recommend_for_hour(24).unwrap_err(),
            CatalogError::InvalidHour { hour: 24 }
        );
        assert_eq!(
            catalog.recommend_for_hour(-1).unwrap_err(),
            CatalogError::InvalidHour { hour: -1 }
        );
    }

    #[test]
    fn test_list_all_is_complete_and_ordered() {
        let catalog = catalog();
        let themes = catalog.list_all();
        assert_eq!(themes.len(), THEME_COUNT);
        assert_eq!(themes[0].name, "Focused Flow");
        assert_eq!(themes[11].name, "Ocean Depths");
        for theme in themes {
            assert!(!theme.best_for.is_empty(), "{} has no tags", theme.name);
        }
    }

    #[test]
    fn test_list_genre_recommendations_preserves_order() {
        let catalog = catalog();
        let listed = catalog.list_genre_recommendations();
        assert_eq!(listed.len(), GENRE_COUNT);
        assert_eq!(listed[0].0, "Fiction");
        assert_eq!(listed[7].0, "Poetry/Creative");
    }

    #[test]
    fn test_list_time_rules_in_evaluation_order() {
        let catalog = catalog();
        let rules = catalog.list_time_rules();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules[0].0.period, "Morning Energy");
        assert_eq!(rules[4].0.period, "Night Writing");
        assert_eq!(rules[4].1.name, "Dark Mystery");
    }

    #[test]
    fn test_construction_rejects_dangling_genre_reference() {
        static BROKEN_GENRES: [(&str, &str); 1] = [("Fiction", "No Such Theme")];
        let err = ThemeCatalog::from_parts(&THEMES, &BROKEN_GENRES, &TIME_RULES).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                name: "No Such Theme".to_string()
            }
        );
    }

    #[test]
    fn test_construction_rejects_dangling_time_rule_reference() {
        static BROKEN_RULES: [TimeRule; 1] = [TimeRule {
            hour_range: "6:00 AM - 9:00 AM",
            period: "Morning Energy",
            theme: "Missing Theme",
            hours: Some((6, 9)),
        }];
        let err =
            ThemeCatalog::from_parts(&THEMES, &GENRE_RECOMMENDATIONS, &BROKEN_RULES).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                name: "Missing Theme".to_string()
            }
        );
    }
}
