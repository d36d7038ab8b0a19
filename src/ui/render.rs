//! Demo section rendering
//!
//! Each section is driven entirely by the catalog's list/lookup operations;
//! nothing here re-derives theme data.

use crate::catalog::ThemeCatalog;
use crate::error::CatalogError;
use crate::theme;
use crate::ui::content;
use crate::ui::helpers::format_clock;

fn print_section_header(title: &str) {
    println!("{}", theme::header(title));
    println!("{}", theme::muted(&theme::rule(title.chars().count())));
    println!();
}

/// Section 1: every theme with its psychology, benefits, and use cases
pub fn print_catalog(catalog: &ThemeCatalog) {
    print_section_header("📚 AVAILABLE COLOR PSYCHOLOGY THEMES:");

    for item in catalog.list_all() {
        println!("{} {}", item.emoji, theme::highlight(item.name));
        println!("   {} {}", theme::label("Psychology:"), item.description);
        println!("   {} {}", theme::label("Benefits:"), item.effect);
        println!("   {} {}", theme::label("Best for:"), item.best_for_line());
        println!();
    }
}

/// Section 2: recommendation per writing genre
pub fn print_genre_recommendations(catalog: &ThemeCatalog) {
    print_section_header("🎯 SMART THEME RECOMMENDATIONS BY WRITING TYPE:");

    for (genre, item) in catalog.list_genre_recommendations() {
        println!(
            "{} → {} {}",
            genre,
            item.emoji,
            theme::highlight(item.name)
        );
        println!("   {} {}", theme::label("Why:"), item.description);
        println!();
    }
}

/// Section 3: the full time-of-day rule table
pub fn print_time_rules(catalog: &ThemeCatalog) {
    print_section_header("⏰ TIME-BASED THEME RECOMMENDATIONS:");

    for (rule, item) in catalog.list_time_rules() {
        println!("{} - {}", rule.hour_range, rule.period);
        println!(
            "   {} {} {}",
            theme::label("Theme:"),
            item.emoji,
            theme::highlight(item.name)
        );
        println!("   {} {}", theme::label("Effect:"), item.effect);
        println!();
    }
}

/// Section 4: recommendation for the supplied wall-clock time
pub fn print_right_now(
    catalog: &ThemeCatalog,
    hour: i32,
    minute: u32,
) -> Result<(), CatalogError> {
    let (item, period) = catalog.recommend_for_hour(hour)?;

    // hour is within 0-23 once the lookup succeeds
    print_section_header(&format!("🕐 RIGHT NOW ({}):", format_clock(hour as u32, minute)));
    println!("{} {}", theme::label("Period:"), period);
    println!(
        "{} {} {}",
        theme::label("Recommended theme:"),
        item.emoji,
        theme::highlight(item.name)
    );
    println!("{} {}", theme::label("Why:"), item.description);
    println!("{} {}", theme::label("Benefits:"), item.effect);
    println!();
    Ok(())
}

/// A single genre's recommendation, for `--genre`
pub fn print_single_genre(catalog: &ThemeCatalog, genre: &str) -> Result<(), CatalogError> {
    let item = catalog.recommend_for_genre(genre)?;
    println!(
        "{} → {} {}",
        genre,
        item.emoji,
        theme::highlight(item.name)
    );
    println!("   {} {}", theme::label("Why:"), item.description);
    println!("   {} {}", theme::label("Benefits:"), item.effect);
    println!("   {} {}", theme::label("Best for:"), item.best_for_line());
    Ok(())
}

/// Section 5: the research background
pub fn print_science() {
    print_section_header("🧠 THE SCIENCE BEHIND COLOR PSYCHOLOGY:");
    println!("{}", content::SCIENCE_NOTES);
    println!();
    println!("{}", theme::header("📖 STUDIES REFERENCED:"));
    println!("{}", content::STUDIES_REFERENCED);
    println!();
}

/// Section 6: practical usage tips
pub fn print_tips() {
    print_section_header("💡 PRACTICAL TIPS FOR WRITERS:");
    println!("{}", content::WRITER_TIPS);
    println!();
}
