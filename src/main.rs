//! inkmood - color psychology theme advisor for writers
//!
//! Prints a catalog of 12 writing themes, recommendations by genre and by
//! time of day, and the research notes behind them. The catalog itself is
//! pure and clock-free; this entry point reads the local time and passes
//! the hour in.

mod catalog;
mod cli;
mod error;
mod models;
mod theme;
mod ui;

use std::process::ExitCode;

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::catalog::ThemeCatalog;
use crate::models::{Theme, TimeRule};

/// Flat view of the catalog for `--json`
#[derive(Serialize)]
struct CatalogExport<'a> {
    themes: &'a [Theme],
    genres: Vec<GenreExport<'a>>,
    time_rules: Vec<&'a TimeRule>,
}

#[derive(Serialize)]
struct GenreExport<'a> {
    genre: &'a str,
    theme: &'a str,
}

fn main() -> ExitCode {
    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("inkmood: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let catalog = match ThemeCatalog::new() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("inkmood: catalog validation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if config.json {
        return print_json(&catalog);
    }

    if let Some(genre) = &config.genre {
        return match ui::print_single_genre(&catalog, genre) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("inkmood: {}", err);
                ExitCode::FAILURE
            }
        };
    }

    let now = Local::now();
    let (hour, minute) = match config.hour {
        Some(hour) => (hour, 0),
        None => (now.hour() as i32, now.minute()),
    };

    ui::print_banner();
    ui::print_catalog(&catalog);
    ui::print_genre_recommendations(&catalog);
    ui::print_time_rules(&catalog);
    if let Err(err) = ui::print_right_now(&catalog, hour, minute) {
        eprintln!("inkmood: {}", err);
        return ExitCode::FAILURE;
    }
    ui::print_science();
    ui::print_tips();
    ui::print_outro();

    ExitCode::SUCCESS
}

fn print_json(catalog: &ThemeCatalog) -> ExitCode {
    let export = CatalogExport {
        themes: catalog.list_all(),
        genres: catalog
            .list_genre_recommendations()
            .into_iter()
            .map(|(genre, theme)| GenreExport {
                genre,
                theme: theme.name,
            })
            .collect(),
        time_rules: catalog
            .list_time_rules()
            .into_iter()
            .map(|(rule, _)| rule)
            .collect(),
    };

    match serde_json::to_string_pretty(&export) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("inkmood: failed to serialize catalog: {}", err);
            ExitCode::FAILURE
        }
    }
}
