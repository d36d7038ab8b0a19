//! Console output for inkmood
//!
//! This module renders the demo sections to stdout: banner, theme catalog,
//! genre and time-of-day recommendations, and the educational text blocks.

mod banner;
mod content;
mod helpers;
mod render;

pub use banner::{print_banner, print_outro};
pub use helpers::format_clock;
pub use render::{
    print_catalog, print_genre_recommendations, print_right_now, print_science,
    print_single_genre, print_time_rules, print_tips,
};
