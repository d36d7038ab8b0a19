//! Startup banner and outro

use crate::theme;

/// Print the demo banner
pub fn print_banner() {
    let title = "🎨 COLOR PSYCHOLOGY DEMO - INKMOOD FOR AUTHORS";
    println!();
    println!("{}", theme::header(title));
    println!("{}", theme::muted(&theme::rule(title.chars().count())));
    println!();
    println!("This demonstration shows how different colors affect writers' creativity,");
    println!("focus, and productivity based on scientific research.");
    println!();
    println!(
        "{}",
        theme::muted(&format!("  inkmood v{}", env!("CARGO_PKG_VERSION")))
    );
    println!();
}

/// Print the closing lines
pub fn print_outro() {
    let title = "🎉 END OF COLOR PSYCHOLOGY DEMO";
    println!("{}", theme::header(title));
    println!("{}", theme::muted(&theme::rule(title.chars().count())));
    println!("Ready to write your masterpiece with scientifically-optimized colors? 🚀");
}
