//! Console output for the walkthrough.
//!
//! Status lines are printed plain so they read the same with or without
//! color support; banners and markers are colored.

use colored::*;

pub fn header(text: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar.bright_cyan());
    println!("  {}", text.bold().bright_white());
    println!("{}", bar.bright_cyan());
}

pub fn section(text: &str) {
    println!("\n{} {}", "▸".bright_yellow(), text.bold());
}

pub fn step(text: &str) {
    println!("  {} {}", "•".bright_green(), text);
}

/// A plain status line, e.g. `Created Family Andersen.1`.
pub fn status(text: &str) {
    println!("{}", text);
}

/// One query result, tab-indented.
pub fn read(item: &impl std::fmt::Display) {
    println!("\tRead {}", item);
}

pub fn success(text: &str) {
    println!("\n{} {}", "✓".bright_green(), text.bright_green());
}

pub fn failure(text: &str) {
    eprintln!("{} {}", "✗".bright_red(), text.red());
}
