//! Terminal output helpers

use owo_colors::OwoColorize;

pub fn success(label: &str) {
    println!("✅ {}", label.green());
}

pub fn error(label: &str) {
    eprintln!("❌ {}", label.red());
}

pub fn warn(label: &str) {
    eprintln!("⚠️  {}", label.yellow());
}

pub fn info(label: &str, value: &str) {
    println!("ℹ️  {}: {}", label.dimmed(), value);
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.bold());
}
