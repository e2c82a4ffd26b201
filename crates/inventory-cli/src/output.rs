//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dimmed progress note to stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a one-line item summary.
pub fn item_row(item: &tally_core::Item) {
    let id = format!("#{}", item.id);
    println!(
        "{:>5}  {} ({})  qty {}",
        id.dimmed(),
        item.name.bold(),
        item.sku,
        item.quantity
    );
    if let Some(category) = &item.category_name {
        println!("       {}: {}", "category".dimmed(), category);
    }
    if let Some(description) = &item.description {
        println!("       {}", description.dimmed());
    }
}
