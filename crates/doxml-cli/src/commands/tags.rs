//! Tags command implementation

use std::io::Write;

use anyhow::Result;
use doxml::{Category, NodeKind};

/// Print every registry tag and its category, one per line.
pub fn execute() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for line in tag_lines() {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

fn tag_lines() -> Vec<String> {
    NodeKind::REGISTRY
        .iter()
        .map(|kind| format!("{:<24}{}", kind.tag(), category_name(kind.category())))
        .collect()
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Container => "container",
        Category::Leaf => "leaf",
    }
}
