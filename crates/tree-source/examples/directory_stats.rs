//! Loads a directory and prints where its entries are concentrated
//!
//! Usage:
//!   cargo run --example directory_stats [path] [threshold]
//!
//! If no path is provided, uses the current directory. The threshold
//! defaults to 0.02 (entries holding less than 2% of the tree are folded
//! into their parent). Set `RUST_LOG=debug` to see each pass.

use anyhow::{Context, Result};
use std::env;
use tree_source::prelude::*;
use tree_stats::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or(".");
    let threshold = match args.get(2) {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("Invalid threshold: {}", raw))?,
        None => 0.02,
    };

    println!("Loading directory: {}", path);
    let tree = FilesystemLoader::new().load(path)?;

    let options = StatsOptions::new().threshold(threshold);
    let stats = analyze(&tree, &options)?;

    println!();
    println!("Directory Structure (threshold {:.1}%):", threshold * 100.0);
    println!("═══════════════════════════════");
    print_node(&stats, 0);

    println!();
    println!("═══════════════════════════════");
    println!("Largest entries:");
    for node in top_descendants(&stats, 5) {
        println!("  {:>6}  {}", node.count, node.node);
    }

    println!();
    println!("Summary:");
    println!("  Total entries: {}", stats.count);
    println!("  Shown: {}", stats.retained_count());
    println!("  Folded below threshold: {}", stats.below_threshold_count);

    Ok(())
}

fn print_node(node: &DescendantTreeCount<FsEntry>, depth: usize) {
    let indent = "  ".repeat(depth);

    let icon = match node.node.kind {
        EntryKind::Directory => "📁",
        EntryKind::File => "📄",
    };

    let mut line = format!(
        "{}{} {} ({} entries, {:.1}%)",
        indent,
        icon,
        node.node.name,
        node.count,
        node.ratio_to_root * 100.0
    );
    if node.below_threshold_count > 0 {
        line.push_str(&format!(" +{} folded", node.below_threshold_count));
    }
    println!("{}", line);

    for child in &node.children {
        print_node(child, depth + 1);
    }
}
