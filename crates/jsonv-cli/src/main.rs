//! `jsonv` CLI — round-trips a tree document through the jsonv JSON library.
//!
//! Reads a JSON file describing a tree (objects with a `node` payload and an
//! optional `subnodes` array), prints the tree to stdout with one node per
//! line prefixed by depth markers, and writes the re-serialized JSON to the
//! output file.
//!
//! ## Usage
//!
//! ```sh
//! jsonv --input tree.json --output roundtrip.json
//! ```

mod file;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use jsonv_core::Value;
use tree::{Node, Tree};

#[derive(Parser)]
#[command(name = "jsonv", version, about = "JSON tree round-trip tool")]
struct Cli {
    /// Path to the input JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output JSON file
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = file::read_all_text(&cli.input)?;
    let value = Value::parse(&text)
        .with_context(|| format!("failed to parse '{}'", cli.input.display()))?;
    let tree = Tree::from_value(&value).context("input is not a valid tree document")?;

    print_tree(&tree, 0);

    let output_text = tree.to_value()?.serialize()?;
    fs::write(&cli.output, output_text)
        .with_context(|| format!("can't open '{}'", cli.output.display()))?;

    Ok(())
}

/// Print one node per line, prefixed with `level` dashes; children follow
/// their parent one level deeper. String payloads are quoted.
fn print_tree(tree: &Tree, level: usize) {
    let marker = "-".repeat(level);
    match &tree.node {
        Node::Int(n) => println!("{marker}{n}"),
        Node::Double(d) => println!("{marker}{d}"),
        Node::Text(s) => println!("{marker}\"{s}\""),
    }
    for child in &tree.subnodes {
        print_tree(child, level + 1);
    }
}
