#![deny(missing_docs)]

//! # Flow2OAS CLI
//!
//! Command Line Interface for the flow-to-OpenAPI converter.
//!
//! Reads a flow description file, converts it to an OpenAPI 3.0.0 document
//! and writes the YAML result to a file or to standard output. Any failure
//! is reported on stderr with a non-zero exit status.

use clap::Parser;
use flow2oas_core::{convert, AppResult, FlowDocument};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Convert a flow file to an OpenAPI Specification file")]
struct Cli {
    /// Flow file to convert.
    flow: PathBuf,

    /// Output file name; writes to standard output when omitted.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Runs one conversion: flow file in, OpenAPI YAML text out.
fn run(flow_path: &Path) -> AppResult<String> {
    let text = fs::read_to_string(flow_path)?;
    let flow = FlowDocument::from_json(&text)?;
    convert(&flow).to_yaml()
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let yaml = run(&cli.flow)?;

    match &cli.output {
        Some(path) => fs::write(path, yaml)?,
        None => print!("{}", yaml),
    }

    Ok(())
}
