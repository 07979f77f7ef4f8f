//! rodmaker CLI - fuel rod mesh generator.
//!
//! Usage: rodmaker [INPUT] [OUTPUT]
//!
//! Reads a rod description (default `rodDict`) and writes the matching
//! OpenFOAM `blockMeshDict` (default `blockMeshDict`). Set `RUST_LOG=debug`
//! to trace the pipeline stages.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use config::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "rodmaker")]
#[command(author, version, about = "Generate a blockMeshDict for a fuel rod", long_about = None)]
struct Cli {
    /// Rod description file
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Mesh description to write
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    log::debug!("Reading {}", cli.input.display());
    let mesh = rod_mesh::run(&cli.input, &cli.output)
        .with_context(|| format!("cannot mesh {}", cli.input.display()))?;

    println!(
        "{} -> {}: {} vertices, {} blocks, {} patches",
        cli.input.display(),
        cli.output.display(),
        mesh.vertex_count(),
        mesh.block_count(),
        mesh.boundary.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::parse_from(["rodmaker"]);
        assert_eq!(cli.input, PathBuf::from("rodDict"));
        assert_eq!(cli.output, PathBuf::from("blockMeshDict"));
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::parse_from(["rodmaker", "case/rodDict", "case/system/blockMeshDict"]);
        assert_eq!(cli.input, PathBuf::from("case/rodDict"));
        assert_eq!(cli.output, PathBuf::from("case/system/blockMeshDict"));
    }

    #[test]
    fn test_flags_are_rejected() {
        assert!(Cli::try_parse_from(["rodmaker", "--merge"]).is_err());
    }

    #[test]
    fn test_missing_input_reports_path() {
        let cli = Cli::parse_from(["rodmaker", "no/such/rodDict", "out"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot mesh no/such/rodDict"));
    }
}
