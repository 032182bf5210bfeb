//! procflow command line
//!
//! `procflow convert <file>` runs the full pipeline on a workflow text
//! file and prints the result envelope as JSON; `procflow detect
//! <file>` prints only the detected format tag. Exit code 1 signals a
//! failed conversion so shell pipelines can branch on it.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use procflow_pipeline::{convert_with, detect, Direction, LayeredBackend};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "procflow", version, about = "Workflow normalization and layout")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect, parse, validate, and lay out a workflow file
    Convert {
        /// Path to the workflow text (any supported dialect)
        file: PathBuf,
        /// Layout direction
        #[arg(long, value_enum, default_value_t = Dir::Tb)]
        direction: Dir,
        /// Pretty-print the envelope JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the detected format tag for a file
    Detect {
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Dir {
    /// Top to bottom
    Tb,
    /// Left to right
    Lr,
}

impl From<Dir> for Direction {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::Tb => Direction::TopDown,
            Dir::Lr => Direction::LeftToRight,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert { file, direction, pretty } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let result = convert_with(&input, direction.into(), &LayeredBackend);

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");

            Ok(if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Detect { file } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            println!("{}", detect(&input));
            Ok(ExitCode::SUCCESS)
        }
    }
}
