//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use wordbreak_core::Encoding;

pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files at Unicode word boundaries
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List supported input encodings
    Encodings,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(self) -> Vec<String> {
        match self {
            ListCommands::Encodings => {
                let mut lines = vec![format!(
                    "{:<10} detect a UTF-8 or UTF-16 byte order mark, else UTF-8 (default)",
                    "auto"
                )];
                lines.extend(Encoding::ALL.iter().map(|encoding| {
                    format!(
                        "{:<10} {}-byte code units, offsets count code units",
                        encoding.label(),
                        encoding.code_unit_width()
                    )
                }));
                lines.push(format!(
                    "{:<10} any other WHATWG label (e.g. shift_jis, windows-1252), transcoded to UTF-8",
                    "<label>"
                ));
                lines
            }
            ListCommands::Formats => segment::OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| {
                    format!(
                        "{:<10} {}",
                        value.get_name(),
                        value.get_help().map(ToString::to_string).unwrap_or_default()
                    )
                })
                .collect(),
        }
    }
}
