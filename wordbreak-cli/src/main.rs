//! wordbreak command-line entry point

use clap::Parser;
use wordbreak_cli::{commands::Commands, CliResult};

/// Split text at Unicode word boundaries
#[derive(Debug, Parser)]
#[command(name = "wordbreak", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment_args() {
        let cli = Cli::try_parse_from([
            "wordbreak", "segment", "-i", "a.txt", "-i", "b.txt", "-f", "json", "-e", "utf-16le",
            "--words-only", "--lossy", "-t", "4", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Segment(args) => {
                assert_eq!(args.input, vec!["a.txt", "b.txt"]);
                assert_eq!(args.format, Some(wordbreak_cli::commands::segment::OutputFormat::Json));
                assert_eq!(args.encoding.as_deref(), Some("utf-16le"));
                assert!(args.words_only);
                assert!(args.lossy);
                assert_eq!(args.threads, Some(4));
                assert_eq!(args.verbose, 2);
            }
            Commands::List { .. } => panic!("expected segment command"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["wordbreak", "segment"]).is_err());
    }
}
