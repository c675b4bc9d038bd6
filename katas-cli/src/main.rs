//! katas command-line entry point

use clap::Parser;
use katas_cli::commands::{Commands, GlobalArgs};
use katas_cli::error;
use std::io;
use std::process::ExitCode;

/// Factorial, maximum subarray and word count, every variant cross-checked
#[derive(Debug, Parser)]
#[command(name = "katas", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.global.init_logging();
    log::debug!("Arguments: {:?}", cli);

    match cli.command.execute(&cli.global, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error::describe(&err));
            ExitCode::from(error::exit_code(&err))
        }
    }
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
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from(["katas", "maxsubarray", "-2", "1", "-3"]).unwrap();
        match cli.command {
            Commands::MaxSubarray(args) => assert_eq!(args.sequence(), vec![-2, 1, -3]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_comma_separated_values() {
        let cli = Cli::try_parse_from(["katas", "maxsubarray", "-2,1,-3,4"]).unwrap();
        match cli.command {
            Commands::MaxSubarray(args) => assert_eq!(args.sequence(), vec![-2, 1, -3, 4]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_flags_after_negative_list() {
        let cli = Cli::try_parse_from([
            "katas",
            "maxsubarray",
            "-2,1,-3,4",
            "--show-subarrays",
            "-q",
        ])
        .unwrap();
        assert!(cli.global.quiet);
        match cli.command {
            Commands::MaxSubarray(args) => {
                assert_eq!(args.sequence(), vec![-2, 1, -3, 4]);
                assert!(args.show_subarrays);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_followed_by_values() {
        let cli = Cli::try_parse_from(["katas", "maxsubarray", "1,2", "-3", "4"]).unwrap();
        match cli.command {
            Commands::MaxSubarray(args) => assert_eq!(args.sequence(), vec![1, 2, -3, 4]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_list() {
        assert!(Cli::try_parse_from(["katas", "maxsubarray", "-2,,4"]).is_err());
        assert!(Cli::try_parse_from(["katas", "maxsubarray", "--empty", "1"]).is_err());
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["katas", "factorial", "7", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.format.is_some());
    }
}
