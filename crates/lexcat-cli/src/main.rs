//! # lexcat CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Running `lexcat` with no subcommand performs the reassignment job.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use lexcat_cli::classify::{run_classify, run_taxonomy, ClassifyArgs};
use lexcat_cli::connect_store;
use lexcat_cli::inspect::{run_categories, run_find, run_sample};
use lexcat_cli::reassign::{run_reassign, ReassignArgs};

/// Vocabulary category maintenance.
///
/// Sorts every vocabulary entry into one category of a fixed catalog and
/// inspects the result.
#[derive(Parser, Debug)]
#[command(name = "lexcat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild stored categories and reclassify every entry (default).
    Reassign(ReassignArgs),

    /// Classify one ad-hoc entry without storage.
    Classify(ClassifyArgs),

    /// Print the built-in category catalog.
    Taxonomy,

    /// List stored categories with entry counts.
    Categories,

    /// Show the first entry whose meaning contains a keyword.
    Find {
        /// Case-insensitive substring of the meaning.
        keyword: String,
    },

    /// Show up to 20 entries of a stored category.
    Sample {
        /// Local display name; defaults to the fallback category.
        name: Option<String>,
    },
}

fn log_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("warn");
    }
    match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Whether the command prints a JSON document on stdout.
fn prints_json(command: Option<&Commands>) -> bool {
    match command {
        Some(Commands::Reassign(args)) => args.json,
        Some(Commands::Classify(args)) => args.json,
        _ => false,
    }
}

/// Logs share stdout with plain-text output and move to stderr under `--json`.
fn log_writer(json: bool) -> BoxMakeWriter {
    if json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    }
}

async fn dispatch(command: Commands) -> anyhow::Result<u8> {
    match command {
        Commands::Classify(args) => run_classify(&args),
        Commands::Taxonomy => run_taxonomy(),
        Commands::Reassign(args) => run_reassign(&args, &connect_store().await?).await,
        Commands::Categories => run_categories(&connect_store().await?).await,
        Commands::Find { keyword } => run_find(&connect_store().await?, &keyword).await,
        Commands::Sample { name } => run_sample(&connect_store().await?, name.as_deref()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, cli.quiet))
        .with_target(false)
        .with_writer(log_writer(prints_json(cli.command.as_ref())))
        .init();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Reassign(ReassignArgs::default()));

    match dispatch(command).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["lexcat"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn cli_parse_reassign_defaults() {
        let cli = Cli::try_parse_from(["lexcat", "reassign"]).unwrap();
        match cli.command {
            Some(Commands::Reassign(args)) => assert_eq!(args, ReassignArgs::default()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_reassign_flags() {
        let cli = Cli::try_parse_from([
            "lexcat",
            "reassign",
            "--dry-run",
            "--batch-size",
            "50",
            "--use-legacy-hints",
            "--json",
        ])
        .unwrap();
        if let Some(Commands::Reassign(args)) = cli.command {
            assert!(args.dry_run);
            assert_eq!(args.batch_size, 50);
            assert!(args.use_legacy_hints);
            assert!(args.json);
        } else {
            panic!("expected reassign");
        }
    }

    #[test]
    fn cli_parse_classify() {
        let cli = Cli::try_parse_from([
            "lexcat",
            "classify",
            "--meaning",
            "con chó",
            "--chinese",
            "狗",
            "--legacy-category",
            "Động vật",
        ])
        .unwrap();
        if let Some(Commands::Classify(args)) = cli.command {
            assert_eq!(args.meaning, "con chó");
            assert_eq!(args.chinese, "狗");
            assert_eq!(args.pinyin, "");
            assert_eq!(args.legacy_category.as_deref(), Some("Động vật"));
            assert!(!args.use_legacy_hints);
        } else {
            panic!("expected classify");
        }
    }

    #[test]
    fn cli_parse_find_requires_keyword() {
        assert!(Cli::try_parse_from(["lexcat", "find"]).is_err());
        let cli = Cli::try_parse_from(["lexcat", "find", "lắp đặt"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Find { keyword }) if keyword == "lắp đặt"));
    }

    #[test]
    fn cli_parse_sample_name_is_optional() {
        let cli = Cli::try_parse_from(["lexcat", "sample"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sample { name: None })));
        let cli = Cli::try_parse_from(["lexcat", "sample", "Động vật"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sample { name: Some(_) })));
    }

    #[test]
    fn cli_parse_verbosity() {
        let cli = Cli::try_parse_from(["lexcat", "-vv", "taxonomy"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["lexcat", "-q", "-v", "taxonomy"]).is_err());
    }

    #[test]
    fn json_flag_selects_stderr_logging() {
        let json = |args: &[&str]| {
            let cli = Cli::try_parse_from(args).unwrap();
            prints_json(cli.command.as_ref())
        };
        assert!(json(&["lexcat", "reassign", "--json"]));
        assert!(json(&["lexcat", "classify", "--meaning", "x", "--json"]));
        assert!(!json(&["lexcat"]));
        assert!(!json(&["lexcat", "reassign", "--dry-run"]));
        assert!(!json(&["lexcat", "classify", "--meaning", "x"]));
        assert!(!json(&["lexcat", "taxonomy"]));
    }

    #[test]
    fn cli_parse_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["lexcat", "migrate"]).is_err());
    }
}
