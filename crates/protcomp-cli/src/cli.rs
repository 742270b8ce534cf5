use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "protcomp CLI - A command-line interface for protcomp, a reader for protein names and amino-acid composition from PDB header records.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the name, amino-acid composition, and length of a protein from a PDB file.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Core Arguments ---
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Report Sections ---
    // Section flags are additive; with none given the full report is printed.
    /// Include the protein name from the TITLE record.
    #[arg(long)]
    pub name: bool,

    /// Include the whole-file amino-acid composition table.
    #[arg(long)]
    pub composition: bool,

    /// Include the per-chain composition percentages.
    #[arg(long)]
    pub chains: bool,

    /// Include the total residue count.
    #[arg(long)]
    pub length: bool,

    // --- Scanning Overrides ---
    /// Skip SEQRES lines without a chain identifier instead of failing.
    #[arg(long)]
    pub skip_missing_chain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_analyze_invocation() {
        let cli = Cli::parse_from(["protcomp", "analyze", "-i", "1tsr.pdb"]);
        let Commands::Analyze(args) = cli.command;

        assert_eq!(args.input, PathBuf::from("1tsr.pdb"));
        assert!(args.config.is_none());
        assert!(!args.name && !args.composition && !args.chains && !args.length);
        assert!(!args.skip_missing_chain);
    }

    #[test]
    fn test_global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["protcomp", "analyze", "-i", "x.pdb", "-vv", "--log-file", "run.log"]);

        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["protcomp", "analyze", "-i", "x.pdb", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_section_flags_parse_independently() {
        let cli = Cli::parse_from([
            "protcomp",
            "analyze",
            "-i",
            "x.pdb",
            "--name",
            "--length",
            "--skip-missing-chain",
        ]);
        let Commands::Analyze(args) = cli.command;

        assert!(args.name && args.length);
        assert!(!args.composition && !args.chains);
        assert!(args.skip_missing_chain);
    }

    #[test]
    fn test_input_is_required() {
        let result = Cli::try_parse_from(["protcomp", "analyze"]);
        assert!(result.is_err());
    }
}
