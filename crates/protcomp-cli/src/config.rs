use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use protcomp::core::io::pdb::MissingChainPolicy;
use protcomp::profile::options::AnalysisOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Fully resolved settings for one `analyze` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeConfig {
    pub options: AnalysisOptions,
    pub sections: ReportSections,
}

/// Which report sections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSections {
    pub name: bool,
    pub composition: bool,
    pub chains: bool,
    pub length: bool,
}

impl ReportSections {
    pub fn all() -> Self {
        Self {
            name: true,
            composition: true,
            chains: true,
            length: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalyzeConfig {
    #[serde(rename = "missing-chain")]
    missing_chain: Option<String>,
    report: Option<PartialReportSections>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct PartialReportSections {
    name: Option<bool>,
    composition: Option<bool>,
    chains: Option<bool>,
    length: Option<bool>,
}

impl PartialReportSections {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.composition.is_none()
            && self.chains.is_none()
            && self.length.is_none()
    }
}

impl PartialAnalyzeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &AnalyzeArgs) -> Result<AnalyzeConfig> {
        let missing_chain = if args.skip_missing_chain {
            MissingChainPolicy::Skip
        } else {
            match self.missing_chain.as_deref() {
                Some(value) => value.parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid value '{}' for `missing-chain`. Expected 'error' or 'skip'.",
                        value
                    ))
                })?,
                None => MissingChainPolicy::default(),
            }
        };

        let sections = Self::merge_sections(args, self.report.unwrap_or_default());

        Ok(AnalyzeConfig {
            options: AnalysisOptions::new().with_missing_chain(missing_chain),
            sections,
        })
    }

    // Sections resolve as a selection set. Any CLI flag wins outright;
    // otherwise file values apply, falling back to the full report.
    fn merge_sections(args: &AnalyzeArgs, file: PartialReportSections) -> ReportSections {
        if args.name || args.composition || args.chains || args.length {
            return ReportSections {
                name: args.name,
                composition: args.composition,
                chains: args.chains,
                length: args.length,
            };
        }

        if !file.is_empty() {
            return ReportSections {
                name: file.name.unwrap_or(false),
                composition: file.composition.unwrap_or(false),
                chains: file.chains.unwrap_or(false),
                length: file.length.unwrap_or(false),
            };
        }

        ReportSections::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let cli = Cli::parse_from(argv);
        let Commands::Analyze(args) = cli.command;
        args
    }

    fn write_config_file(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analyze.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults_without_config_file() {
        let args = analyze_args(&["protcomp", "analyze", "-i", "x.pdb"]);
        let config = PartialAnalyzeConfig::default()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.options.missing_chain, MissingChainPolicy::Error);
        assert_eq!(config.sections, ReportSections::all());
    }

    #[test]
    fn test_file_values_apply_when_cli_is_silent() {
        let (_dir, path) = write_config_file(
            "missing-chain = \"skip\"\n\n[report]\nname = true\nlength = true\n",
        );

        let args = analyze_args(&["protcomp", "analyze", "-i", "x.pdb"]);
        let config = PartialAnalyzeConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.options.missing_chain, MissingChainPolicy::Skip);
        assert!(config.sections.name && config.sections.length);
        assert!(!config.sections.composition && !config.sections.chains);
    }

    #[test]
    fn test_cli_flags_override_file_values() {
        let (_dir, path) =
            write_config_file("missing-chain = \"error\"\n\n[report]\nname = true\n");

        let args = analyze_args(&[
            "protcomp",
            "analyze",
            "-i",
            "x.pdb",
            "--composition",
            "--skip-missing-chain",
        ]);
        let config = PartialAnalyzeConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.options.missing_chain, MissingChainPolicy::Skip);
        assert!(config.sections.composition);
        assert!(!config.sections.name);
    }

    #[test]
    fn test_empty_report_table_falls_back_to_full_report() {
        let (_dir, path) = write_config_file("[report]\n");

        let args = analyze_args(&["protcomp", "analyze", "-i", "x.pdb"]);
        let config = PartialAnalyzeConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.sections, ReportSections::all());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let (_dir, path) = write_config_file("missing-chain = \"skip\"\nunknown-key = 1\n");

        let result = PartialAnalyzeConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn test_invalid_policy_string_is_a_config_error() {
        let (_dir, path) = write_config_file("missing-chain = \"ignore\"\n");

        let args = analyze_args(&["protcomp", "analyze", "-i", "x.pdb"]);
        let result = PartialAnalyzeConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args);

        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialAnalyzeConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
