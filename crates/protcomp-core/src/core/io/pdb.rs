use crate::core::models::composition::Composition;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

pub const TITLE_RECORD: &str = "TITLE";
pub const SEQRES_RECORD: &str = "SEQRES";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Missing required record: {0}")]
    MissingRecord(&'static str),
    #[error("SEQRES record on line {line} has no chain identifier")]
    MissingChainId { line: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingChainPolicy {
    #[default]
    Error,
    Skip,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid missing-chain policy string")]
pub struct ParseMissingChainPolicyError;

impl FromStr for MissingChainPolicy {
    type Err = ParseMissingChainPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(MissingChainPolicy::Error),
            "skip" => Ok(MissingChainPolicy::Skip),
            _ => Err(ParseMissingChainPolicyError),
        }
    }
}

impl fmt::Display for MissingChainPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingChainPolicy::Error => write!(f, "error"),
            MissingChainPolicy::Skip => write!(f, "skip"),
        }
    }
}

fn is_record(line: &str, keyword: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case(keyword))
}

fn record_payload(line: &str) -> &str {
    match line.trim().split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim(),
        None => "",
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_runs(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_word_char(c))
        .filter(|run| !run.is_empty())
}

fn residue_codes(line: &str) -> impl Iterator<Item = &str> {
    word_runs(line).filter(|run| run.len() == 3 && run.bytes().all(|b| b.is_ascii_uppercase()))
}

// The first single-letter token names the chain; later ones are sequence data.
fn chain_id(line: &str) -> Option<char> {
    word_runs(line)
        .find(|run| run.len() == 1 && run.as_bytes()[0].is_ascii_uppercase())
        .map(|run| run.as_bytes()[0] as char)
}

pub fn read_title(reader: &mut impl BufRead) -> Result<String, PdbError> {
    for line_res in reader.lines() {
        let line = line_res?;
        if is_record(&line, TITLE_RECORD) {
            return Ok(record_payload(&line).to_string());
        }
    }
    Err(PdbError::MissingRecord(TITLE_RECORD))
}

pub fn read_composition(reader: &mut impl BufRead) -> Result<Composition, PdbError> {
    let mut composition = Composition::new();

    for line_res in reader.lines() {
        let line = line_res?;
        if !is_record(&line, SEQRES_RECORD) {
            continue;
        }
        for code in residue_codes(&line) {
            composition.record(code);
        }
    }

    Ok(composition)
}

pub fn read_chain_compositions(
    reader: &mut impl BufRead,
    policy: MissingChainPolicy,
) -> Result<BTreeMap<char, Composition>, PdbError> {
    let mut chains: BTreeMap<char, Composition> = BTreeMap::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if !is_record(&line, SEQRES_RECORD) {
            continue;
        }
        let Some(chain) = chain_id(&line) else {
            match policy {
                MissingChainPolicy::Error => {
                    return Err(PdbError::MissingChainId { line: line_num });
                }
                MissingChainPolicy::Skip => continue,
            }
        };

        // A seen chain keeps its entry even when the line carries no codes.
        let composition = chains.entry(chain).or_default();
        for code in residue_codes(&line) {
            composition.record(code);
        }
    }

    Ok(chains)
}
