use super::options::AnalysisOptions;
use crate::core::io::pdb::{self, PdbError};
use crate::core::models::composition::Composition;
use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Percentage share of each residue code within one chain.
pub type ResiduePercentages = BTreeMap<String, f64>;

/// Per-chain percentage tables, keyed by chain identifier.
pub type ChainCompositions = BTreeMap<char, ResiduePercentages>;

/// A memoizing, read-only accessor over the header records of one PDB file.
///
/// A `Protein` binds a file path to the record scanner and derives each
/// property on first access: the name from the first `TITLE` record, the
/// residue composition and length from `SEQRES` records, and the per-chain
/// percentage tables. Successful derivations are cached for the lifetime of
/// the instance; failed ones are not, so a later access retries from the
/// file. Every derivation opens the file fresh and closes it before
/// returning, including on error paths.
///
/// A `Protein` can be moved to another thread, but a single instance cannot
/// be shared between threads; create one accessor per thread when analyzing
/// the same file concurrently.
#[derive(Debug)]
pub struct Protein {
    path: PathBuf,
    options: AnalysisOptions,
    name: OnceCell<String>,
    composition: OnceCell<Composition>,
    chain_compositions: OnceCell<ChainCompositions>,
}

impl Protein {
    /// Creates an accessor for the file at `path` with default options.
    ///
    /// The file is not touched until a property is first accessed.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, AnalysisOptions::default())
    }

    /// Creates an accessor with explicit [`AnalysisOptions`].
    pub fn with_options(path: impl Into<PathBuf>, options: AnalysisOptions) -> Self {
        Self {
            path: path.into(),
            options,
            name: OnceCell::new(),
            composition: OnceCell::new(),
            chain_compositions: OnceCell::new(),
        }
    }

    /// Returns the path this accessor reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the protein name from the first `TITLE` record.
    ///
    /// The name is the record payload with surrounding whitespace trimmed; a
    /// bare `TITLE` line yields an empty name.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::MissingRecord`] if the file has no `TITLE` record,
    /// or [`PdbError::Io`] if the file cannot be opened or read.
    pub fn name(&self) -> Result<&str, PdbError> {
        if let Some(name) = self.name.get() {
            return Ok(name.as_str());
        }
        debug!("Deriving protein name from {:?}", self.path);
        let mut reader = self.open()?;
        let name = pdb::read_title(&mut reader)?;
        Ok(self.name.get_or_init(|| name).as_str())
    }

    /// Returns the amino-acid composition accumulated over all `SEQRES`
    /// records.
    ///
    /// Every word-delimited token of exactly three uppercase letters is
    /// counted, duplicates included. A file without `SEQRES` records yields
    /// an empty composition.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::Io`] if the file cannot be opened or read.
    pub fn composition_aa(&self) -> Result<&Composition, PdbError> {
        if let Some(composition) = self.composition.get() {
            return Ok(composition);
        }
        debug!("Deriving residue composition from {:?}", self.path);
        let mut reader = self.open()?;
        let composition = pdb::read_composition(&mut reader)?;
        Ok(self.composition.get_or_init(|| composition))
    }

    /// Returns the per-chain composition as percentage tables.
    ///
    /// Each `SEQRES` line credits all of its residue codes to the line's
    /// chain, named by the first single-uppercase-letter token. Percentages
    /// are shares of that chain's total, rounded to two decimal places. A
    /// chain observed without residue codes maps to an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::MissingChainId`] if a `SEQRES` line has no chain
    /// identifier and the accessor uses the default strict policy, or
    /// [`PdbError::Io`] if the file cannot be opened or read.
    pub fn chain_aa(&self) -> Result<&ChainCompositions, PdbError> {
        if let Some(chains) = self.chain_compositions.get() {
            return Ok(chains);
        }
        debug!("Deriving per-chain composition from {:?}", self.path);
        let mut reader = self.open()?;
        let counts = pdb::read_chain_compositions(&mut reader, self.options.missing_chain)?;
        let chains = counts
            .into_iter()
            .map(|(chain, composition)| (chain, composition.percentages()))
            .collect();
        Ok(self.chain_compositions.get_or_init(|| chains))
    }

    /// Returns the total residue count across all `SEQRES` records.
    ///
    /// This is the sum of the composition counts and shares its cache.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::Io`] if the file cannot be opened or read.
    pub fn length(&self) -> Result<usize, PdbError> {
        Ok(self.composition_aa()?.total())
    }

    /// Renders the three-line summary form.
    ///
    /// # Return
    ///
    /// Returns the path, name, and length, one per line.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while deriving the name or
    /// length.
    pub fn summary(&self) -> Result<String, PdbError> {
        Ok(format!(
            "Protein object for file: {}\nName: {}\nLength: {} AAs",
            self.path.display(),
            self.name()?,
            self.length()?
        ))
    }

    fn open(&self) -> Result<BufReader<File>, PdbError> {
        let file = File::open(&self.path)?;
        Ok(BufReader::new(file))
    }
}

impl fmt::Display for Protein {
    /// Formats the summary; derivation failures surface as [`fmt::Error`].
    /// Callers that need the cause should use [`Protein::summary`] instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary().map_err(|_| fmt::Error)?;
        f.write_str(&summary)
    }
}
