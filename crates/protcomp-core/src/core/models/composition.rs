use std::collections::BTreeMap;

/// An accumulating count table of three-letter residue codes.
///
/// Codes are kept in lexicographic order, so iteration and the derived
/// percentage table are deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    counts: BTreeMap<String, usize>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, code: &str) {
        *self.counts.entry(code.to_string()).or_insert(0) += 1;
    }

    /// Returns the number of occurrences of `code`, or 0 if it was never seen.
    pub fn count(&self, code: &str) -> usize {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Returns the total number of recorded residues across all codes.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct_codes(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(code, &count)| (code.as_str(), count))
    }

    /// Converts counts into percentage shares of the total, rounded to two
    /// decimal places with ties going to even. An empty table yields an
    /// empty map.
    pub fn percentages(&self) -> BTreeMap<String, f64> {
        let total = self.total();
        self.counts
            .iter()
            .map(|(code, &count)| {
                let share = count as f64 / total as f64 * 100.0;
                (code.clone(), round_to_hundredths(share))
            })
            .collect()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
