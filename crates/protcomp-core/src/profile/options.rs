use crate::core::io::pdb::MissingChainPolicy;

/// Tunable behavior for a [`Protein`](super::protein::Protein) accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How SEQRES lines without a chain identifier are treated during
    /// per-chain derivation.
    pub missing_chain: MissingChainPolicy,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_chain(mut self, policy: MissingChainPolicy) -> Self {
        self.missing_chain = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_strict() {
        let options = AnalysisOptions::new();
        assert_eq!(options.missing_chain, MissingChainPolicy::Error);
    }

    #[test]
    fn with_missing_chain_overrides_policy() {
        let options = AnalysisOptions::new().with_missing_chain(MissingChainPolicy::Skip);
        assert_eq!(options.missing_chain, MissingChainPolicy::Skip);
    }
}
