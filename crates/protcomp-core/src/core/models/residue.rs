use phf::{Set, phf_set};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static STANDARD_RESIDUE_CODES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
};

pub fn is_standard_code(code: &str) -> bool {
    STANDARD_RESIDUE_CODES.contains(code.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // ALA / A
    Glycine,    // GLY / G
    Isoleucine, // ILE / I
    Leucine,    // LEU / L
    Proline,    // PRO / P
    Valine,     // VAL / V

    // --- Aromatic ---
    Phenylalanine, // PHE / F
    Tryptophan,    // TRP / W
    Tyrosine,      // TYR / Y

    // --- Polar, Uncharged ---
    Asparagine, // ASN / N
    Cysteine,   // CYS / C
    Glutamine,  // GLN / Q
    Methionine, // MET / M
    Serine,     // SER / S
    Threonine,  // THR / T

    // --- Positively Charged (Basic) ---
    Arginine,  // ARG / R
    Histidine, // HIS / H
    Lysine,    // LYS / K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // ASP / D
    GlutamicAcid, // GLU / E
}

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Glycine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Proline,
        AminoAcid::Valine,
        AminoAcid::Phenylalanine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Asparagine,
        AminoAcid::Cysteine,
        AminoAcid::Glutamine,
        AminoAcid::Methionine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Arginine,
        AminoAcid::Histidine,
        AminoAcid::Lysine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
    ];

    pub fn three_letter(&self) -> &'static str {
        match self {
            AminoAcid::Alanine => "ALA",
            AminoAcid::Glycine => "GLY",
            AminoAcid::Isoleucine => "ILE",
            AminoAcid::Leucine => "LEU",
            AminoAcid::Proline => "PRO",
            AminoAcid::Valine => "VAL",
            AminoAcid::Phenylalanine => "PHE",
            AminoAcid::Tryptophan => "TRP",
            AminoAcid::Tyrosine => "TYR",
            AminoAcid::Asparagine => "ASN",
            AminoAcid::Cysteine => "CYS",
            AminoAcid::Glutamine => "GLN",
            AminoAcid::Methionine => "MET",
            AminoAcid::Serine => "SER",
            AminoAcid::Threonine => "THR",
            AminoAcid::Arginine => "ARG",
            AminoAcid::Histidine => "HIS",
            AminoAcid::Lysine => "LYS",
            AminoAcid::AsparticAcid => "ASP",
            AminoAcid::GlutamicAcid => "GLU",
        }
    }

    pub fn one_letter(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Glycine => 'G',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Proline => 'P',
            AminoAcid::Valine => 'V',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Methionine => 'M',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Arginine => 'R',
            AminoAcid::Histidine => 'H',
            AminoAcid::Lysine => 'K',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized amino acid code: '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALA" => Ok(AminoAcid::Alanine),
            "GLY" => Ok(AminoAcid::Glycine),
            "ILE" => Ok(AminoAcid::Isoleucine),
            "LEU" => Ok(AminoAcid::Leucine),
            "PRO" => Ok(AminoAcid::Proline),
            "VAL" => Ok(AminoAcid::Valine),
            "PHE" => Ok(AminoAcid::Phenylalanine),
            "TRP" => Ok(AminoAcid::Tryptophan),
            "TYR" => Ok(AminoAcid::Tyrosine),
            "ASN" => Ok(AminoAcid::Asparagine),
            "CYS" => Ok(AminoAcid::Cysteine),
            "GLN" => Ok(AminoAcid::Glutamine),
            "MET" => Ok(AminoAcid::Methionine),
            "SER" => Ok(AminoAcid::Serine),
            "THR" => Ok(AminoAcid::Threonine),
            "ARG" => Ok(AminoAcid::Arginine),
            "HIS" => Ok(AminoAcid::Histidine),
            "LYS" => Ok(AminoAcid::Lysine),
            "ASP" => Ok(AminoAcid::AsparticAcid),
            "GLU" => Ok(AminoAcid::GlutamicAcid),
            _ => Err(ParseAminoAcidError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_code_set_covers_all_twenty_amino_acids() {
        for amino_acid in AminoAcid::ALL {
            assert!(is_standard_code(amino_acid.three_letter()));
        }
        assert_eq!(STANDARD_RESIDUE_CODES.len(), 20);
    }

    #[test]
    fn is_standard_code_rejects_unknown_and_lowercase_codes() {
        assert!(!is_standard_code("MSE"));
        assert!(!is_standard_code("gly"));
        assert!(!is_standard_code(""));
    }

    #[test]
    fn is_standard_code_trims_whitespace() {
        assert!(is_standard_code(" ALA "));
    }

    #[test]
    fn from_str_parses_codes_case_insensitively() {
        assert_eq!("LEU".parse::<AminoAcid>(), Ok(AminoAcid::Leucine));
        assert_eq!("leu".parse::<AminoAcid>(), Ok(AminoAcid::Leucine));
        assert_eq!(" His ".parse::<AminoAcid>(), Ok(AminoAcid::Histidine));
    }

    #[test]
    fn from_str_rejects_unknown_codes() {
        assert_eq!(
            "XYZ".parse::<AminoAcid>(),
            Err(ParseAminoAcidError("XYZ".to_string()))
        );
        assert!("L".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn three_letter_codes_round_trip_through_from_str() {
        for amino_acid in AminoAcid::ALL {
            assert_eq!(amino_acid.three_letter().parse::<AminoAcid>(), Ok(amino_acid));
        }
    }

    #[test]
    fn one_letter_codes_are_unique() {
        let codes: HashSet<char> = AminoAcid::ALL.iter().map(|aa| aa.one_letter()).collect();
        assert_eq!(codes.len(), 20);
    }

    #[test]
    fn display_matches_three_letter_code() {
        assert_eq!(AminoAcid::Tryptophan.to_string(), "TRP");
        assert_eq!(AminoAcid::AsparticAcid.to_string(), "ASP");
    }
}
