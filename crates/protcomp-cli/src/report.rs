use crate::config::ReportSections;
use crate::error::Result;
use protcomp::core::models::residue::{self, AminoAcid};
use protcomp::profile::protein::Protein;

/// Renders the selected report sections into one printable block.
pub fn render(protein: &Protein, sections: &ReportSections) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("File:    {}\n", protein.path().display()));
    if sections.name {
        out.push_str(&format!("Name:    {}\n", protein.name()?));
    }
    if sections.length {
        out.push_str(&format!("Length:  {} AAs\n", protein.length()?));
    }
    if sections.composition {
        render_composition(&mut out, protein)?;
    }
    if sections.chains {
        render_chains(&mut out, protein)?;
    }

    Ok(out)
}

fn render_composition(out: &mut String, protein: &Protein) -> Result<()> {
    let composition = protein.composition_aa()?;
    let percentages = composition.percentages();

    out.push('\n');
    out.push_str(&format!(
        "Composition: {} residues across {} distinct codes\n",
        composition.total(),
        composition.distinct_codes()
    ));
    for (code, count) in composition.iter() {
        // One-letter annotation only exists for the twenty standard codes.
        let one_letter = code
            .parse::<AminoAcid>()
            .map(|aa| aa.one_letter())
            .unwrap_or('-');
        let share = percentages.get(code).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "  {:<4}({})  {:>6}  {:>6.2}%\n",
            code, one_letter, count, share
        ));
    }

    let nonstandard = composition
        .iter()
        .filter(|&(code, _)| !residue::is_standard_code(code))
        .count();
    if nonstandard > 0 {
        out.push_str(&format!(
            "  {} code(s) outside the standard twenty\n",
            nonstandard
        ));
    }

    Ok(())
}

fn render_chains(out: &mut String, protein: &Protein) -> Result<()> {
    let chains = protein.chain_aa()?;

    out.push('\n');
    out.push_str(&format!("Chains: {}\n", chains.len()));
    for (chain, percentages) in chains {
        out.push_str(&format!("  Chain {}:\n", chain));
        if percentages.is_empty() {
            out.push_str("    (no residues)\n");
            continue;
        }
        for (code, share) in percentages {
            out.push_str(&format!("    {:<4} {:>6.2}%\n", code, share));
        }
    }

    Ok(())
}
