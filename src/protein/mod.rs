//! Protein name canonicalization
//!
//! Annotation sources name the same protein many ways: curated verbose names
//! ("Spike (surface glycoprotein)"), free-text descriptions ("membrane
//! glycoprotein") and ORF designations ("ORF3a"). Everything is reduced to a
//! short code from a closed vocabulary: S, N, M, E, the NS accessory
//! proteins, the NSP cleavage products and the ORF1 polyproteins (which the
//! caller then remaps with [`orf1`]).

pub mod orf1;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CovnomError;

/// Verbose protein names as they appear in curated annotation sources,
/// matched verbatim before any normalization.
const VERBOSE_PROTEIN_NAMES: &[(&str, &str)] = &[
    ("NSP11", "NSP11"),
    ("NSP13 (helicase)", "NSP13"),
    ("NSP5 (3C-like proteinase)", "NSP5"),
    ("NSP12 (RNA-dependent RNA polymerase)", "NSP12"),
    ("ORF1ab polyprotein", "ORF1AB"),
    ("NS7b (ORF7b)", "NS7B"),
    ("N (nucleocapsid phosphoprotein)", "N"),
    ("ORF1a polyprotein", "ORF1A"),
    ("NSP10", "NSP10"),
    ("NSP16 (2'-O-ribose methyltransferase)", "NSP16"),
    ("NSP14 (3'-to-5' exonuclease)", "NSP14"),
    ("NSP1 (leader protein)", "NSP1"),
    ("NSP7", "NSP7"),
    ("NSP3", "NSP3"),
    ("NS7a (ORF7a protein)", "NS7A"),
    ("NSP2", "NSP2"),
    ("NSP9", "NSP9"),
    ("NSP6", "NSP6"),
    ("NSP4", "NSP4"),
    ("NSP8", "NSP8"),
    ("NS8 (ORF8 protein)", "NS8"),
    ("NS6 (ORF6 protein)", "NS6"),
    ("ORF10 protein", "NS10"),
    ("NSP15 (endoRNAse)", "NSP15"),
    ("Spike (surface glycoprotein)", "S"),
    ("NS3 (ORF3a protein)", "NS3"),
    ("M (membrane glycoprotein)", "M"),
    ("E (envelope protein)", "E"),
];

/// Tokens that identify a protein wherever they appear in the name.
/// Most specific first: NSP1 would otherwise shadow NSP10 through NSP16.
const CONTAINMENT_TOKENS: &[(&str, &str)] = &[
    ("SPIKE", "S"),
    ("NSP16", "NSP16"),
    ("NSP15", "NSP15"),
    ("NSP14", "NSP14"),
    ("NSP13", "NSP13"),
    ("NSP12", "NSP12"),
    ("NSP11", "NSP11"),
    ("NSP10", "NSP10"),
    ("NSP9", "NSP9"),
    ("NSP8", "NSP8"),
    ("NSP7", "NSP7"),
    ("NSP6", "NSP6"),
    ("NSP5", "NSP5"),
    ("NSP4", "NSP4"),
    ("NSP3", "NSP3"),
    ("NSP2", "NSP2"),
    ("NSP1", "NSP1"),
    ("NUCLEOCAPSID", "N"),
    ("ENVELOPE", "E"),
    ("NS3", "NS3"),
    ("NS8", "NS8"),
];

/// Generic suffixes stripped from free-text names. GLYCOPROTEIN must precede
/// the bare PROTEIN suffix it contains.
const NAME_REPLACEMENTS: &[(&str, &str)] = &[
    ("GLYCOPROTEIN", ""),
    ("PHOSPHOPROTEIN", ""),
    ("PROTEIN", ""),
    ("SURFACE", "S"),
    ("ENVELOPE", "E"),
    ("NUCLEOCAPSID", "N"),
    ("MEMBRANE", "M"),
];

/// ORF/NS short forms outside the ORF1 polyproteins, e.g. ORF3a or NS7b.
/// The number alternation never matches a bare 1, so ORF1A and ORF1B fall
/// through to the polyprotein remapper untouched.
static ORF_SHORT_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(ORF|NS)((?:1\d)|(?:[2-9]+))([A-Za-z]?)").unwrap());

/// Check whether a name is one of the ORF1 polyproteins.
pub(crate) fn is_polyprotein(name: &str) -> bool {
    matches!(name, "ORF1AB" | "ORF1A" | "ORF1B")
}

/// Canonical short codes and recognized prefixes.
fn is_recognized(name: &str) -> bool {
    matches!(name, "S" | "N" | "M" | "E") || name.starts_with("NS") || is_polyprotein(name)
}

/// Canonicalize a protein name to its short code.
///
/// The cascade tries, in order: an exact lookup against the verbose-name
/// dictionary, containment of an always-identifiable token, stripping of
/// generic suffixes, and the ORF/NS short-form pattern. Names that survive
/// none of these fail with [`CovnomError::UnresolvedProteinName`].
///
/// ORF1 polyprotein names are returned as-is; translating their positions to
/// NSP-local coordinates is [`orf1::remap`]'s job.
pub fn canonicalize(name: &str) -> Result<String, CovnomError> {
    let trimmed = name.trim();
    for (verbose, short) in VERBOSE_PROTEIN_NAMES {
        if *verbose == trimmed {
            return Ok((*short).to_string());
        }
    }

    let upper = trimmed.to_uppercase();
    for (token, short) in CONTAINMENT_TOKENS {
        if upper.contains(token) {
            return Ok((*short).to_string());
        }
    }

    let mut replaced = upper.clone();
    for (from, to) in NAME_REPLACEMENTS {
        replaced = replaced.replace(from, to);
    }
    let replaced = replaced.trim();
    if is_recognized(replaced) {
        return Ok(replaced.to_string());
    }

    if let Some(caps) = ORF_SHORT_FORM.captures(&upper) {
        return Ok(format!("NS{}{}", &caps[2], &caps[3]));
    }

    Err(CovnomError::UnresolvedProteinName {
        name: trimmed.to_string(),
    })
}
