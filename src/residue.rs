//! Amino-acid residue name translation
//!
//! Annotation sources spell residues three ways: full English names
//! (`TYROSINE`), three-letter codes (`TYR`) and single-letter codes (`Y`).
//! Two disjoint substitution tables reduce the first two to single-letter
//! codes; inputs are expected to be uppercased already.

/// Spelled-out residue names and special values mapped to single-letter
/// codes. Order is significant: ISOLEUCINE must precede LEUCINE, which it
/// contains.
const LONG_RESIDUE_NAMES: &[(&str, &str)] = &[
    ("ALANINE", "A"),
    ("ARGININE", "R"),
    ("ASPARGINE", "N"),
    ("ASPARTIC", "D"),
    ("CYSTEINE", "C"),
    ("GLUTAMINE", "Q"),
    ("GLUTAMIC", "E"),
    ("GLYCINE", "G"),
    ("HISTIDINE", "H"),
    ("ISOLEUCINE", "I"),
    ("LEUCINE", "L"),
    ("LYSINE", "K"),
    ("METHIONINE", "M"),
    ("PHENYLALANINE", "F"),
    ("PROLINE", "P"),
    ("SERINE", "S"),
    ("THREONINE", "T"),
    ("TRYPTOPHAN", "W"),
    ("TYROSINE", "Y"),
    ("VALINE", "V"),
    ("STOP", "*"),
    ("UNSPECIFIED", "X"),
    ("UNKNOWN", "X"),
];

/// Three-letter residue codes mapped to single-letter codes.
const SHORT_RESIDUE_CODES: &[(&str, &str)] = &[
    ("ALA", "A"),
    ("ARG", "R"),
    ("ASN", "N"),
    ("ASP", "D"),
    ("CYS", "C"),
    ("GLN", "Q"),
    ("GLU", "E"),
    ("GLY", "G"),
    ("HIS", "H"),
    ("ILE", "I"),
    ("LEU", "L"),
    ("LYS", "K"),
    ("MET", "M"),
    ("PHE", "F"),
    ("PRO", "P"),
    ("SER", "S"),
    ("THR", "T"),
    ("TRP", "W"),
    ("TYR", "Y"),
    ("VAL", "V"),
    ("XAA", "X"),
];

fn replace_all(input: &str, table: &[(&str, &str)]) -> String {
    let mut out = input.to_string();
    for (from, to) in table {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Translate residue names in a reference/alternative pair to
/// single-letter codes.
///
/// The long-name table is applied first across both strings. The
/// three-letter table only runs if the long-name pass left the combined
/// length unchanged; a pair that shrank already contained long names, and
/// re-translating its single-letter output would corrupt it. The guard is a
/// heuristic, not a proof; it is pinned by a property test.
pub fn translate_residue_names(reference: &str, alternative: &str) -> (String, String) {
    let combined_len = reference.len() + alternative.len();
    let reference = replace_all(reference, LONG_RESIDUE_NAMES);
    let alternative = replace_all(alternative, LONG_RESIDUE_NAMES);
    if reference.len() + alternative.len() < combined_len {
        return (reference, alternative);
    }
    (
        replace_all(&reference, SHORT_RESIDUE_CODES),
        replace_all(&alternative, SHORT_RESIDUE_CODES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_names() {
        assert_eq!(
            translate_residue_names("TYROSINE", "HISTIDINE"),
            ("Y".to_string(), "H".to_string())
        );
    }

    #[test]
    fn test_short_codes() {
        assert_eq!(
            translate_residue_names("TYR", "HIS"),
            ("Y".to_string(), "H".to_string())
        );
    }

    #[test]
    fn test_single_letters_untouched() {
        assert_eq!(
            translate_residue_names("N", "Y"),
            ("N".to_string(), "Y".to_string())
        );
    }

    #[test]
    fn test_stop_and_unknown() {
        assert_eq!(
            translate_residue_names("STOP", "UNKNOWN"),
            ("*".to_string(), "X".to_string())
        );
        assert_eq!(translate_residue_names("GLN", "STOP").1, "*");
    }

    #[test]
    fn test_isoleucine_precedes_leucine() {
        assert_eq!(translate_residue_names("ISOLEUCINE", "LEUCINE").0, "I");
        assert_eq!(translate_residue_names("ISOLEUCINE", "LEUCINE").1, "L");
    }

    #[test]
    fn test_long_name_pass_suppresses_short_codes() {
        // "ALANINE" shrinks the pair, so the three-letter pass is skipped
        // and "VAL" survives untranslated.
        assert_eq!(
            translate_residue_names("ALANINE", "VAL"),
            ("A".to_string(), "VAL".to_string())
        );
    }

    #[test]
    fn test_deletion_sentinel_untouched() {
        assert_eq!(
            translate_residue_names("TYR", "-"),
            ("Y".to_string(), "-".to_string())
        );
    }
}
