//! Canonical mutation change records
//!
//! A [`Change`] is a nucleotide-level mutation: reference bases, a 1-based
//! position and alternative bases. An [`AaChange`] is the amino-acid
//! counterpart carrying a canonical protein short code; building one
//! canonicalizes the protein name, remaps ORF1 polyprotein coordinates and
//! translates residue names.
//!
//! Both types render their canonical encoded string through `Display`
//! (`N501Y`, `S:N501Y`); the encoded string is the record's identity and
//! dedup key.

pub mod parser;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CovnomError, Parsed, ParseWarning};
use crate::protein;
use crate::protein::orf1::{self, Polyprotein};
use crate::residue;

/// Classification of a change by its effect on the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    /// Substitution: reference and alternative have equal length.
    Sub,
    /// Insertion: no reference bases, or alternative is longer.
    Ins,
    /// Deletion: alternative contains the `-` sentinel or is shorter.
    Del,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Sub => write!(f, "SUB"),
            ChangeKind::Ins => write!(f, "INS"),
            ChangeKind::Del => write!(f, "DEL"),
        }
    }
}

/// A nucleotide-level change.
///
/// Construction normalizes the fields (see [`Change::new`]); the record is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    /// Reference bases; empty for an insertion.
    pub reference: String,
    /// 1-based position on the reference sequence.
    pub position: u32,
    /// Alternative bases; `-` for a deletion.
    pub alternative: String,
    /// Substitution, insertion or deletion.
    pub kind: ChangeKind,
    /// `max(reference.len(), alternative.len())`.
    pub length: usize,
    /// Whether the change is optional within its variant characterization.
    pub optional: bool,
}

impl Change {
    /// Build a change from already-validated fields.
    ///
    /// Normalizes the fields before classification: reference and
    /// alternative are uppercased, a lone `-` reference becomes empty (it is
    /// a placeholder for "no reference base", e.g. `-10T`) and a literal
    /// `DEL` alternative becomes the `-` sentinel (e.g. `A11DEL`). Grammar
    /// validation is the parser's job; see [`parser::parse_parts`].
    pub fn new(reference: &str, position: u32, alternative: &str) -> Self {
        let (reference, alternative) = uniform(reference, alternative);
        let (kind, length) = infer_kind(&reference, &alternative);
        Self {
            reference,
            position,
            alternative,
            kind,
            length,
            optional: false,
        }
    }

    /// Parse a reference/position/alternative field triple.
    ///
    /// See [`parser::parse_parts`] for the field grammars.
    pub fn from_parts(
        reference: &str,
        position: &str,
        alternative: &str,
    ) -> Result<Self, CovnomError> {
        parser::parse_parts(reference, position, alternative)
    }

    /// The canonical encoded form `ref + pos + alt`, the record's identity.
    pub fn encoded(&self) -> String {
        self.to_string()
    }

    /// Mark the change as optional within its variant characterization.
    pub fn mark_optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.reference, self.position, self.alternative
        )
    }
}

impl FromStr for Change {
    type Err = CovnomError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parser::parse_encoded(input)
    }
}

/// An amino-acid change on a named protein.
///
/// The protein is a canonical short code; positions originally expressed on
/// an ORF1 polyprotein have been remapped to the containing NSP unless the
/// position resolved to no segment, in which case the polyprotein name and
/// position are kept and a warning accompanies the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AaChange {
    /// Canonical protein short code.
    pub protein: String,
    /// Reference residues; empty for an insertion.
    pub reference: String,
    /// 1-based residue position on the protein.
    pub position: u32,
    /// Alternative residues; `-` for a deletion.
    pub alternative: String,
    /// Substitution, insertion or deletion.
    pub kind: ChangeKind,
    /// `max(reference.len(), alternative.len())`.
    pub length: usize,
    /// Whether the change is optional within its variant characterization.
    pub optional: bool,
}

impl AaChange {
    /// Attach a protein to a parsed change.
    ///
    /// Canonicalizes the protein name, remaps ORF1 polyprotein positions to
    /// the containing NSP and translates residue names to single-letter
    /// codes. Kind and length are recomputed after translation: a
    /// `TYROSINE` reference is one residue long, not eight characters.
    pub fn new(protein: &str, change: Change) -> Result<Parsed<Self>, CovnomError> {
        let mut warnings = Vec::new();
        let mut protein = protein::canonicalize(protein)?;
        let mut position = change.position;

        if let Some(polyprotein) = Polyprotein::from_name(&protein) {
            match orf1::remap(polyprotein, position) {
                Some((nsp, local)) => {
                    protein = nsp.to_string();
                    position = local;
                }
                None => warnings.push(ParseWarning::UnresolvedProteinSegment {
                    protein: protein.clone(),
                    position,
                }),
            }
        }

        let (reference, alternative) =
            residue::translate_residue_names(&change.reference, &change.alternative);
        let (kind, length) = infer_kind(&reference, &alternative);

        let value = Self {
            protein,
            reference,
            position,
            alternative,
            kind,
            length,
            optional: change.optional,
        };
        Ok(Parsed::with_warnings(value, warnings))
    }

    /// Parse a protein plus reference/position/alternative field quadruple.
    pub fn from_parts(
        protein: &str,
        reference: &str,
        position: &str,
        alternative: &str,
    ) -> Result<Parsed<Self>, CovnomError> {
        Self::new(protein, Change::from_parts(reference, position, alternative)?)
    }

    /// Parse an encoded `protein:change` string.
    ///
    /// See [`parser::parse_encoded_with_protein`].
    pub fn parse(input: &str) -> Result<Parsed<Self>, CovnomError> {
        parser::parse_encoded_with_protein(input)
    }

    /// The canonical encoded form `protein + ":" + ref + pos + alt`.
    pub fn encoded(&self) -> String {
        self.to_string()
    }

    /// Mark the change as optional within its variant characterization.
    pub fn mark_optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl fmt::Display for AaChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}{}",
            self.protein, self.reference, self.position, self.alternative
        )
    }
}

fn uniform(reference: &str, alternative: &str) -> (String, String) {
    let mut reference = reference.to_uppercase();
    if reference == "-" {
        reference.clear();
    }
    let mut alternative = alternative.to_uppercase();
    if alternative == "DEL" {
        alternative = "-".to_string();
    }
    (reference, alternative)
}

fn infer_kind(reference: &str, alternative: &str) -> (ChangeKind, usize) {
    let length = reference.len().max(alternative.len());
    let kind = if alternative.contains('-') || reference.len() > alternative.len() {
        ChangeKind::Del
    } else if reference.is_empty() || reference.len() < alternative.len() {
        ChangeKind::Ins
    } else {
        ChangeKind::Sub
    };
    (kind, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        let change = Change::new("N", 501, "Y");
        assert_eq!(change.kind, ChangeKind::Sub);
        assert_eq!(change.length, 1);
        assert_eq!(change.encoded(), "N501Y");
    }

    #[test]
    fn test_dash_reference_is_insertion() {
        let change = Change::new("-", 10, "T");
        assert_eq!(change.reference, "");
        assert_eq!(change.kind, ChangeKind::Ins);
        assert_eq!(change.encoded(), "10T");
    }

    #[test]
    fn test_del_token_becomes_sentinel() {
        let change = Change::new("A", 11, "del");
        assert_eq!(change.alternative, "-");
        assert_eq!(change.kind, ChangeKind::Del);
        assert_eq!(change.encoded(), "A11-");
    }

    #[test]
    fn test_longer_reference_is_deletion() {
        let change = Change::new("AT", 69, "A");
        assert_eq!(change.kind, ChangeKind::Del);
        assert_eq!(change.length, 2);
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        let change = Change::new("at", 69, "a");
        assert_eq!(change.reference, "AT");
        assert_eq!(change.alternative, "A");
    }

    #[test]
    fn test_mark_optional() {
        let change = Change::new("N", 501, "Y").mark_optional();
        assert!(change.optional);
    }

    #[test]
    fn test_aa_change_translates_residues() {
        let parsed = AaChange::new("Spike (surface glycoprotein)", Change::new("TYR", 144, "del"))
            .unwrap();
        assert!(!parsed.has_warnings());
        let aa = parsed.into_value();
        assert_eq!(aa.protein, "S");
        assert_eq!(aa.reference, "Y");
        assert_eq!(aa.alternative, "-");
        assert_eq!(aa.kind, ChangeKind::Del);
        assert_eq!(aa.length, 1);
        assert_eq!(aa.encoded(), "S:Y144-");
    }

    #[test]
    fn test_aa_change_remaps_polyprotein() {
        let parsed = AaChange::new("ORF1AB", Change::new("N", 4393, "Y")).unwrap();
        let aa = parsed.into_value();
        assert_eq!(aa.protein, "NSP12");
        assert_eq!(aa.position, 1);
        assert_eq!(aa.encoded(), "NSP12:N1Y");
    }

    #[test]
    fn test_aa_change_unresolved_segment_keeps_original() {
        let parsed = AaChange::new("ORF1AB", Change::new("A", 7100, "T")).unwrap();
        assert_eq!(
            parsed.warnings,
            vec![ParseWarning::UnresolvedProteinSegment {
                protein: "ORF1AB".to_string(),
                position: 7100,
            }]
        );
        let aa = parsed.into_value();
        assert_eq!(aa.protein, "ORF1AB");
        assert_eq!(aa.position, 7100);
    }

    #[test]
    fn test_aa_change_length_counts_residues_after_translation() {
        let parsed = AaChange::new("S", Change::new("HISTIDINE", 69, "del")).unwrap();
        let aa = parsed.into_value();
        assert_eq!(aa.reference, "H");
        assert_eq!(aa.length, 1);
    }

    #[test]
    fn test_unresolved_protein_is_an_error() {
        let err = AaChange::new("hemagglutinin", Change::new("N", 501, "Y")).unwrap_err();
        assert!(matches!(err, CovnomError::UnresolvedProteinName { .. }));
    }

    #[test]
    fn test_kind_serde_form() {
        assert_eq!(format!("{}", ChangeKind::Sub), "SUB");
        assert_eq!(format!("{}", ChangeKind::Ins), "INS");
        assert_eq!(format!("{}", ChangeKind::Del), "DEL");
    }
}
