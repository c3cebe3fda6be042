//! Batch curation of encoded change records
//!
//! Records in a batch are independent: a malformed input is reported as a
//! [`RecordFailure`] and the remaining inputs keep loading. Curated records
//! are deduplicated by their encoded string, the record's natural identity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::change::parser;
use crate::change::{AaChange, Change, ChangeKind};
use crate::error::{CovnomError, ParseWarning};

/// The canonical record handed to collaborators (persistence, dedup,
/// cross-referencing). Serializes with the external field names
/// (`encodedString`, `ref`, `pos`, `alt`, `type`, `isOptional`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// The encoded change string, the record's identity and dedup key.
    pub encoded_string: String,
    /// Canonical protein short code; absent for nucleotide changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "pos")]
    pub position: u32,
    #[serde(rename = "alt")]
    pub alternative: String,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub length: usize,
    pub is_optional: bool,
}

impl From<&Change> for CanonicalRecord {
    fn from(change: &Change) -> Self {
        Self {
            encoded_string: change.encoded(),
            protein: None,
            reference: change.reference.clone(),
            position: change.position,
            alternative: change.alternative.clone(),
            kind: change.kind,
            length: change.length,
            is_optional: change.optional,
        }
    }
}

impl From<&AaChange> for CanonicalRecord {
    fn from(change: &AaChange) -> Self {
        Self {
            encoded_string: change.encoded(),
            protein: Some(change.protein.clone()),
            reference: change.reference.clone(),
            position: change.position,
            alternative: change.alternative.clone(),
            kind: change.kind,
            length: change.length,
            is_optional: change.optional,
        }
    }
}

/// A record that failed to parse, with the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// The raw input as received.
    pub input: String,
    /// The error that rejected it.
    pub error: CovnomError,
}

/// Outcome of curating a batch of encoded changes.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Curated records, in input order, first occurrence of each key.
    pub records: Vec<CanonicalRecord>,
    /// Inputs that failed to parse.
    pub failures: Vec<RecordFailure>,
    /// Warnings produced by otherwise valid records.
    pub warnings: Vec<ParseWarning>,
    /// Inputs dropped because their encoded key was already curated.
    pub duplicates: usize,
}

impl BatchResult {
    /// Total number of inputs processed.
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len() + self.duplicates
    }

    /// Fraction of inputs that produced or duplicated a record, as a
    /// percentage.
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            100.0
        } else {
            ((self.records.len() + self.duplicates) as f64 / self.total() as f64) * 100.0
        }
    }
}

/// Curate a batch of encoded nucleotide changes, e.g. `["C241T", "A23403G"]`.
pub fn curate_nuc_changes<I, S>(inputs: I) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BatchResult::default();
    let mut seen = HashSet::new();
    for input in inputs {
        let input = input.as_ref();
        match parser::parse_encoded(input) {
            Ok(change) => push_record(&mut out, &mut seen, CanonicalRecord::from(&change)),
            Err(error) => fail(&mut out, input, error),
        }
    }
    out
}

/// Curate a batch of encoded amino-acid changes, e.g. `["S:N501Y"]`.
pub fn curate_aa_changes<I, S>(inputs: I) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BatchResult::default();
    let mut seen = HashSet::new();
    for input in inputs {
        let input = input.as_ref();
        match parser::parse_encoded_with_protein(input) {
            Ok(parsed) => {
                out.warnings.extend(parsed.warnings);
                push_record(&mut out, &mut seen, CanonicalRecord::from(&parsed.value));
            }
            Err(error) => fail(&mut out, input, error),
        }
    }
    out
}

fn push_record(out: &mut BatchResult, seen: &mut HashSet<String>, record: CanonicalRecord) {
    if seen.insert(record.encoded_string.clone()) {
        out.records.push(record);
    } else {
        log::debug!("dropping duplicate change {}", record.encoded_string);
        out.duplicates += 1;
    }
}

fn fail(out: &mut BatchResult, input: &str, error: CovnomError) {
    log::warn!("skipping change {:?}: {}", input, error);
    out.failures.push(RecordFailure {
        input: input.to_string(),
        error,
    });
}
