//! Field grammars for encoded changes
//!
//! An encoded change is `<ref><pos><alt>`: reference bases (letters, dash
//! and stop, possibly empty), one or more `/`-separated positions, and
//! alternative bases (non-empty). An encoded amino-acid change prefixes a
//! protein name and a `:`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AaChange, Change};
use crate::error::{CovnomError, Parsed};

/// Grammar for the reference field.
pub const REF_PATTERN: &str = r"[A-Za-z*-]*";
/// Grammar for the position field. Concatenated positions are collapsed to
/// the first segment, e.g. `69/70` to 69.
pub const POS_PATTERN: &str = r"\d+(/\d+)*";
/// Grammar for the alternative field.
pub const ALT_PATTERN: &str = r"[A-Za-z*-]+";
/// Grammar splitting a whole encoded change into its three fields.
pub const CHANGE_PATTERN: &str = r"([A-Za-z*-]*)(\d+(/\d+)*)([A-Za-z*-]+)";

static REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z*-]*$").unwrap());
static POS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:/\d+)*$").unwrap());
static ALT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z*-]+$").unwrap());
static CHANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z*-]*)(\d+(?:/\d+)*)([A-Za-z*-]+)$").unwrap());

/// Parse a reference/position/alternative field triple into a [`Change`].
///
/// Fields are trimmed, then validated against their grammars; the first
/// failing field is reported with its expected pattern.
pub fn parse_parts(
    reference: &str,
    position: &str,
    alternative: &str,
) -> Result<Change, CovnomError> {
    let reference = reference.trim();
    let position = position.trim();
    let alternative = alternative.trim();

    if !REF_RE.is_match(reference) {
        return Err(CovnomError::InvalidReference {
            input: format!("{}{}{}", reference, position, alternative),
            reference: reference.to_string(),
            pattern: REF_PATTERN,
        });
    }
    if !POS_RE.is_match(position) {
        return Err(CovnomError::InvalidPosition {
            input: format!("{}{}{}", reference, position, alternative),
            position: position.to_string(),
            pattern: POS_PATTERN,
        });
    }
    if !ALT_RE.is_match(alternative) {
        return Err(CovnomError::InvalidAlternative {
            input: format!("{}{}{}", reference, position, alternative),
            alternative: alternative.to_string(),
            pattern: ALT_PATTERN,
        });
    }
    build(reference, position, alternative)
}

/// Parse an encoded change string, e.g. `N501Y` or `H69-`.
///
/// The whole string must split into the three fields; a partial match is
/// rejected.
pub fn parse_encoded(input: &str) -> Result<Change, CovnomError> {
    let trimmed = input.trim();
    let caps = CHANGE_RE
        .captures(trimmed)
        .ok_or_else(|| CovnomError::InvalidChange {
            input: trimmed.to_string(),
            pattern: CHANGE_PATTERN,
        })?;
    build(&caps[1], &caps[2], &caps[3])
}

/// Parse an encoded amino-acid change string, e.g. `S:N501Y`.
///
/// Splits once on the first `:`; the left side is the raw protein name, the
/// right side an encoded change.
pub fn parse_encoded_with_protein(input: &str) -> Result<Parsed<AaChange>, CovnomError> {
    let trimmed = input.trim();
    let (protein, change) = trimmed
        .split_once(':')
        .ok_or_else(|| CovnomError::MissingProtein {
            input: trimmed.to_string(),
        })?;
    AaChange::new(protein, parse_encoded(change)?)
}

fn build(reference: &str, position: &str, alternative: &str) -> Result<Change, CovnomError> {
    let first = position.split('/').next().unwrap_or(position);
    let parsed = first
        .parse::<u32>()
        .ok()
        .filter(|position| *position >= 1)
        .ok_or_else(|| CovnomError::InvalidPosition {
            input: format!("{}{}{}", reference, position, alternative),
            position: position.to_string(),
            pattern: POS_PATTERN,
        })?;
    Ok(Change::new(reference, parsed, alternative))
}
