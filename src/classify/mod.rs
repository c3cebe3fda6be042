//! Variant alias classification
//!
//! Variant names arrive from many naming authorities: Pango lineages,
//! GISAID clades, Nextstrain/CoVariants clade strings, WHO labels and PHE
//! designations. A fixed, ordered cascade of regex rules assigns the
//! organization a given alias belongs to. Order is a correctness contract:
//! composite patterns (clade plus WHO name plus change) are listed before
//! the shorter patterns they extend, otherwise the shorter pattern wins on
//! an ambiguous alias. Each rule declares pass/reject fixtures; the
//! conformance suite cross-checks every rule against every other rule's
//! fixtures to pin the ordering.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming organization an alias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Organization {
    /// Pango lineage designations, e.g. B.1.1.7.
    Pango,
    /// GISAID clade codes, e.g. GRY or GH/501Y.V2.
    Gisaid,
    /// Nextstrain/CoVariants clade strings, e.g. 21A.Delta.
    Covariants,
    /// WHO Greek labels, e.g. Alpha.
    Who,
    /// UK Health Security Agency designations, e.g. VUI-202102/04.
    Phe,
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Organization::Pango => write!(f, "PANGO"),
            Organization::Gisaid => write!(f, "GISAID"),
            Organization::Covariants => write!(f, "COVARIANTS"),
            Organization::Who => write!(f, "WHO"),
            Organization::Phe => write!(f, "PHE"),
        }
    }
}

/// An amino-acid change without a protein prefix, e.g. N501Y, 501Y or K417.
const AA_CHANGE_FRAGMENT: &str = r"([A-Z\-]+\d+[A-Z\-]+)|(\d+[A-Z\-]+)|([A-Z\-]+\d+)";

/// A Nextstrain clade identifier, e.g. 20A or EU1.
const NEXTSTRAIN_FRAGMENT: &str = r"(2\d[A-Z])|(EU\d)";

/// A WHO label: a Greek letter or its spelled-out name.
const WHO_FRAGMENT: &str = r"([Α-Ωα-ω\*])|(Alpha|Beta|Gamma|Delta|Epsilon|Zeta|Eta|Theta|Iota|Kappa|Lambda|Mu|Nu|Xi|Omicron|Pi|Rho|Sigma|Tau|Upsilon|Phi|Chi|Psi|Omega)";

/// One classification rule: a full-match pattern tagged with its
/// organization and its conformance fixtures.
#[derive(Debug)]
pub struct NameRule {
    /// Human-readable rule name, used in test diagnostics.
    pub name: &'static str,
    /// Organization assigned when this rule matches.
    pub organization: Organization,
    regex: Regex,
    /// Aliases this rule must match in full.
    pub should_match: &'static [&'static str],
    /// Aliases this rule must reject, beyond every other rule's
    /// `should_match` fixtures.
    pub should_reject: &'static [&'static str],
}

impl NameRule {
    fn new(
        name: &'static str,
        organization: Organization,
        pattern: &str,
        should_match: &'static [&'static str],
        should_reject: &'static [&'static str],
    ) -> Self {
        // anchored so the rule only fires on the entire alias
        let regex = Regex::new(&format!("^(?:{})$", pattern)).expect("rule pattern must compile");
        Self {
            name,
            organization,
            regex,
            should_match,
            should_reject,
        }
    }

    /// True when the pattern matches the entire alias.
    pub fn matches(&self, alias: &str) -> bool {
        self.regex.is_match(alias)
    }

    /// The anchored pattern source, for diagnostics.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Classification rules in priority order.
pub static RULES: Lazy<Vec<NameRule>> = Lazy::new(|| {
    vec![
        NameRule::new(
            "nextstrain clade",
            Organization::Covariants,
            NEXTSTRAIN_FRAGMENT,
            &["20A", "EU1", "21A"],
            &[],
        ),
        NameRule::new(
            "nextstrain clade with alternative clade",
            Organization::Covariants,
            &format!(
                r"(({ns}))([\./]?[\W]*(({ns}))[\W]*)",
                ns = NEXTSTRAIN_FRAGMENT
            ),
            &["21A.21B", "21A/21B", "20A.EU1", "20E (EU1)"],
            &["20A", "EU1", "21A"],
        ),
        NameRule::new(
            "nextstrain clade with change",
            Organization::Covariants,
            &format!(
                r"((({ns}))[\./])?[A-Z][\.:]({aa})",
                ns = NEXTSTRAIN_FRAGMENT,
                aa = AA_CHANGE_FRAGMENT
            ),
            &["20B/S:732A", "S.N439K", "S.H69-"],
            &[
                "20G/S:677H.Robin2",
                "S.Q677H.Robin1",
                "21A.Delta.S.K417",
                "21A.Delta",
                "20I.Alpha.V1",
            ],
        ),
        NameRule::new(
            "nextstrain clade with change and trailing name",
            Organization::Covariants,
            &format!(
                r"((({ns}))[\./])?[A-Z][\.:]({aa})\.\w+",
                ns = NEXTSTRAIN_FRAGMENT,
                aa = AA_CHANGE_FRAGMENT
            ),
            &["S.Q677H.Robin1", "20G/S:677H.Robin2"],
            &["20B/S:732A", "S.N439K", "S.H69-"],
        ),
        NameRule::new(
            "nextstrain clade with who name and change",
            Organization::Covariants,
            &format!(
                r"((({ns}))[\./])?(({who}))\.[A-Z][\.:]({aa})",
                ns = NEXTSTRAIN_FRAGMENT,
                who = WHO_FRAGMENT,
                aa = AA_CHANGE_FRAGMENT
            ),
            &["21A.Delta.S.K417"],
            &["20B.S.732A"],
        ),
        NameRule::new(
            "nextstrain clade with who name",
            Organization::Covariants,
            &format!(
                r"(({ns}))[\./](({who}))(\.\w+)?",
                ns = NEXTSTRAIN_FRAGMENT,
                who = WHO_FRAGMENT
            ),
            &["20I.Alpha.V1", "21A.Delta"],
            &["21A.Delta.S.K417", "20I (Alpha, V1)", "21A (Delta)"],
        ),
        NameRule::new(
            "nextstrain clade with parenthesized who name",
            Organization::Covariants,
            &format!(
                r"(({ns}))[\s\(]+(({who}))[\s\),\w]+",
                ns = NEXTSTRAIN_FRAGMENT,
                who = WHO_FRAGMENT
            ),
            &["20I (Alpha, V1)", "21A (Delta)"],
            &["20I.Alpha.V1", "21A.Delta"],
        ),
        NameRule::new(
            "who name with appended change",
            Organization::Covariants,
            &format!(
                r"(({who}))[\s\+]+[A-Z][\.:]({aa})",
                who = WHO_FRAGMENT,
                aa = AA_CHANGE_FRAGMENT
            ),
            &["Delta + S:K417"],
            &[],
        ),
        NameRule::new(
            "pango lineage",
            Organization::Pango,
            r"[A-Z]{1,2}(\.\d+)+",
            &["B.1.1.7", "P.1", "B.1.617.1.2", "AV.1"],
            &[],
        ),
        NameRule::new(
            "pango lineage with alternative lineage",
            Organization::Pango,
            r"[A-Z]{1,2}(\.\d+)*/[A-Z]{1,2}(\.\d+)*",
            &["B.1.427/B.1.429"],
            &[],
        ),
        NameRule::new(
            "gisaid clade",
            Organization::Gisaid,
            r"[A-Z]+(/\d+[A-Z\-]\.\w+)?",
            &["GH/501Y.V2", "GRY"],
            &[],
        ),
        NameRule::new(
            "phe designation with numeric date",
            Organization::Phe,
            r"(VOC|VUI)[\-\s]*(\d{4})(\d{2})/(\d{2})",
            &["VUI-202102/04", "VUI 202102/04", "VUI202102/04", "VUI - 202102/04"],
            &[],
        ),
        NameRule::new(
            "phe designation with textual date",
            Organization::Phe,
            r"(VOC|VUI)[\-\s]*(\d{2})([A-Z]{3})-(\d{2})",
            &["VUI-21MAR-02", "VUI 21MAR-02", "VUI - 21MAR-02"],
            &[],
        ),
        NameRule::new(
            "who label",
            Organization::Who,
            WHO_FRAGMENT,
            &["Alpha"],
            &[],
        ),
    ]
});

/// The classification rules in priority order.
pub fn rules() -> &'static [NameRule] {
    RULES.as_slice()
}

/// Assign the naming organization of an alias.
///
/// Rules are evaluated in priority order; the first whose pattern matches
/// the entire alias wins. `None` means no rule recognized the alias, an
/// expected steady-state outcome rather than an error.
pub fn classify(alias: &str) -> Option<Organization> {
    RULES
        .iter()
        .find(|rule| rule.matches(alias))
        .map(|rule| rule.organization)
}

/// Like [`classify`], with an explicit fallback for unrecognized aliases.
pub fn classify_or(alias: &str, fallback: Organization) -> Organization {
    classify(alias).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_lineage() {
        assert_eq!(classify("B.1.1.7"), Some(Organization::Pango));
        assert_eq!(classify("P.1"), Some(Organization::Pango));
        assert_eq!(classify("B.1.427/B.1.429"), Some(Organization::Pango));
    }

    #[test]
    fn test_gisaid_clade() {
        assert_eq!(classify("GRY"), Some(Organization::Gisaid));
        assert_eq!(classify("GH/501Y.V2"), Some(Organization::Gisaid));
    }

    #[test]
    fn test_nextstrain_names() {
        assert_eq!(classify("21A"), Some(Organization::Covariants));
        assert_eq!(classify("21A.Delta"), Some(Organization::Covariants));
        assert_eq!(classify("20E (EU1)"), Some(Organization::Covariants));
        assert_eq!(classify("Delta + S:K417"), Some(Organization::Covariants));
    }

    #[test]
    fn test_phe_designations() {
        assert_eq!(classify("VUI-202102/04"), Some(Organization::Phe));
        assert_eq!(classify("VUI-21MAR-02"), Some(Organization::Phe));
    }

    #[test]
    fn test_who_labels() {
        assert_eq!(classify("Alpha"), Some(Organization::Who));
        assert_eq!(classify("δ"), Some(Organization::Who));
    }

    #[test]
    fn test_unrecognized_alias() {
        assert_eq!(classify("lineage 42"), None);
        assert_eq!(
            classify_or("lineage 42", Organization::Covariants),
            Organization::Covariants
        );
    }

    #[test]
    fn test_whole_string_match_only() {
        // contains a Pango lineage but is not one
        assert_eq!(classify("variant B.1.1.7 (UK)"), None);
    }

    #[test]
    fn test_organization_display() {
        assert_eq!(format!("{}", Organization::Pango), "PANGO");
        assert_eq!(format!("{}", Organization::Covariants), "COVARIANTS");
    }
}
