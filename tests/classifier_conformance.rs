//! Cross-fixture conformance suite for the variant-name classifier.
//!
//! Every rule declares aliases it must match and aliases it must reject.
//! Beyond its own negatives, each rule must also reject every other rule's
//! positive fixtures; together with the priority-order routing check this
//! pins the rule ordering, the primary regression oracle for the cascade.

use covnom::classify;
use covnom::classify::rules;

#[test]
fn test_every_rule_accepts_its_own_fixtures() {
    for rule in rules() {
        for alias in rule.should_match {
            assert!(
                rule.matches(alias),
                "rule {:?} should match {:?} (pattern {})",
                rule.name,
                alias,
                rule.pattern()
            );
        }
    }
}

#[test]
fn test_every_rule_rejects_its_declared_negatives() {
    for rule in rules() {
        for alias in rule.should_reject {
            assert!(
                !rule.matches(alias),
                "rule {:?} should reject {:?} (pattern {})",
                rule.name,
                alias,
                rule.pattern()
            );
        }
    }
}

#[test]
fn test_every_rule_rejects_every_other_rules_fixtures() {
    for (i, rule) in rules().iter().enumerate() {
        for (j, other) in rules().iter().enumerate() {
            if i == j {
                continue;
            }
            for alias in other.should_match {
                assert!(
                    !rule.matches(alias),
                    "rule {:?} must not match {:?}, a fixture of rule {:?}",
                    rule.name,
                    alias,
                    other.name
                );
            }
        }
    }
}

#[test]
fn test_classify_routes_every_fixture_to_its_owning_rule() {
    for rule in rules() {
        for alias in rule.should_match {
            assert_eq!(
                classify(alias),
                Some(rule.organization),
                "alias {:?} should classify as {} via rule {:?}",
                alias,
                rule.organization,
                rule.name
            );
        }
    }
}

#[test]
fn test_no_rule_earlier_in_priority_also_matches() {
    for (i, rule) in rules().iter().enumerate() {
        for alias in rule.should_match {
            for earlier in &rules()[..i] {
                assert!(
                    !earlier.matches(alias),
                    "rule {:?} shadows {:?}, a fixture of later rule {:?}",
                    earlier.name,
                    alias,
                    rule.name
                );
            }
        }
    }
}

#[test]
fn test_fixture_scenarios() {
    use covnom::Organization;

    assert_eq!(classify("B.1.1.7"), Some(Organization::Pango));
    assert_eq!(classify("21A.Delta"), Some(Organization::Covariants));
    assert_eq!(classify("VUI-202102/04"), Some(Organization::Phe));
    assert_eq!(classify("GRY"), Some(Organization::Gisaid));
    assert_eq!(classify("Alpha"), Some(Organization::Who));
    assert_eq!(classify("totally new name"), None);
}
