//! Property-based coverage of the comparator's contract.

use flexver::{FlexVer, compare, decompose};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Version-shaped strings: the character set versions in the wild draw on.
fn versionish() -> impl Strategy<Value = String> {
    "[0-9a-zA-Z._+-]{0,24}"
}

proptest! {
    #[test]
    fn commutative(a in versionish(), b in versionish()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn commutative_over_arbitrary_unicode(a in ".*", b in ".*") {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn reflexive(a in versionish()) {
        prop_assert_eq!(Ordering::Equal, compare(&a, &a));
    }

    #[test]
    fn build_metadata_is_ignored(a in versionish(), meta in "[0-9a-zA-Z._-]{0,12}") {
        prop_assert_eq!(Ordering::Equal, compare(&a, &format!("{}+{}", a, meta)));
    }

    #[test]
    fn decomposition_round_trips(a in versionish()) {
        let bare = a.split('+').next().unwrap_or("");
        prop_assert_eq!(bare, decompose(&a).to_string());
    }

    #[test]
    fn runs_are_maximal_and_non_empty(a in versionish()) {
        let components = decompose(&a).0;
        let leads_with_digit = |c: &flexver::Component| {
            c.text().chars().next().is_some_and(|c| c.is_ascii_digit())
        };

        for c in &components {
            prop_assert!(!c.text().is_empty());
        }

        for pair in components.windows(2) {
            prop_assert_ne!(
                leads_with_digit(&pair[0]),
                leads_with_digit(&pair[1]),
                "adjacent runs share a class in {:?}",
                a
            );
        }
    }

    #[test]
    fn leading_zeroes_do_not_matter(n in "[0-9]{1,20}", zeroes in 0usize..4) {
        let padded = format!("{}{}", "0".repeat(zeroes), n);
        prop_assert_eq!(Ordering::Equal, compare(&n, &padded));
    }

    #[test]
    fn usable_as_a_sort_key(mut versions in prop::collection::vec(versionish(), 0..16)) {
        // `sort_by` aborts on comparators that violate total ordering, so
        // merely finishing is half the property.
        versions.sort_by(|a, b| compare(a, b));

        for pair in versions.windows(2) {
            prop_assert_ne!(Ordering::Greater, compare(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn wrapper_agrees_with_compare(a in versionish(), b in versionish()) {
        prop_assert_eq!(compare(&a, &b), FlexVer::new(&a).cmp(&FlexVer::new(&b)));
    }
}
