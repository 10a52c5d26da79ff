//! The atomic pieces of a decomposed version string.

use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};

use itertools::EitherOrBoth::{Both, Left, Right};
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One maximal run of same-class characters from a version string.
///
/// A version string is split wherever its characters flip between decimal
/// digits and everything else, so `1.4.5_01` becomes `1`, `.`, `4`, `.`,
/// `5`, `_`, `01`. Every variant carries its run's text verbatim; in
/// particular a digit run of any length survives untouched, no matter how
/// far past the range of a machine integer it reaches.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Component {
    /// A run of decimal digits, compared by magnitude.
    Numeric(String),
    /// A non-digit run of at least two characters that starts with `-`,
    /// marking a SemVer-style prerelease tag. Unlike every other component,
    /// a `Prerelease` sorts *below* having no component at all, which is
    /// what puts `1.0.0-beta` before `1.0.0`.
    Prerelease(String),
    /// Any other non-digit run, a lone `-` included. Compared as plain text
    /// by code point.
    Literal(String),
}

impl Component {
    /// Classify a non-digit run.
    pub(crate) fn textual(run: &str) -> Component {
        if run.len() > 1 && run.starts_with('-') {
            Component::Prerelease(run.to_string())
        } else {
            Component::Literal(run.to_string())
        }
    }

    /// The text of the run this component was made from, verbatim.
    ///
    /// ```
    /// use flexver::Component;
    ///
    /// assert_eq!("007", Component::Numeric("007".to_string()).text());
    /// ```
    pub fn text(&self) -> &str {
        match self {
            Component::Numeric(s) => s,
            Component::Prerelease(s) => s,
            Component::Literal(s) => s,
        }
    }

    /// Does this component mark a prerelease?
    pub fn is_prerelease(&self) -> bool {
        matches!(self, Component::Prerelease(_))
    }

    /// Ordering between two components occupying the same slot.
    ///
    /// Two `Numeric`s compare by magnitude. Any other pairing, mismatched
    /// variants included, falls back to code-point comparison of the raw
    /// run texts.
    pub(crate) fn cmp_flex(&self, other: &Component) -> Ordering {
        match (self, other) {
            (Component::Numeric(a), Component::Numeric(b)) => cmp_digit_runs(a, b),
            (a, b) => a.text().cmp(b.text()),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Compare two digit runs as unbounded non-negative integers.
///
/// The runs are never parsed into a fixed-width type. Leading zeroes are
/// skipped, a longer remainder means a larger number, and equally long
/// remainders compare bytewise (digits are ASCII, so bytewise is
/// digitwise).
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    match a.len().cmp(&b.len()) {
        Equal => a.cmp(b),
        ord => ord,
    }
}

/// The ordered decomposition of one version string.
///
/// Writing the components back out reproduces the input, minus any `+`
/// build-metadata suffix:
///
/// ```
/// use flexver::decompose;
///
/// assert_eq!("1.4.5_01", decompose("1.4.5_01+fabric-1.17").to_string());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Components(pub Vec<Component>);

impl Components {
    /// Walk two decompositions in lock step, the first unequal slot
    /// deciding the whole comparison. When one side runs out early its
    /// remaining opponents win, except that a leftover `Prerelease` loses
    /// to nothing at all.
    pub(crate) fn cmp_flex(&self, other: &Components) -> Ordering {
        self.0
            .iter()
            .zip_longest(&other.0)
            .find_map(|eob| match eob {
                Both(a, b) => match a.cmp_flex(b) {
                    Equal => None,
                    ord => Some(ord),
                },
                Left(a) if a.is_prerelease() => Some(Less),
                Left(_) => Some(Greater),
                Right(b) if b.is_prerelease() => Some(Greater),
                Right(_) => Some(Less),
            })
            .unwrap_or(Equal)
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
