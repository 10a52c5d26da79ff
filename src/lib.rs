//! A library for comparing free-form software version numbers.
//!
//! Plenty of software is versioned by no standard at all: Minecraft ships
//! snapshots like `18w40b`, mods tack platform tags onto `1.4.5_01`, and
//! half the ecosystem almost-but-not-quite follows [SemVer][semver]. This
//! library compares *any* pair of version strings the way a person would,
//! instead of rejecting whatever fails to parse. There is no parse step to
//! fail: every string is a version, and every pair of versions has a
//! defined, commutative ordering.
//!
//! # Usage
//!
//! For one-off comparisons or a sort key, [`compare`] is the whole API:
//!
//! ```
//! use flexver::compare;
//! use std::cmp::Ordering;
//!
//! // Versions of wildly different shapes still order sensibly.
//! assert_eq!(Ordering::Less, compare("13w02a", "c0.3.0_01"));
//! assert_eq!(Ordering::Less, compare("0.17.1-beta.1", "0.17.1"));
//! assert_eq!(Ordering::Equal, compare("1.4.5_01", "1.4.5_01+fabric-1.17"));
//!
//! // Sorting needs nothing more.
//! let mut versions = vec!["1.0.0", "18w40b", "0.17.1-beta.1", "1.4.5_01"];
//! versions.sort_by(|a, b| compare(a, b));
//! assert_eq!(vec!["0.17.1-beta.1", "1.0.0", "1.4.5_01", "18w40b"], versions);
//! ```
//!
//! To keep versions in ordered collections, [`FlexVer`] wraps a string
//! with the comparator as its `Ord`:
//!
//! ```
//! use flexver::FlexVer;
//!
//! let newest = ["1.7.10", "1.8", "1.8.9"].into_iter().map(FlexVer::new).max();
//! assert_eq!(Some(FlexVer::new("1.8.9")), newest);
//! ```
//!
//! # How it works
//!
//! A version string is [decomposed][decompose] into maximal runs of
//! digits and non-digits. Digit runs compare by magnitude, as text, with
//! no width limit, so `36893488147419103232` (that's 2⁶⁵) is handled as
//! easily as `3`. Non-digit runs compare by code point, except that a run
//! like `-beta` (a `-` followed by at least one more character) marks a
//! SemVer-style prerelease and sorts *before* the version that stops
//! without it. Everything from the first `+` is build metadata and is
//! ignored entirely.
//!
//! Mismatched shapes never error; the affected slots degrade to plain
//! text comparison. Garbage in, garbage out, but stable and commutative
//! garbage.
//!
//! # Features
//!
//! Serialization support for the component types (and a raw-string
//! representation for [`FlexVer`]) can be enabled with the `serde`
//! feature.
//!
//! [semver]: https://semver.org

#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/flexver/1.0.0")]

mod component;
mod parsers;
mod version;

pub use component::{Component, Components};
pub use version::FlexVer;

use std::cmp::Ordering;

/// Compare two free-form version strings.
///
/// Both inputs are [decomposed][decompose] and their components compared
/// slot by slot, the first unequal slot deciding the result. A missing
/// slot loses to a present one, unless the present component is a
/// prerelease marker, which puts `1.0.0-beta` before `1.0.0` while `1.0`
/// stays before `1.0.1`.
///
/// This is a total function: there is nothing to validate, and
/// `compare(a, b)` is always the exact inverse of `compare(b, a)`.
///
/// ```
/// use flexver::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(Ordering::Less, compare("1.4.5_01", "1.16.5"));
/// assert_eq!(Ordering::Greater, compare("1.0.1", "1.0.0_01"));
/// assert_eq!(Ordering::Equal, compare("1.16.5+forge", "1.16.5"));
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    decompose(a).cmp_flex(&decompose(b))
}

/// Decompose a version string into its ordered [`Component`]s.
///
/// Everything from the first `+` onward is build metadata and is dropped
/// before splitting; it never takes part in comparison. The rest of the
/// string is split into maximal runs of digits and non-digits, by code
/// point.
///
/// Mostly useful for diagnostics and for inspecting how a comparison was
/// decided:
///
/// ```
/// use flexver::decompose;
///
/// let parts = decompose("1.8_pre1+build.7");
/// let texts: Vec<&str> = parts.0.iter().map(|c| c.text()).collect();
/// assert_eq!(vec!["1", ".", "8", "_pre", "1"], texts);
/// ```
pub fn decompose(s: &str) -> Components {
    let bare = match s.find('+') {
        Some(plus) => &s[..plus],
        None => s,
    };

    match parsers::components(bare) {
        Ok((_, cs)) => Components(cs),
        // The run tokenizer accepts any input, so this arm is never taken.
        Err(_) => Components(Vec::new()),
    }
}
