//! An owned version string with intuitive ordering baked in.

use crate::component::{Component, Components};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An owned version string that knows how to order itself.
///
/// Any string at all is a legal version, so construction never fails and
/// the original text is kept untouched. The payoff is that sorted
/// collections and the `Ord` conveniences just work:
///
/// ```
/// use flexver::FlexVer;
///
/// let mut versions = vec![
///     FlexVer::new("1.16.5+forge"),
///     FlexVer::new("18w40b"),
///     FlexVer::new("0.17.1-beta.1"),
/// ];
/// versions.sort();
///
/// assert_eq!("0.17.1-beta.1", versions[0].to_string());
/// ```
///
/// Equality follows the comparator, not the text: versions that differ
/// only in build metadata or in leading zeroes are equal, and hash alike.
///
/// ```
/// use flexver::FlexVer;
///
/// assert_eq!(FlexVer::new("1.4.5_01"), FlexVer::new("1.4.5_01+fabric-1.17"));
/// assert_eq!(FlexVer::new("1.07"), FlexVer::new("1.7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlexVer {
    /// The version string exactly as given, build metadata and all.
    pub raw: String,
}

impl FlexVer {
    /// Wrap a version string.
    pub fn new(s: &str) -> FlexVer {
        FlexVer { raw: s.to_string() }
    }

    /// The decomposition of this version.
    ///
    /// ```
    /// use flexver::FlexVer;
    ///
    /// let v = FlexVer::new("18w40b");
    /// assert_eq!(4, v.decompose().0.len());
    /// ```
    pub fn decompose(&self) -> Components {
        crate::decompose(&self.raw)
    }
}

/// Versions that compare equal must hash equal, and comparison ignores
/// build metadata and leading zeroes. Hashing therefore runs over the
/// decomposition, with each digit run reduced to its significant digits.
impl Hash for FlexVer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.decompose().0 {
            match component {
                Component::Numeric(n) => n.trim_start_matches('0').hash(state),
                c => c.text().hash(state),
            }
        }
    }
}

impl PartialEq for FlexVer {
    fn eq(&self, other: &Self) -> bool {
        crate::compare(&self.raw, &other.raw) == Ordering::Equal
    }
}

impl Eq for FlexVer {}

impl PartialOrd for FlexVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FlexVer {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::compare(&self.raw, &other.raw)
    }
}

impl std::fmt::Display for FlexVer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for FlexVer {
    fn from(s: &str) -> FlexVer {
        FlexVer::new(s)
    }
}

impl From<String> for FlexVer {
    fn from(raw: String) -> FlexVer {
        FlexVer { raw }
    }
}

impl FromStr for FlexVer {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FlexVer::new(s))
    }
}

#[cfg(feature = "serde")]
impl Serialize for FlexVer {
    /// Serializes as the raw version string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for FlexVer {
    /// Deserializes from a raw version string.
    fn deserialize<D>(deserializer: D) -> Result<FlexVer, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FlexVer { raw })
    }
}
