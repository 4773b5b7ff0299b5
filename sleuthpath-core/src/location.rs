use std::borrow::Borrow;
use std::fmt;

/// Identifier of a room or area in the case graph.
///
/// Locations compare and hash like their string label, so maps keyed by
/// `Location` can be queried with a plain `&str`.
///
/// # Examples
/// ```
/// use sleuthpath_core::Location;
///
/// let loc = Location::new("S-1");
/// assert_eq!(loc.as_str(), "S-1");
/// assert_eq!(loc.to_string(), "S-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Location(String);

impl Location {
    /// Construct a location from its label.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn maps_can_be_queried_by_str() {
        let map = HashMap::from([(Location::new("C0"), 3_u32)]);
        assert_eq!(map.get("C0"), Some(&3));
    }
}
