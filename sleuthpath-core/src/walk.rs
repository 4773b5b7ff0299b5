//! Walks through the case graph.
//!
//! A walk is an ordered list of locations, starting at the origin, together
//! with the travel time it consumes.

use crate::{Location, Minutes};

/// An ordered sequence of locations with its total travel time.
///
/// Consecutive locations are joined by their table distance; a location may
/// appear more than once.
///
/// # Examples
/// ```
/// use sleuthpath_core::{Location, Walk};
///
/// let walk = Walk::new(vec![Location::new("C0"), Location::new("S-1")], 3);
/// assert_eq!(walk.origin().map(Location::as_str), Some("C0"));
/// assert_eq!(walk.total_minutes(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walk {
    locations: Vec<Location>,
    total_minutes: Minutes,
}

impl Walk {
    /// Construct a walk from its stops and total travel time.
    #[must_use]
    pub const fn new(locations: Vec<Location>, total_minutes: Minutes) -> Self {
        Self {
            locations,
            total_minutes,
        }
    }

    /// A walk that stays at `origin`.
    ///
    /// # Examples
    /// ```
    /// use sleuthpath_core::{Location, Walk};
    ///
    /// let walk = Walk::stay(Location::new("C0"));
    /// assert_eq!(walk.locations(), [Location::new("C0")]);
    /// assert_eq!(walk.total_minutes(), 0);
    /// ```
    #[must_use]
    pub fn stay(origin: Location) -> Self {
        Self::new(vec![origin], 0)
    }

    /// Locations in visiting order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Travel time consumed by the walk.
    #[must_use]
    pub const fn total_minutes(&self) -> Minutes {
        self.total_minutes
    }

    /// First location of the walk.
    #[must_use]
    pub fn origin(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Number of stops, counting the origin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the walk has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl std::fmt::Display for Walk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, location) in self.locations.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{location}")?;
        }
        Ok(())
    }
}
