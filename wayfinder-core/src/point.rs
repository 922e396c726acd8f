//! Geographic coordinates and the ordered point sets built from them.

use geo::Coord;

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not validated; callers are expected to supply coordinates
/// within world bounds.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::Coordinate;
///
/// let london = Coordinate::new(51.5, -0.12);
/// let coord: Coord<f64> = london.into();
/// assert_eq!(coord, Coord { x: -0.12, y: 51.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

/// An ordered, append-only sequence of coordinates.
///
/// Insertion order defines the path: consecutive points are the legs summed
/// by [`path_length_km`](crate::path_length_km).
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, PointSet};
///
/// let mut points = PointSet::new();
/// points.push(Coordinate::new(0.0, 0.0));
/// points.push(Coordinate::new(0.0, 1.0));
/// assert_eq!(points.len(), 2);
///
/// points.clear();
/// assert!(points.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSet {
    points: Vec<Coordinate>,
}

impl PointSet {
    /// Create an empty point set.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a coordinate to the end of the path.
    pub fn push(&mut self, coordinate: Coordinate) {
        self.points.push(coordinate);
    }

    /// Remove every coordinate.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of collected points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Report whether no points have been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.points.iter()
    }
}

impl From<Vec<Coordinate>> for PointSet {
    fn from(points: Vec<Coordinate>) -> Self {
        Self { points }
    }
}

impl FromIterator<Coordinate> for PointSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl AsRef<[Coordinate]> for PointSet {
    fn as_ref(&self) -> &[Coordinate] {
        &self.points
    }
}
