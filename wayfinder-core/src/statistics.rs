//! Geometric summary statistics of a point set.
//!
//! The statistics are deliberately coarse: they feed a demo heuristic, not a
//! routing engine.

use geo::{BoundingRect, Coord, MultiPoint, Point};

use crate::{Coordinate, PointSet};

/// Guard added to the spread before dividing, so coincident points do not
/// divide by zero.
pub const DENSITY_EPSILON: f64 = 0.0001;

/// Count, spread and density derived from a point set.
///
/// `spread` is the latitude range plus the longitude range of the points'
/// bounding rectangle, and `density` is `count / (spread + DENSITY_EPSILON)`.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, GraphStatistics};
///
/// let points = [Coordinate::new(0.0, 0.0), Coordinate::new(0.5, 0.25)];
/// let stats = GraphStatistics::from_points(&points).expect("non-empty input");
/// assert_eq!(stats.count, 2);
/// assert!((stats.spread - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStatistics {
    /// Number of points.
    pub count: usize,
    /// Latitude range plus longitude range, in degrees.
    pub spread: f64,
    /// Points per degree of spread.
    pub density: f64,
}

impl GraphStatistics {
    /// Derive statistics from an ordered slice of coordinates.
    ///
    /// Returns `None` for an empty slice, where the extrema are undefined.
    #[must_use]
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let rect = to_multi_point(points).bounding_rect()?;
        Some(Self::from_parts(points.len(), rect.height() + rect.width()))
    }

    /// Build statistics from a point count and a precomputed spread.
    ///
    /// Useful for exercising the scorer without materialising points.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "density divides the point count by the epsilon-guarded spread"
    )]
    #[must_use]
    pub fn from_parts(count: usize, spread: f64) -> Self {
        let density = count as f64 / (spread + DENSITY_EPSILON);
        Self {
            count,
            spread,
            density,
        }
    }
}

pub(crate) fn to_multi_point(points: &[Coordinate]) -> MultiPoint<f64> {
    points
        .iter()
        .map(|&coordinate| Point::from(Coord::from(coordinate)))
        .collect()
}

impl PointSet {
    /// Derive [`GraphStatistics`] for the current points.
    #[must_use]
    pub fn statistics(&self) -> Option<GraphStatistics> {
        GraphStatistics::from_points(self.as_slice())
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point statistics"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn empty_input_has_no_statistics() {
        assert_eq!(GraphStatistics::from_points(&[]), None);
    }

    #[rstest]
    fn single_point_uses_epsilon_guard() {
        let stats =
            GraphStatistics::from_points(&[Coordinate::new(10.0, 10.0)]).expect("one point");
        assert_eq!(stats.count, 1);
        assert!(stats.spread.abs() < TOLERANCE);
        assert!((stats.density - 10_000.0).abs() < 1e-6);
    }

    #[rstest]
    fn duplicate_points_have_zero_spread() {
        let point = Coordinate::new(-33.9, 151.2);
        let stats = GraphStatistics::from_points(&[point, point, point]).expect("three points");
        assert!(stats.spread.abs() < TOLERANCE);
        assert!(stats.density.is_finite());
    }

    #[rstest]
    #[case(&[(0.0, 0.0), (1.0, 2.0)], 3.0)]
    #[case(&[(0.0, 0.0), (-1.0, 0.5), (0.5, -0.5)], 2.5)]
    #[case(&[(45.0, 7.0), (45.0, 7.2)], 0.2)]
    fn spread_sums_latitude_and_longitude_ranges(
        #[case] raw: &[(f64, f64)],
        #[case] expected: f64,
    ) {
        let points: Vec<Coordinate> = raw
            .iter()
            .map(|&(lat, lng)| Coordinate::new(lat, lng))
            .collect();
        let stats = GraphStatistics::from_points(&points).expect("non-empty");
        assert!((stats.spread - expected).abs() < TOLERANCE);
        assert_eq!(stats.count, points.len());
    }

    #[rstest]
    fn multi_point_keeps_longitude_as_x() {
        let multi = to_multi_point(&[Coordinate::new(10.0, 20.0), Coordinate::new(-5.0, 1.0)]);
        let xy: Vec<(f64, f64)> = multi.iter().map(|point| (point.x(), point.y())).collect();
        assert_eq!(xy, vec![(20.0, 10.0), (1.0, -5.0)]);
    }

    #[rstest]
    fn density_divides_count_by_guarded_spread() {
        let stats = GraphStatistics::from_parts(4, 0.9999);
        assert!((stats.density - 4.0).abs() < TOLERANCE);
    }
}
