//! Great-circle path length.

use crate::Coordinate;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, haversine_km};
///
/// let km = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((km - 111.19).abs() < 0.1);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlng = (dlng / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Total length of the path through `points` in insertion order.
///
/// Fewer than two points yield `0.0`.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, path_length_km};
///
/// assert_eq!(path_length_km(&[Coordinate::new(1.0, 1.0)]), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "legs are summed as kilometres")]
#[must_use]
pub fn path_length_km(points: &[Coordinate]) -> f64 {
    // Fold from positive zero; `Sum` for floats starts at `-0.0`.
    points
        .iter()
        .zip(points.iter().skip(1))
        .map(|(&from, &to)| haversine_km(from, to))
        .fold(0.0, |total, leg| total + leg)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point distances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn one_degree_of_longitude_at_the_equator() {
        let km = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((km - 111.19).abs() < 0.1, "got {km}");
    }

    #[rstest]
    fn london_to_paris() {
        let km = haversine_km(Coordinate::new(51.5, -0.12), Coordinate::new(48.85, 2.35));
        assert!((343.0..=344.0).contains(&km), "got {km}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coordinate::new(40.7, -74.0);
        let b = Coordinate::new(34.05, -118.25);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[(12.0, 34.0)])]
    #[case(&[(12.0, 34.0), (12.0, 34.0)])]
    fn degenerate_paths_have_zero_length(#[case] raw: &[(f64, f64)]) {
        let points: Vec<Coordinate> = raw
            .iter()
            .map(|&(lat, lng)| Coordinate::new(lat, lng))
            .collect();
        assert_eq!(path_length_km(&points), 0.0);
    }

    #[rstest]
    fn path_sums_consecutive_legs_only() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 0.0),
        ];
        let leg = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((path_length_km(&points) - 2.0 * leg).abs() < 1e-9);
    }
}
