//! Shared geometry utilities.

use kurbo::Point;

use crate::error::PolarError;

/// Centroid (mean of all points) of a point set.
///
/// The mean of an empty set is undefined, so that case is an error
/// rather than a silent origin.
pub fn centroid(points: &[Point]) -> Result<Point, PolarError> {
    if points.is_empty() {
        return Err(PolarError::NoPoints);
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Ok(Point::new(sum_x / n, sum_y / n))
}
