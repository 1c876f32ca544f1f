//! Polar reduction: source-space points → (angle, radius) pairs.

use kurbo::{Point, Vec2};

/// One vertex of the polar table, relative to the centroid.
///
/// Both fields round to nearest with ties to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolarPair {
    /// Whole degrees in `[0, 360)`, counter-clockwise from +x with y up.
    pub angle: u16,
    /// Distance from the centroid, rounded to whole units.
    pub radius: u32,
}

impl PolarPair {
    pub fn new(angle: u16, radius: u32) -> Self {
        Self { angle, radius }
    }

    /// Polar pair for an offset already expressed in y-up space.
    fn from_offset(v: Vec2) -> Self {
        let mut degrees = v.y.atan2(v.x).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        Self {
            angle: normalize_angle(degrees.round_ties_even() as i64),
            radius: v.hypot().round_ties_even() as u32,
        }
    }
}

/// Reduce any integer angle into `[0, 360)`.
pub fn normalize_angle(angle: i64) -> u16 {
    angle.rem_euclid(360) as u16
}

/// Convert points to polar pairs around `center`.
///
/// Points are taken at a uniform stride so roughly `max_points` survive,
/// scaled by `scale`, and flipped from y-down source space to y-up.
/// Consecutive identical pairs collapse into one, and the result is
/// capped at `max_points`.
pub fn reduce(points: &[Point], center: Point, scale: f64, max_points: usize) -> Vec<PolarPair> {
    if points.is_empty() || max_points == 0 {
        return Vec::new();
    }
    let stride = (points.len() / max_points).max(1);

    let mut pairs: Vec<PolarPair> = Vec::with_capacity(max_points);
    for p in points.iter().step_by(stride) {
        let offset = Vec2::new((p.x - center.x) * scale, (center.y - p.y) * scale);
        let pair = PolarPair::from_offset(offset);
        if pairs.last() != Some(&pair) {
            pairs.push(pair);
        }
    }
    pairs.truncate(max_points);
    log::debug!(
        "  Reduce      {} points, stride {} \u{2192} {} pairs",
        points.len(),
        stride,
        pairs.len()
    );
    pairs
}

/// Rotate every angle so the largest-radius pair lands on angle 0.
///
/// Ties go to the earliest pair. Radii and order are unchanged.
pub fn align_tip(pairs: &[PolarPair]) -> Vec<PolarPair> {
    let mut tip: Option<&PolarPair> = None;
    for pair in pairs {
        if tip.map_or(true, |t| pair.radius > t.radius) {
            tip = Some(pair);
        }
    }
    let Some(tip) = tip else {
        return Vec::new();
    };
    let rotation = i64::from(tip.angle);
    pairs
        .iter()
        .map(|p| PolarPair::new(normalize_angle(i64::from(p.angle) - rotation), p.radius))
        .collect()
}
