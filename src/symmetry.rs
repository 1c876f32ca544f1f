//! Left/right mirror symmetrization of a polar table.
//!
//! Angles mirror across the 0°/180° axis (`a → (360 − a) mod 360`).
//! Each angle's radius becomes the average of itself and its mirror;
//! angles without a mirror get one synthesized at the same radius.

use std::collections::BTreeMap;

use crate::polar::{normalize_angle, PolarPair};

/// Mirror angle across the 0°/180° axis.
pub fn mirror_angle(angle: u16) -> u16 {
    normalize_angle(360 - i64::from(angle))
}

/// Enforce mirror symmetry on a polar table.
///
/// Output is sorted by ascending angle (so 0° comes first) and holds
/// at most one pair per angle. Averaged radii round half to even.
pub fn symmetrize(pairs: &[PolarPair]) -> Vec<PolarPair> {
    let radii = mean_radius_by_angle(pairs);

    // Every average reads from `radii`, never from `result`, so a pair
    // is combined exactly once regardless of iteration order.
    let mut result: BTreeMap<u16, f64> = BTreeMap::new();
    for (&angle, &radius) in &radii {
        let mirror = mirror_angle(angle);
        match radii.get(&mirror) {
            Some(&mirrored) => {
                result.insert(angle, (radius + mirrored) / 2.0);
            }
            None => {
                result.insert(angle, radius);
                result.insert(mirror, radius);
            }
        }
    }

    log::debug!(
        "  Symmetrize  {} pairs \u{2192} {} angles \u{2192} {} pairs",
        pairs.len(),
        radii.len(),
        result.len()
    );

    result
        .into_iter()
        .map(|(angle, radius)| PolarPair::new(angle, radius.round_ties_even() as u32))
        .collect()
}

/// Group radii by angle, averaging where an angle repeats.
fn mean_radius_by_angle(pairs: &[PolarPair]) -> BTreeMap<u16, f64> {
    let mut sums: BTreeMap<u16, (f64, usize)> = BTreeMap::new();
    for pair in pairs {
        let entry = sums.entry(normalize_angle(i64::from(pair.angle))).or_insert((0.0, 0));
        entry.0 += f64::from(pair.radius);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(angle, (sum, count))| (angle, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius_at(pairs: &[PolarPair], angle: u16) -> Option<u32> {
        pairs.iter().find(|p| p.angle == angle).map(|p| p.radius)
    }

    fn assert_symmetric(pairs: &[PolarPair]) {
        for p in pairs {
            assert_eq!(
                radius_at(pairs, mirror_angle(p.angle)),
                Some(p.radius),
                "angle {} has no matching mirror",
                p.angle
            );
        }
    }

    #[test]
    fn mirrors() {
        assert_eq!(mirror_angle(0), 0);
        assert_eq!(mirror_angle(30), 330);
        assert_eq!(mirror_angle(180), 180);
        assert_eq!(mirror_angle(359), 1);
    }

    #[test]
    fn lone_point_gets_mirror() {
        let sym = symmetrize(&[PolarPair::new(30, 10)]);
        assert_eq!(sym, vec![PolarPair::new(30, 10), PolarPair::new(330, 10)]);
    }

    #[test]
    fn mirror_pair_is_averaged() {
        let sym = symmetrize(&[PolarPair::new(330, 20), PolarPair::new(30, 10)]);
        assert_eq!(sym, vec![PolarPair::new(30, 15), PolarPair::new(330, 15)]);
    }

    #[test]
    fn half_averages_round_to_even() {
        let sym = symmetrize(&[PolarPair::new(30, 10), PolarPair::new(330, 11)]);
        assert_eq!(sym, vec![PolarPair::new(30, 10), PolarPair::new(330, 10)]);

        let sym = symmetrize(&[PolarPair::new(60, 11), PolarPair::new(300, 12)]);
        assert_eq!(sym, vec![PolarPair::new(60, 12), PolarPair::new(300, 12)]);
    }

    #[test]
    fn duplicate_angles_are_averaged_first() {
        let sym = symmetrize(&[
            PolarPair::new(90, 10),
            PolarPair::new(90, 20),
            PolarPair::new(270, 15),
        ]);
        assert_eq!(sym, vec![PolarPair::new(90, 15), PolarPair::new(270, 15)]);
    }

    #[test]
    fn zero_angle_sorts_first() {
        let sym = symmetrize(&[
            PolarPair::new(200, 8),
            PolarPair::new(0, 30),
            PolarPair::new(120, 12),
        ]);
        assert_eq!(sym[0], PolarPair::new(0, 30));
        assert!(sym.windows(2).all(|w| w[0].angle < w[1].angle));
        assert_symmetric(&sym);
    }

    #[test]
    fn result_is_symmetric() {
        let pairs = vec![
            PolarPair::new(0, 40),
            PolarPair::new(45, 17),
            PolarPair::new(100, 22),
            PolarPair::new(180, 9),
            PolarPair::new(260, 25),
            PolarPair::new(315, 11),
            PolarPair::new(350, 31),
        ];
        assert_symmetric(&symmetrize(&pairs));
    }

    #[test]
    fn symmetric_table_is_a_fixed_point() {
        let pairs = vec![
            PolarPair::new(0, 40),
            PolarPair::new(45, 17),
            PolarPair::new(100, 22),
            PolarPair::new(201, 13),
        ];
        let once = symmetrize(&pairs);
        assert_eq!(symmetrize(&once), once);
    }

    #[test]
    fn empty_table() {
        assert!(symmetrize(&[]).is_empty());
    }
}
