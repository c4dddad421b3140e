//! Classification of a triangle against one terrace level.

use glam::{Vec2, Vec3};

/// How a triangle's vertices sit relative to a horizontal plane.
///
/// A vertex is "below" when its height is strictly less than the level, so
/// a vertex exactly on the plane counts as above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandCase {
    AllBelow,
    /// Exactly one vertex above; it ends up in the `v2` slot.
    SingleAbove,
    /// Exactly two vertices above; the lone vertex below ends up in `v2`.
    DoubleAbove,
    AllAbove,
}

impl BandCase {
    /// Triangles emitted for one slice of this case.
    pub const fn triangle_count(self) -> u32 {
        match self {
            BandCase::AllBelow | BandCase::AllAbove => 1,
            BandCase::SingleAbove => 3,
            BandCase::DoubleAbove => 4,
        }
    }

    /// Whether the slice is a single flat tread with no riser.
    pub const fn is_flat(self) -> bool {
        matches!(self, BandCase::AllBelow | BandCase::AllAbove)
    }
}

/// Classify `(a, b, c)` against `level` and reorder the vertices so the
/// odd one out sits in the middle slot.
///
/// Single-above rows are rotations and keep the source winding.
/// Double-above rows are swaps and reverse it; the double-above tread
/// `(v0_u_t, v0_u, v2_u)` is wound the other way round to compensate, so
/// emitted treads still face the same way as the triangle they came from.
pub fn classify(a: Vec3, b: Vec3, c: Vec3, level: i32) -> (BandCase, [Vec3; 3]) {
    let plane = level as f32;
    let below = (a.y < plane, b.y < plane, c.y < plane);

    match below {
        (true, true, true) => (BandCase::AllBelow, [a, b, c]),
        (true, true, false) => (BandCase::SingleAbove, [b, c, a]),
        (true, false, true) => (BandCase::SingleAbove, [a, b, c]),
        (true, false, false) => (BandCase::DoubleAbove, [b, a, c]),
        (false, true, true) => (BandCase::SingleAbove, [c, a, b]),
        (false, true, false) => (BandCase::DoubleAbove, [c, b, a]),
        (false, false, true) => (BandCase::DoubleAbove, [a, c, b]),
        (false, false, false) => (BandCase::AllAbove, [a, b, c]),
    }
}

/// Texture coordinates shared by every triangle of one band.
///
/// The atlas is split into `max_height` horizontal strips; band `i` maps to
/// strip `i`, leaving a 5% gap at the top of each strip to avoid bleeding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandUv {
    pub uv00: Vec2,
    pub uv01: Vec2,
    pub uv11: Vec2,
}

impl BandUv {
    pub fn new(level: i32, max_height: u32) -> Self {
        let strip = 1.0 / max_height as f32;
        let bottom = strip * level as f32;
        let top = bottom + 0.95 * strip;
        Self {
            uv00: Vec2::new(0.0, bottom),
            uv01: Vec2::new(0.0, top),
            uv11: Vec2::new(1.0, top),
        }
    }

    /// UVs for the three corners of an emitted triangle.
    pub fn corners(&self) -> [Vec2; 3] {
        [self.uv00, self.uv01, self.uv11]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(y: f32) -> Vec3 {
        Vec3::new(0.0, y, 0.0)
    }

    #[test]
    fn test_every_configuration_matches_table() {
        // (a, b, c) heights for each row of the truth table at level 1.
        let cases = [
            ((0.0, 0.0, 0.0), BandCase::AllBelow, [0, 1, 2]),
            ((0.0, 0.0, 2.0), BandCase::SingleAbove, [1, 2, 0]),
            ((0.0, 2.0, 0.0), BandCase::SingleAbove, [0, 1, 2]),
            ((0.0, 2.0, 2.0), BandCase::DoubleAbove, [1, 0, 2]),
            ((2.0, 0.0, 0.0), BandCase::SingleAbove, [2, 0, 1]),
            ((2.0, 0.0, 2.0), BandCase::DoubleAbove, [2, 1, 0]),
            ((2.0, 2.0, 0.0), BandCase::DoubleAbove, [0, 2, 1]),
            ((2.0, 2.0, 2.0), BandCase::AllAbove, [0, 1, 2]),
        ];

        for ((ha, hb, hc), expected_case, order) in cases {
            // Distinct x so the reordering is observable.
            let src = [
                Vec3::new(0.0, ha, 0.0),
                Vec3::new(1.0, hb, 0.0),
                Vec3::new(2.0, hc, 0.0),
            ];
            let (case, out) = classify(src[0], src[1], src[2], 1);
            assert_eq!(case, expected_case, "heights ({ha}, {hb}, {hc})");
            assert_eq!(out, order.map(|i| src[i]), "heights ({ha}, {hb}, {hc})");
        }
    }

    #[test]
    fn test_middle_slot_is_the_odd_vertex() {
        let (case, [v1, v2, v3]) = classify(v(0.2), v(3.0), v(0.7), 1);
        assert_eq!(case, BandCase::SingleAbove);
        assert!(v2.y >= 1.0 && v1.y < 1.0 && v3.y < 1.0);

        let (case, [v1, v2, v3]) = classify(v(1.5), v(0.9), v(4.0), 1);
        assert_eq!(case, BandCase::DoubleAbove);
        assert!(v2.y < 1.0 && v1.y >= 1.0 && v3.y >= 1.0);
    }

    #[test]
    fn test_reorder_parity() {
        // Signed area in the XZ plane; the sign tracks winding.
        fn winding([p, q, r]: [Vec3; 3]) -> f32 {
            (q.x - p.x) * (r.z - p.z) - (r.x - p.x) * (q.z - p.z)
        }

        let heights = [
            (0.0, 0.0, 2.0),
            (0.0, 2.0, 0.0),
            (2.0, 0.0, 0.0),
            (0.0, 2.0, 2.0),
            (2.0, 0.0, 2.0),
            (2.0, 2.0, 0.0),
        ];
        for (ha, hb, hc) in heights {
            let src = [
                Vec3::new(0.0, ha, 0.0),
                Vec3::new(1.0, hb, 0.0),
                Vec3::new(0.0, hc, 1.0),
            ];
            let (case, out) = classify(src[0], src[1], src[2], 1);
            let same = winding(out).signum() == winding(src).signum();
            match case {
                BandCase::SingleAbove => assert!(same, "rotation flipped ({ha}, {hb}, {hc})"),
                BandCase::DoubleAbove => assert!(!same, "swap kept winding ({ha}, {hb}, {hc})"),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_height_on_plane_counts_as_above() {
        let (case, _) = classify(v(1.0), v(1.0), v(1.0), 1);
        assert_eq!(case, BandCase::AllAbove);

        let (case, [_, v2, _]) = classify(v(0.0), v(1.0), v(0.0), 1);
        assert_eq!(case, BandCase::SingleAbove);
        assert_eq!(v2.y, 1.0);
    }

    #[test]
    fn test_negative_levels() {
        let (case, _) = classify(v(-2.5), v(-1.0), v(-3.0), -2);
        assert_eq!(case, BandCase::DoubleAbove);
    }

    #[test]
    fn test_triangle_counts() {
        let counts: Vec<u32> = [
            BandCase::AllBelow,
            BandCase::SingleAbove,
            BandCase::DoubleAbove,
            BandCase::AllAbove,
        ]
        .iter()
        .map(|c| c.triangle_count())
        .collect();
        assert_eq!(counts, vec![1, 3, 4, 1]);
        assert!(BandCase::AllAbove.is_flat());
        assert!(!BandCase::DoubleAbove.is_flat());
    }

    #[test]
    fn test_band_uv_strips() {
        let uv = BandUv::new(2, 4);
        assert_eq!(uv.uv00, Vec2::new(0.0, 0.5));
        assert!((uv.uv01.y - (0.5 + 0.95 * 0.25)).abs() < 1e-6);
        assert_eq!(uv.uv01.x, 0.0);
        assert_eq!(uv.uv11, Vec2::new(1.0, uv.uv01.y));
        assert_eq!(uv.corners(), [uv.uv00, uv.uv01, uv.uv11]);
    }

    #[test]
    fn test_band_uv_stays_inside_its_strip() {
        let max_height = 8;
        for level in 0..max_height as i32 {
            let uv = BandUv::new(level, max_height);
            let next = BandUv::new(level + 1, max_height);
            assert!(uv.uv01.y < next.uv00.y);
        }
    }
}
