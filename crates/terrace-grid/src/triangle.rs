use glam::Vec3;

/// One triangle of a base mesh with its per-vertex height stored in `y`.
///
/// Built on the fly from base-mesh indices plus sampled heights and consumed
/// immediately by the terracing pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceTriangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl SourceTriangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Lowest vertex height.
    #[inline]
    pub fn min_height(&self) -> f32 {
        self.a.y.min(self.b.y).min(self.c.y)
    }

    /// Highest vertex height.
    #[inline]
    pub fn max_height(&self) -> f32 {
        self.a.y.max(self.b.y).max(self.c.y)
    }

    /// Whether every coordinate of every vertex is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}
