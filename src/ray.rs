use crate::*;

/// Distance a secondary ray is pushed along its own direction before it is
/// cast, so it does not hit the surface it leaves.
pub const BIAS: f32 = 1e-3;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    /// `dir` is expected to be normalized already.
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    /// Secondary ray leaving a surface point, offset by [`BIAS`].
    pub fn biased(from: &P3, dir: V3) -> Self {
        Ray::new(from + dir * BIAS, dir)
    }

    pub fn at(&self, dist: f32) -> P3 {
        self.origin + self.dir * dist
    }
}

/// Mirror direction of `dir` about the unit normal `n`.
pub fn reflect(dir: &V3, n: &V3) -> V3 {
    (dir - 2.0 * dir.dot(n) * n).normalize()
}
