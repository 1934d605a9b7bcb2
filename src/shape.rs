use crate::*;

/// Sphere roots at or below this distance are treated as the surface the ray
/// starts on.
pub const HIT_EPSILON: f32 = 1e-4;

/// Below this `|dir . normal|` a ray counts as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

pub trait ShapeImpl {
    /// Distance to the nearest hit along `ray`. `ray.dir` must be normalized.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, pos: &P3) -> V3;

    /// Unit direction from `pos` toward this shape, used when it is lit.
    fn direction_from(&self, pos: &P3) -> V3;

    /// 2D surface coordinates of a point on the shape, for material lookup.
    fn uv(&self, pos: &P3) -> [f32; 2];
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f32,
    }

    impl Sphere {
        pub fn new(center: P3, radius: f32) -> Self {
            Sphere {
                center,
                radius: radius.max(0.0),
            }
        }
    }

    impl ShapeImpl for Sphere {
        fn intersect(&self, ray: &Ray) -> Option<f32> {
            let rel_c = self.center - ray.origin;
            let d_oh = ray.dir.dot(&rel_c);
            let rel_h = ray.dir * d_oh;
            let d_ch_sq = (rel_c - rel_h).norm_squared();
            let r_sq = self.radius * self.radius;
            if d_ch_sq > r_sq {
                None
            } else {
                let l = (r_sq - d_ch_sq).sqrt();
                let tmin = d_oh - l;
                let tmax = d_oh + l;
                if tmin > HIT_EPSILON {
                    Some(tmin)
                } else if tmax > HIT_EPSILON {
                    Some(tmax)
                } else {
                    None
                }
            }
        }

        fn normal_at(&self, pos: &P3) -> V3 {
            (pos - self.center).normalize()
        }

        fn direction_from(&self, pos: &P3) -> V3 {
            (self.center - pos).normalize()
        }

        fn uv(&self, pos: &P3) -> [f32; 2] {
            // arc lengths along longitude and latitude
            let n = self.normal_at(pos);
            let phi = n[2].atan2(n[0]);
            let theta = n[1].max(-1.0).min(1.0).acos();
            [phi * self.radius, theta * self.radius]
        }
    }

    /// Infinite plane. Its tangent frame only feeds surface coordinates.
    #[derive(Clone, Debug)]
    pub struct Plane {
        point: P3,
        normal: V3,
        lc: LocalCoord,
    }

    impl Plane {
        pub fn new(point: P3, normal: V3) -> Self {
            let normal = normal.normalize();
            Plane {
                point,
                normal,
                lc: LocalCoord::around(&point, &normal),
            }
        }
    }

    impl ShapeImpl for Plane {
        fn intersect(&self, ray: &Ray) -> Option<f32> {
            let denom = ray.dir.dot(&self.normal);
            if denom.abs() < PARALLEL_EPSILON {
                return None;
            }
            let dist = (self.point - ray.origin).dot(&self.normal) / denom;
            if dist > 0.0 {
                Some(dist)
            } else {
                None
            }
        }

        fn normal_at(&self, _pos: &P3) -> V3 {
            self.normal
        }

        fn direction_from(&self, _pos: &P3) -> V3 {
            -self.normal
        }

        fn uv(&self, pos: &P3) -> [f32; 2] {
            let local = self.lc.w2l() * pos;
            [local[0], local[1]]
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Plane]}

use Shape::*;
impl Shape {
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Sphere(s) => s.intersect(ray),
            Plane(s) => s.intersect(ray),
        }
    }

    pub fn normal_at(&self, pos: &P3) -> V3 {
        match self {
            Sphere(s) => s.normal_at(pos),
            Plane(s) => s.normal_at(pos),
        }
    }

    pub fn direction_from(&self, pos: &P3) -> V3 {
        match self {
            Sphere(s) => s.direction_from(pos),
            Plane(s) => s.direction_from(pos),
        }
    }

    pub fn uv(&self, pos: &P3) -> [f32; 2] {
        match self {
            Sphere(s) => s.uv(pos),
            Plane(s) => s.uv(pos),
        }
    }
}
