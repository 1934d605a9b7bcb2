use crate::*;

/// Source of primary rays. Pixel coordinates are continuous, `(0, 0)` is the
/// top-left corner of the image and `(w, h)` the bottom-right.
pub trait Camera {
    fn resolution(&self) -> (u32, u32);
    fn ray_through(&self, x: f32, y: f32) -> Ray;
}

#[derive(Clone, Debug)]
pub struct PinHole {
    lc: LocalCoord,
    film_height: f32,
    w: u32,
    h: u32,
}

impl PinHole {
    /// `fov_degree` is the vertical field of view.
    pub fn new(origin: P3, look_dir: V3, view_up: V3, fov_degree: f32, w: u32, h: u32) -> Self {
        let lc = LocalCoord::new_zy(&origin, &-look_dir.normalize(), &view_up);
        let fov_rad = fov_degree * std::f32::consts::PI / 180.0;
        let half_tan = (fov_rad / 2.0).tan();
        PinHole {
            lc,
            film_height: 2.0 * half_tan,
            w,
            h,
        }
    }

    pub fn origin(&self) -> P3 {
        self.lc.l2w() * P3::origin()
    }
}

impl Camera for PinHole {
    fn resolution(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    fn ray_through(&self, x: f32, y: f32) -> Ray {
        let aspect = self.w as f32 / self.h as f32;
        let u = (x / self.w as f32 - 0.5) * self.film_height * aspect;
        let v = (0.5 - y / self.h as f32) * self.film_height;
        let dir = self.lc.l2w() * V3::new(u, v, -1.0).normalize();
        Ray::new(self.origin(), dir)
    }
}
