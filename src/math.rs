use crate::{P3, V3};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};

/// Orthonormal frame placed at a point. Used by the camera and by the plane's
/// tiling coordinates.
#[derive(Clone, Debug)]
pub struct LocalCoord {
    l2w: Isometry3<f32>,
    w2l: Isometry3<f32>,
}

impl LocalCoord {
    /// Local +z maps to `z`, local +y lies in the plane of `z` and `y_like`.
    pub fn new_zy(o: &P3, z: &V3, y_like: &V3) -> Self {
        let tr = Translation3::from(o.coords);
        let rot = UnitQuaternion::face_towards(z, y_like);
        Self::from_iso(Isometry3::from_parts(tr, rot))
    }

    /// Frame around `z` with an arbitrary but stable choice of tangent axes.
    pub fn around(o: &P3, z: &V3) -> Self {
        let y_like = if z[0].abs() < 0.5 {
            V3::new(1.0, 0.0, 0.0)
        } else {
            V3::new(0.0, 1.0, 0.0)
        };
        Self::new_zy(o, z, &y_like)
    }

    pub fn from_iso(l2w: Isometry3<f32>) -> Self {
        let w2l = l2w.inverse();
        LocalCoord { l2w, w2l }
    }

    //local to world
    pub fn l2w(&self) -> &Isometry3<f32> {
        &self.l2w
    }

    //world to local
    pub fn w2l(&self) -> &Isometry3<f32> {
        &self.w2l
    }
}
