use crate::material::{Material, Surface};
use crate::shape::Shape;
use crate::*;

/// A primitive: geometry plus the material lookup over its surface.
#[derive(Clone, Debug)]
pub struct SimpleObject {
    pub shape: Shape,
    pub surface: Surface,
}

impl SimpleObject {
    pub fn new(shape: impl Into<Shape>, surface: impl Into<Surface>) -> Self {
        SimpleObject {
            shape: shape.into(),
            surface: surface.into(),
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.shape.intersect(ray)
    }

    pub fn normal_at(&self, pos: &P3) -> V3 {
        self.shape.normal_at(pos)
    }

    pub fn material_at(&self, pos: &P3) -> Material {
        self.surface.material_at(self.shape.uv(pos))
    }

    pub fn direction_from(&self, pos: &P3) -> V3 {
        self.shape.direction_from(pos)
    }

    pub fn may_emit(&self) -> bool {
        self.surface.may_emit()
    }
}

/// Nearest intersection found by a scene query. `obj_ix` indexes the scene's
/// object list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectHit {
    pub obj_ix: usize,
    pub dist: f32,
}

impl ObjectHit {
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        match (x, y) {
            // strict: on a tie the earlier object stays
            (Some(x), Some(y)) => Some(if y.dist < x.dist { y } else { x }),
            (x, None) => x,
            (None, y) => y,
        }
    }
}

/// Linear scan in insertion order.
pub fn nearest_hit<'a, I>(objects: I, ray: &Ray) -> Option<ObjectHit>
where
    I: IntoIterator<Item = &'a SimpleObject>,
{
    objects
        .into_iter()
        .enumerate()
        .fold(None, |hit, (obj_ix, o)| {
            let new_hit = o.intersect(ray).map(|dist| ObjectHit { obj_ix, dist });
            ObjectHit::nearer_option(hit, new_hit)
        })
}
