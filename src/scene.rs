use crate::object::{nearest_hit, ObjectHit, SimpleObject};
use crate::*;

use log::*;

/// Read-only set of primitives. Objects are identified by their index, which
/// is also the scan order of every query.
pub struct Scene {
    objects: Vec<SimpleObject>,
    lights: Vec<usize>,
}

impl Scene {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        let lights: Vec<usize> = (0..objects.len())
            .filter(|i| objects[*i].may_emit())
            .collect();
        debug!(
            "scene: {} objects, {} possible emitters",
            objects.len(),
            lights.len()
        );
        Scene { objects, lights }
    }

    pub fn objects(&self) -> &[SimpleObject] {
        &self.objects
    }

    pub fn object(&self, ix: usize) -> &SimpleObject {
        &self.objects[ix]
    }

    /// Indices of objects whose surface has any emissive material.
    pub fn lights(&self) -> &[usize] {
        &self.lights
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit> {
        nearest_hit(&self.objects, ray)
    }

    /// True if any object other than `light_ix` meets `ray` strictly before
    /// `light_dist`.
    pub fn occluded(&self, ray: &Ray, light_ix: usize, light_dist: f32) -> bool {
        self.objects
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != light_ix)
            .any(|(_, o)| o.intersect(ray).map_or(false, |d| d < light_dist))
    }
}
