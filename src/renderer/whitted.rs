//! Recursive mirror reflection plus direct Phong lighting from every emissive
//! object, with hard shadows.

use super::RenderConfig;
use crate::material::Material;
use crate::ray::reflect;
use crate::scene::Scene;
use crate::*;

/// Exponent of the specular highlight.
pub const SHININESS: i32 = 10;

pub struct Tracer<'a> {
    scene: &'a Scene,
    max_depth: usize,
    background: RGB,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &RenderConfig) -> Self {
        Tracer {
            scene,
            max_depth: config.max_depth,
            background: config.background,
        }
    }

    /// Color seen along `ray`. `depth` counts the reflections already
    /// followed; at `max_depth` no further reflection is traced.
    pub fn trace(&self, ray: &Ray, depth: usize) -> RGB {
        let hit = match self.scene.test_hit(ray) {
            Some(hit) => hit,
            None => return self.background,
        };
        let obj = self.scene.object(hit.obj_ix);
        let pos = ray.at(hit.dist);
        let normal = obj.normal_at(&pos);
        let material = obj.material_at(&pos);
        self.shade(ray, &pos, &normal, &material, depth)
    }

    fn shade(&self, ray: &Ray, pos: &P3, normal: &V3, material: &Material, depth: usize) -> RGB {
        let mut color = material.emissive;
        let reflect_dir = reflect(&ray.dir, normal);

        if depth < self.max_depth && material.reflectance > 0.0 {
            let reflected = self.trace(&Ray::biased(pos, reflect_dir), depth + 1);
            color += reflected * material.reflectance;
        }

        for light_ix in self.scene.lights() {
            color += self.direct_light(*light_ix, pos, normal, &reflect_dir, material);
        }
        color
    }

    fn direct_light(
        &self,
        light_ix: usize,
        pos: &P3,
        normal: &V3,
        reflect_dir: &V3,
        material: &Material,
    ) -> RGB {
        let light = self.scene.object(light_ix);
        let light_dir = light.direction_from(pos);
        let shadow_ray = Ray::biased(pos, light_dir);

        let light_dist = match light.intersect(&shadow_ray) {
            Some(dist) => dist,
            None => return RGB::BLACK,
        };
        // the emitting material where the shadow ray lands on the light
        let emissive = light.material_at(&shadow_ray.at(light_dist)).emissive;
        if emissive.is_black() {
            return RGB::BLACK;
        }
        if self.scene.occluded(&shadow_ray, light_ix, light_dist) {
            return RGB::BLACK;
        }

        let diffuse = normal.dot(&light_dir).max(0.0);
        let specular = if diffuse > 0.0 {
            reflect_dir.dot(&light_dir).max(0.0).powi(SHININESS)
        } else {
            0.0
        };
        emissive * material.albedo * diffuse + material.specular * specular * emissive
    }
}
