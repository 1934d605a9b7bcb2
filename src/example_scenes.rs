use crate::camera::PinHole;
use crate::material::{Material, Surface};
use crate::object::SimpleObject;
use crate::renderer::RenderConfig;
use crate::scene::Scene;
use crate::shape::shapes::*;
use crate::*;

pub const NAMES: [&str; 2] = ["classic", "mirror_hall"];

pub fn by_name(name: &str, config: &RenderConfig) -> Option<(PinHole, Scene)> {
    match name {
        "classic" => Some(classic(config)),
        "mirror_hall" => Some(mirror_hall(config)),
        _ => None,
    }
}

fn camera(config: &RenderConfig, origin: P3, look_dir: V3) -> PinHole {
    PinHole::new(
        origin,
        look_dir,
        V3::y(),
        config.fov_degree,
        config.width,
        config.height,
    )
}

fn tiled_floor() -> SimpleObject {
    let tile = |albedo: f32| {
        Material::new_diffuse(RGB::all(albedo))
            .with_specular(RGB::all(0.5))
            .with_reflectance(0.25)
    };
    SimpleObject::new(
        Plane::new(P3::origin(), V3::y()),
        Surface::new_checker(tile(1.0), tile(0.0), 0.5),
    )
}

/// Three glossy balls and a glowing one on a checkered floor, lit by a small
/// white light behind and to the left of the viewer.
pub fn classic(config: &RenderConfig) -> (PinHole, Scene) {
    let mut objects = vec![];

    // red
    objects.push(SimpleObject::new(
        Sphere::new(P3::new(0.0, 2.0, 0.0), 2.0),
        Material::new_diffuse(RGB::new(0.7, 0.1, 0.1))
            .with_specular(RGB::new(0.9, 0.1, 0.1))
            .with_reflectance(0.5),
    ));
    // purple
    objects.push(SimpleObject::new(
        Sphere::new(P3::new(-2.5, 1.0, 2.0), 1.0),
        Material::new_diffuse(RGB::new(0.7, 0.0, 0.7))
            .with_specular(RGB::new(0.9, 0.9, 0.8))
            .with_reflectance(0.5),
    ));
    // blue
    objects.push(SimpleObject::new(
        Sphere::new(P3::new(0.0, 0.5, 3.0), 0.5),
        Material::new_diffuse(RGB::new(0.0, 0.3, 1.0)).with_specular(RGB::new(0.0, 0.0, 1.0)),
    ));
    // yellow, on the floor
    objects.push(SimpleObject::new(
        Sphere::new(P3::new(2.8, 0.8, 2.0), 0.8),
        Material::new_diffuse(RGB::all(1.0)).with_emissive(RGB::new(1.0, 1.0, 0.2)),
    ));
    // white light
    objects.push(SimpleObject::new(
        Sphere::new(P3::new(-10.8, 6.4, 10.0), 0.4),
        Material::new_diffuse(RGB::new(0.0, 0.8, 0.0)).with_emissive(RGB::all(1.0)),
    ));
    objects.push(tiled_floor());

    let camera = camera(config, P3::new(0.0, 6.0, 8.0), V3::new(0.0, -0.8, -1.0));
    (camera, Scene::new(objects))
}

/// A lit ball between two facing mirrors, so reflections repeat until the
/// depth limit.
pub fn mirror_hall(config: &RenderConfig) -> (PinHole, Scene) {
    let mirror = Material::new_diffuse(RGB::all(0.05))
        .with_specular(RGB::all(0.2))
        .with_reflectance(0.9);
    let objects = vec![
        SimpleObject::new(Plane::new(P3::new(-4.0, 0.0, 0.0), V3::x()), mirror),
        SimpleObject::new(Plane::new(P3::new(4.0, 0.0, 0.0), -V3::x()), mirror),
        SimpleObject::new(
            Sphere::new(P3::new(0.0, 1.0, 0.0), 1.0),
            Material::new_diffuse(RGB::new(0.7, 0.1, 0.1))
                .with_specular(RGB::all(0.6))
                .with_reflectance(0.2),
        ),
        SimpleObject::new(
            Sphere::new(P3::new(1.0, 6.0, 6.0), 0.5),
            Material::new_light(RGB::all(1.0)),
        ),
        tiled_floor(),
    ];

    let camera = camera(config, P3::new(0.0, 2.5, 9.0), V3::new(0.3, -0.2, -1.0));
    (camera, Scene::new(objects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        let config = RenderConfig::default();
        for name in NAMES.iter() {
            assert!(by_name(name, &config).is_some(), "{}", name);
        }
        assert!(by_name("cornell", &config).is_none());
    }

    #[test]
    fn classic_lights() {
        let (_, scene) = classic(&RenderConfig::default());
        assert_eq!(scene.objects().len(), 6);
        assert_eq!(scene.lights().to_vec(), vec![3, 4]);
    }
}
