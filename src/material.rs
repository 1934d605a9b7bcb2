use crate::*;

/// Phong-style surface response at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color, 0 to 1 per channel.
    pub albedo: RGB,
    pub specular: RGB,
    /// Fraction of the mirror-reflected color added to the output, 0 to 1.
    pub reflectance: f32,
    /// Non-black marks a light source.
    pub emissive: RGB,
}

impl Material {
    pub fn new_diffuse(albedo: RGB) -> Self {
        Material {
            albedo,
            specular: RGB::BLACK,
            reflectance: 0.0,
            emissive: RGB::BLACK,
        }
    }

    pub fn new_light(emissive: RGB) -> Self {
        Material {
            emissive,
            ..Material::new_diffuse(RGB::BLACK)
        }
    }

    pub fn with_specular(self, specular: RGB) -> Self {
        Material { specular, ..self }
    }

    pub fn with_reflectance(self, reflectance: f32) -> Self {
        Material {
            reflectance,
            ..self
        }
    }

    pub fn with_emissive(self, emissive: RGB) -> Self {
        Material { emissive, ..self }
    }

    pub fn is_emitter(&self) -> bool {
        !self.emissive.is_black()
    }
}

pub mod surfaces {
    use super::Material;

    pub trait SurfaceImpl {
        /// `uv` are the shape's 2D surface coordinates of the looked-up point.
        fn material_at(&self, uv: [f32; 2]) -> Material;

        /// False only if no point of the surface can ever be emissive.
        fn may_emit(&self) -> bool;
    }

    #[derive(Clone, Debug)]
    pub struct Flat(pub Material);

    impl SurfaceImpl for Flat {
        fn material_at(&self, _uv: [f32; 2]) -> Material {
            self.0
        }

        fn may_emit(&self) -> bool {
            self.0.is_emitter()
        }
    }

    /// Alternating square tiles of edge `tile` in surface coordinates.
    #[derive(Clone, Debug)]
    pub struct Checker {
        pub even: Material,
        pub odd: Material,
        pub tile: f32,
    }

    impl SurfaceImpl for Checker {
        fn material_at(&self, uv: [f32; 2]) -> Material {
            let iu = (uv[0] / self.tile).floor() as i64;
            let iv = (uv[1] / self.tile).floor() as i64;
            // the casts saturate for huge coordinates
            if iu.wrapping_add(iv).rem_euclid(2) == 0 {
                self.even
            } else {
                self.odd
            }
        }

        fn may_emit(&self) -> bool {
            self.even.is_emitter() || self.odd.is_emitter()
        }
    }
}

#[derive(Clone, Debug)]
pub enum Surface {
    Flat(surfaces::Flat),
    Checker(surfaces::Checker),
}
use surfaces::SurfaceImpl;

impl_wrap_from_many! {Surface, surfaces, [Flat, Checker]}

impl From<Material> for Surface {
    fn from(m: Material) -> Self {
        Surface::Flat(surfaces::Flat(m))
    }
}

use Surface::*;
impl Surface {
    pub fn new_checker(even: Material, odd: Material, tile: f32) -> Self {
        Checker(surfaces::Checker { even, odd, tile })
    }

    pub fn material_at(&self, uv: [f32; 2]) -> Material {
        match self {
            Flat(s) => s.material_at(uv),
            Checker(s) => s.material_at(uv),
        }
    }

    pub fn may_emit(&self) -> bool {
        match self {
            Flat(s) => s.may_emit(),
            Checker(s) => s.may_emit(),
        }
    }
}
