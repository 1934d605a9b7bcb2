use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

// Declared ahead of the modules so they can see it.
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident),*]) => {
        $(impl From<$m::$var> for $t {
            fn from(m: $m::$var) -> Self {
                $t::$var(m)
            }
        })*
    };
}

pub mod camera;
pub mod error;
pub mod example_scenes;
pub mod film;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;

pub use error::Error;
pub use math::*;
pub use ray::Ray;
pub use rgb::RGB;
