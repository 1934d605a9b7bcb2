use std::ops::{Add, AddAssign, Div, Mul, Sub};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGB {
    pub const BLACK: RGB = RGB {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        RGB { r, g, b }
    }

    pub const fn all(x: f32) -> Self {
        Self::new(x, x, x)
    }

    /// Exactly zero in every channel. Anything else counts as light.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn min(&self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    pub fn sum(&self) -> f32 {
        self.r + self.g + self.b
    }

    /// Scales a [0, 1] color to [0, 255], clamps and truncates each channel.
    pub fn to_bytes(&self) -> [u8; 3] {
        let q = |c: f32| (c * 255.0).max(0.0).min(255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl Default for RGB {
    fn default() -> Self {
        RGB::BLACK
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sub<&'a Self> for RGB {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Sub for RGB {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f32> for RGB {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Div<f32> for RGB {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        RGB {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_clamps_and_truncates() {
        assert_eq!(RGB::new(0.0, 0.5, 1.0).to_bytes(), [0, 127, 255]);
        assert_eq!(RGB::new(-0.3, 2.0, 0.999).to_bytes(), [0, 255, 254]);
    }

    #[test]
    fn black_means_exactly_zero() {
        assert!(RGB::BLACK.is_black());
        assert!(RGB::default().is_black());
        assert!(!RGB::new(0.0, 1e-6, 0.0).is_black());
    }

    #[test]
    fn channel_ops() {
        let c = RGB::new(0.5, 0.25, 1.0) * RGB::new(2.0, 4.0, 0.5) + RGB::all(1.0);
        assert_eq!(c, RGB::new(2.0, 2.0, 1.5));
        assert_eq!(c / 2.0 - RGB::all(1.0), RGB::new(0.0, 0.0, -0.25));
        assert_eq!(RGB::new(0.1, -0.7, 0.3).min(), -0.7);
    }
}
