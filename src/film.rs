use crate::error::Result;
use crate::*;

use log::*;
use std::path::Path;

/// 8-bit RGB pixel buffer the image loop writes into.
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<[u8; 3]>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        Self::filled(w, h, [0, 0, 0])
    }

    pub fn filled(w: u32, h: u32, color: [u8; 3]) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, color);
        Image { w, h, buf }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let i = self.index(x, y);
        self.buf[i] = color;
    }

    pub fn at(&self, x: u32, y: u32) -> [u8; 3] {
        self.buf[self.index(x, y)]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Encodes by file extension (`.bmp`, `.png`).
    pub fn write<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        let raw: Vec<u8> = self.buf.iter().flat_map(|p| p.iter().copied()).collect();
        ::image::save_buffer(filename, &raw, self.w, self.h, ::image::ColorType::Rgb8)?;
        info!("wrote {}", filename.display());
        Ok(())
    }
}

/// Unclamped linear colors, one per pixel, kept alongside the 8-bit image for
/// HDR output.
pub struct Film {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Film {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, RGB::BLACK);
        Film { w, h, buf }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    pub fn at(&self, x: u32, y: u32) -> RGB {
        self.buf[self.index(x, y)]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn write_exr<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        let w = self.w as usize;
        ::exr::prelude::write_rgb_file(filename, w, self.h as usize, |x, y| {
            let c = self.buf[y * w + x];
            (c.r, c.g, c.b)
        })?;
        info!("wrote {}", filename.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_row_major() {
        let mut image = Image::filled(4, 3, [127, 127, 127]);
        image.put_pixel(3, 1, [1, 2, 3]);
        assert_eq!(image.at(3, 1), [1, 2, 3]);
        assert_eq!(image.at(1, 1), [127, 127, 127]);
        assert_eq!(image.at(0, 2), [127, 127, 127]);
    }

    #[test]
    fn wide_image_indexes_in_usize() {
        // 70000 * 70000 does not fit in u32
        let mut image = Image::new(70_000, 1);
        image.put_pixel(69_999, 0, [9, 8, 7]);
        assert_eq!(image.index(69_999, 0), 69_999);
        assert_eq!(Image::new(1, 1).index(0, 0), 0);
        let tall = Image { w: 70_000, h: 70_000, buf: Vec::new() };
        assert_eq!(tall.index(1, 69_999), 69_999 * 70_000 + 1);
        assert_eq!(image.at(69_999, 0), [9, 8, 7]);
    }

    #[test]
    fn film_stores_linear_color() {
        let mut film = Film::new(2, 2);
        *film.at_mut(1, 0) = RGB::new(2.0, 0.5, 0.0);
        assert_eq!(film.at(1, 0), RGB::new(2.0, 0.5, 0.0));
        assert_eq!(film.at(0, 1), RGB::BLACK);
    }

    #[test]
    fn write_bmp_and_exr() {
        let dir = std::env::temp_dir();
        let mut image = Image::new(3, 2);
        image.put_pixel(0, 0, [255, 0, 0]);
        let bmp = dir.join(format!("rayshade-test-{}.bmp", std::process::id()));
        image.write(&bmp).unwrap();
        assert!(bmp.exists());
        let _ = std::fs::remove_file(&bmp);

        let film = Film::new(3, 2);
        let exr = dir.join(format!("rayshade-test-{}.exr", std::process::id()));
        film.write_exr(&exr).unwrap();
        assert!(exr.exists());
        let _ = std::fs::remove_file(&exr);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let image = Image::new(1, 1);
        let path = std::env::temp_dir().join("rayshade-test.unknown-format");
        assert!(image.write(&path).is_err());
    }
}
