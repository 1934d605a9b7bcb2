use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::film::{Film, Image};
use crate::scene::Scene;
use crate::*;

use log::*;
use std::time::{Duration, Instant};

pub mod whitted;

use whitted::Tracer;

/// Largest accepted `width * height`.
pub const MAX_PIXELS: usize = 1 << 28;

/// Sub-pixel sample offsets, applied in this order.
pub const DITHER: [(f32, f32); 4] = [(0.1, 0.2), (0.6, 0.5), (0.8, 0.7), (0.2, 0.8)];

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_degree: f32,
    /// Number of [`DITHER`] offsets used per pixel.
    pub samples: usize,
    /// Reflection bounces after the primary hit.
    pub max_depth: usize,
    /// Returned by rays that hit nothing.
    pub background: RGB,
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1024,
            height: 768,
            fov_degree: 60.0,
            samples: 4,
            max_depth: 3,
            background: RGB::BLACK,
            threads: 1,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));
        let pixels = (self.width as usize).checked_mul(self.height as usize);
        if self.width == 0 || self.height == 0 || pixels.map_or(true, |n| n > MAX_PIXELS) {
            return invalid(format!("resolution {}x{}", self.width, self.height));
        }
        if self.samples == 0 || self.samples > DITHER.len() {
            return invalid(format!(
                "samples must be between 1 and {}, got {}",
                DITHER.len(),
                self.samples
            ));
        }
        if !(self.fov_degree > 0.0 && self.fov_degree < 180.0) {
            return invalid(format!("field of view {}", self.fov_degree));
        }
        if self.threads == 0 {
            return invalid("threads must be at least 1".to_string());
        }
        if !self.background.is_finite() || self.background.min() < 0.0 {
            return invalid(format!("background {:?}", self.background));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    pub pixels: usize,
    pub primary_rays: usize,
    /// Samples that came back NaN or infinite and were counted as black.
    pub non_finite_samples: usize,
    pub elapsed: Duration,
}

struct Row {
    y: u32,
    colors: Vec<RGB>,
    non_finite: usize,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Renderer { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Writes exactly one color per pixel of `image`, and the unclamped
    /// average into `film` when given.
    pub fn render<C: Camera + Sync>(
        &self,
        scene: &Scene,
        camera: &C,
        image: &mut Image,
        mut film: Option<&mut Film>,
    ) -> Result<RenderStats> {
        let (w, h) = (image.w(), image.h());
        if camera.resolution() != (w, h) {
            return Err(Error::InvalidConfig(format!(
                "camera resolution {:?} does not match image {}x{}",
                camera.resolution(),
                w,
                h
            )));
        }
        if let Some(film) = film.as_ref() {
            if (film.w(), film.h()) != (w, h) {
                return Err(Error::InvalidConfig(format!(
                    "film {}x{} does not match image {}x{}",
                    film.w(),
                    film.h(),
                    w,
                    h
                )));
            }
        }

        info!(
            "rendering {}x{}, {} samples, depth {}, {} thread(s)",
            w, h, self.config.samples, self.config.max_depth, self.config.threads
        );
        let start = Instant::now();
        let tracer = Tracer::new(scene, &self.config);

        let rows = if self.config.threads <= 1 {
            (0..h)
                .map(|y| self.render_row(&tracer, camera, w, y))
                .collect::<Vec<_>>()
        } else {
            self.render_rows_parallel(&tracer, camera, w, h)
        };

        let mut stats = RenderStats::default();
        for row in rows {
            for (x, color) in row.colors.iter().enumerate() {
                image.put_pixel(x as u32, row.y, color.to_bytes());
                if let Some(film) = film.as_mut() {
                    *film.at_mut(x as u32, row.y) = *color;
                }
            }
            stats.non_finite_samples += row.non_finite;
        }
        stats.pixels = w as usize * h as usize;
        stats.primary_rays = stats.pixels * self.config.samples;
        stats.elapsed = start.elapsed();
        if stats.non_finite_samples > 0 {
            warn!("{} samples were not finite", stats.non_finite_samples);
        }
        info!("rendered in {:.3}s", stats.elapsed.as_secs_f64());
        Ok(stats)
    }

    fn render_rows_parallel<C: Camera + Sync>(
        &self,
        tracer: &Tracer,
        camera: &C,
        w: u32,
        h: u32,
    ) -> Vec<Row> {
        let nthread = self.config.threads;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..nthread)
                .map(|i| {
                    s.spawn(move || {
                        let rows: Vec<Row> = (0..h)
                            .filter(|y| *y as usize % nthread == i)
                            .map(|y| self.render_row(tracer, camera, w, y))
                            .collect();
                        debug!("thread {} finished {} rows", i, rows.len());
                        rows
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|e| std::panic::resume_unwind(e))
                })
                .collect()
        })
    }

    fn render_row<C: Camera>(&self, tracer: &Tracer, camera: &C, w: u32, y: u32) -> Row {
        let mut non_finite = 0;
        let colors = (0..w)
            .map(|x| {
                let mut color = RGB::BLACK;
                for (ox, oy) in DITHER.iter().take(self.config.samples) {
                    let ray = camera.ray_through(x as f32 + ox, y as f32 + oy);
                    let sample = tracer.trace(&ray, 0);
                    if sample.is_finite() {
                        color += sample;
                    } else {
                        warn!("radiance is not finite at ({}, {}): {:?}", x, y, sample);
                        non_finite += 1;
                    }
                }
                color / self.config.samples as f32
            })
            .collect();
        Row {
            y,
            colors,
            non_finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.fov_degree, 60.0);
        assert_eq!(config.samples, 4);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.background, RGB::BLACK);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let base = RenderConfig::default();
        let bad = vec![
            RenderConfig {
                width: 0,
                ..base.clone()
            },
            RenderConfig {
                width: 65536,
                height: 65536,
                ..base.clone()
            },
            RenderConfig {
                width: u32::MAX,
                height: u32::MAX,
                ..base.clone()
            },
            RenderConfig {
                samples: 0,
                ..base.clone()
            },
            RenderConfig {
                samples: 5,
                ..base.clone()
            },
            RenderConfig {
                fov_degree: 180.0,
                ..base.clone()
            },
            RenderConfig {
                fov_degree: std::f32::NAN,
                ..base.clone()
            },
            RenderConfig {
                threads: 0,
                ..base.clone()
            },
            RenderConfig {
                background: RGB::new(-1.0, 0.0, 0.0),
                ..base.clone()
            },
        ];
        let largest = RenderConfig {
            width: 1 << 14,
            height: 1 << 14,
            ..base.clone()
        };
        assert!(largest.validate().is_ok());
        for config in bad {
            match Renderer::new(config.clone()) {
                Err(Error::InvalidConfig(_)) => {}
                _ => panic!("accepted {:?}", config),
            }
        }
    }
}
