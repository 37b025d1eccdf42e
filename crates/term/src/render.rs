//! Row-parallel raymarch renderer.
//!
//! Rows are independent: each one is traced on a rayon worker against a
//! shared read-only scene and camera. Ray and step counts are accumulated per
//! row, reduced after the parallel loop joins, and only then added to the
//! renderer's atomic counters.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::core::{march, shade_march, Camera, MarchLimits, Scene, ShadeParams};
use crate::fb::FrameBuffer;
use crate::types::{ColorToken, Settings, Theme, FULL_BLOCK, UPPER_HALF_BLOCK};

/// Ray and march-step totals since the last [`Renderer::stats`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub rays: u64,
    pub steps: u64,
}

impl RenderStats {
    fn merge(self, other: Self) -> Self {
        Self {
            rays: self.rays + other.rays,
            steps: self.steps + other.steps,
        }
    }
}

#[derive(Debug, Default)]
pub struct Renderer {
    theme: Theme,
    rays: AtomicU64,
    steps: AtomicU64,
}

/// Everything a row needs, shared by reference across workers.
struct Frame<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    limits: MarchLimits,
    params: ShadeParams,
    width: u32,
    sample_height: u32,
}

impl Frame<'_> {
    #[inline]
    fn sample(&self, x: u32, y: u32) -> (ColorToken, u32) {
        let ray = self.camera.ray(x, y, self.width, self.sample_height);
        let m = march(self.scene, &ray, self.limits);
        (shade_march(self.scene, &ray, &m, &self.params), m.steps)
    }
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Renders one frame into `fb`, overwriting every cell.
    ///
    /// `scene` and `camera` are only read; callers mutate them between frames.
    pub fn render(&self, scene: &Scene, camera: &Camera, settings: &Settings, fb: &mut FrameBuffer) {
        let width = fb.width() as usize;
        let height = fb.height() as usize;
        if width == 0 || height == 0 {
            return;
        }

        let half_blocks = settings.use_half_blocks;
        let frame = Frame {
            scene,
            camera,
            limits: MarchLimits::new(settings.max_raymarch_steps, settings.max_render_distance),
            params: ShadeParams::from_settings(settings, self.theme),
            width: width as u32,
            sample_height: if half_blocks {
                height as u32 * 2
            } else {
                height as u32
            },
        };

        let (glyphs, colors) = fb.grids_mut();
        let totals = glyphs
            .par_chunks_mut(width)
            .zip(colors.par_chunks_mut(width))
            .enumerate()
            .map(|(y, (glyph_row, color_row))| {
                let y = y as u32;
                if half_blocks {
                    render_half_block_row(&frame, y, glyph_row, color_row)
                } else {
                    render_full_block_row(&frame, y, glyph_row, color_row)
                }
            })
            .reduce(RenderStats::default, RenderStats::merge);

        self.rays.fetch_add(totals.rays, Ordering::Relaxed);
        self.steps.fetch_add(totals.steps, Ordering::Relaxed);
    }

    /// Returns the accumulated counters and resets them to zero.
    pub fn stats(&self) -> RenderStats {
        RenderStats {
            rays: self.rays.swap(0, Ordering::Relaxed),
            steps: self.steps.swap(0, Ordering::Relaxed),
        }
    }
}

fn render_full_block_row(
    frame: &Frame<'_>,
    y: u32,
    glyphs: &mut [char],
    colors: &mut [Option<ColorToken>],
) -> RenderStats {
    let mut steps = 0u64;
    for (x, (glyph, color)) in glyphs.iter_mut().zip(colors.iter_mut()).enumerate() {
        let (token, n) = frame.sample(x as u32, y);
        steps += n as u64;
        *glyph = FULL_BLOCK;
        *color = Some(token);
    }
    RenderStats {
        rays: glyphs.len() as u64,
        steps,
    }
}

fn render_half_block_row(
    frame: &Frame<'_>,
    y: u32,
    glyphs: &mut [char],
    colors: &mut [Option<ColorToken>],
) -> RenderStats {
    let mut steps = 0u64;
    for (x, (glyph, color)) in glyphs.iter_mut().zip(colors.iter_mut()).enumerate() {
        let (top, top_steps) = frame.sample(x as u32, y * 2);
        let (bottom, bottom_steps) = frame.sample(x as u32, y * 2 + 1);
        steps += (top_steps + bottom_steps) as u64;
        *glyph = UPPER_HALF_BLOCK;
        *color = Some(ColorToken::packed(top, bottom));
    }
    RenderStats {
        rays: glyphs.len() as u64 * 2,
        steps,
    }
}
