//! Lambert shading with optional exponential fog and gamma mapping.

use glam::Vec3;

use crate::ray::Ray;
use crate::raymarch::March;
use crate::scene::Scene;
use crate::types::{Color, ColorToken, Rgb, Settings, Theme, AMBIENT_LIGHT, GAMMA};

/// How linear 0-1 color is mapped to 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMapping {
    Linear,
    Gamma,
}

/// Per-render shading configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeParams {
    /// `None` disables fog.
    pub fog_density: Option<f32>,
    pub mapping: ColorMapping,
    pub theme: Theme,
    pub max_distance: f32,
}

impl ShadeParams {
    pub fn from_settings(settings: &Settings, theme: Theme) -> Self {
        Self {
            fog_density: settings.enable_fog.then_some(settings.fog_density),
            mapping: if settings.map_colors_with_gamma {
                ColorMapping::Gamma
            } else {
                ColorMapping::Linear
            },
            theme,
            max_distance: settings.max_render_distance,
        }
    }
}

/// Direction towards the single directional light.
pub fn light_direction() -> Vec3 {
    Vec3::new(0.5, 1.0, -0.3).normalize()
}

/// Color of a ray that hit nothing.
pub fn background(theme: Theme) -> ColorToken {
    ColorToken::foreground(theme.background())
}

/// Lit color of a surface point.
pub fn shade(normal: Vec3, material: Vec3, distance: f32, params: &ShadeParams) -> ColorToken {
    let diffuse = normal.dot(light_direction()).max(0.0);
    let mut lighting = AMBIENT_LIGHT + diffuse * (1.0 - AMBIENT_LIGHT);

    if let Some(density) = params.fog_density {
        let fog = 1.0 - (-distance * density).exp();
        lighting *= 1.0 - fog;
    }

    let brightness = (material.x + material.y + material.z) / 3.0;
    lighting *= 0.7 + 0.3 * brightness;

    let color = (material * lighting).clamp(Vec3::ZERO, Vec3::ONE);
    ColorToken::foreground(Color::Rgb(map_color(color, params.mapping)))
}

/// Shades the result of marching `ray`: background on a miss, lit surface otherwise.
pub fn shade_march(scene: &Scene, ray: &Ray, m: &March, params: &ShadeParams) -> ColorToken {
    let object = match m.object {
        Some(i) if m.distance < params.max_distance => i,
        _ => return background(params.theme),
    };

    let hit = ray.at(m.distance);
    let normal = scene.normal_at(hit, object);
    shade(normal, scene.color_of(object), m.distance, params)
}

/// Maps a clamped 0-1 color to 8-bit channels.
pub fn map_color(c: Vec3, mapping: ColorMapping) -> Rgb {
    match mapping {
        ColorMapping::Linear => Rgb::new(
            (c.x * 255.0).round() as u8,
            (c.y * 255.0).round() as u8,
            (c.z * 255.0).round() as u8,
        ),
        ColorMapping::Gamma => {
            let inv = 1.0 / GAMMA;
            Rgb::new(
                (c.x.powf(inv) * 255.0) as u8,
                (c.y.powf(inv) * 255.0) as u8,
                (c.z.powf(inv) * 255.0) as u8,
            )
        }
    }
}
