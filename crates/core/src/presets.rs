//! Built-in scenes.
//!
//! Loading a preset replaces the whole scene; it is the only supported way to
//! edit a scene after construction.

use glam::Vec3;

use crate::camera::CameraPose;
use crate::scene::Scene;
use crate::types::ScenePreset;

/// Camera start used by every preset without its own pose.
pub const DEFAULT_CAMERA_POSE: CameraPose = CameraPose::new(Vec3::new(0.0, 1.0, -8.0), 0.0, 0.0);

impl Scene {
    /// Builds a fresh scene from a preset.
    pub fn from_preset(preset: ScenePreset) -> Self {
        let mut scene = Scene::new();
        scene.load_preset(preset);
        scene
    }

    /// Replaces the scene contents with `preset`.
    ///
    /// Returns the camera pose the preset wants, or `None` when the camera
    /// should return to its initial pose.
    pub fn load_preset(&mut self, preset: ScenePreset) -> Option<CameraPose> {
        self.clear();
        let pose = match preset {
            ScenePreset::Default => {
                self.build_default();
                None
            }
            ScenePreset::Rings => {
                self.build_rings();
                None
            }
            ScenePreset::Zen => {
                self.build_zen();
                None
            }
            ScenePreset::Corridor => Some(self.build_corridor()),
            ScenePreset::Playground => {
                self.build_playground();
                None
            }
            ScenePreset::Showcase => {
                self.build_showcase();
                None
            }
        };
        tracing::debug!(
            preset = preset.as_str(),
            objects = self.len(),
            "scene preset loaded"
        );
        pose
    }

    fn build_default(&mut self) {
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.3, 0.3, 0.35));
        self.add_sphere(Vec3::ZERO, 1.0, Vec3::new(1.0, 0.3, 0.3));
        self.add_box(Vec3::new(-3.0, 0.0, 0.0), Vec3::splat(0.8), Vec3::new(0.3, 1.0, 0.3));
        self.add_box(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(0.8), Vec3::new(0.3, 0.3, 1.0));
        self.add_torus(Vec3::new(0.0, 0.0, 5.0), 1.5, 0.4, Vec3::new(1.0, 1.0, 0.3));
    }

    fn build_rings(&mut self) {
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.3, 0.3, 0.35));
        self.add_sphere(Vec3::new(0.0, 8.0, 0.0), 1.2, Vec3::new(1.0, 0.5, 0.3));

        // Stacked orbital rings
        self.add_torus(Vec3::new(0.0, 3.0, 0.0), 4.0, 0.4, Vec3::new(0.3, 1.0, 1.0));
        self.add_torus(Vec3::new(0.0, 5.0, 0.0), 3.5, 0.35, Vec3::new(1.0, 0.3, 1.0));
        self.add_torus(Vec3::new(0.0, 7.0, 0.0), 3.0, 0.3, Vec3::new(1.0, 1.0, 0.3));

        let pillar = Vec3::new(0.5, 3.0, 0.5);
        let gray = Vec3::splat(0.5);
        for center in [
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -5.0),
        ] {
            self.add_box(center, pillar, gray);
        }
    }

    fn build_zen(&mut self) {
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.35, 0.32, 0.28));

        // Rocks half-buried in sand
        self.add_sphere(Vec3::new(-3.0, -1.3, 2.0), 1.0, Vec3::splat(0.4));
        self.add_sphere(Vec3::new(-2.5, -1.5, 3.0), 0.8, Vec3::splat(0.45));
        self.add_sphere(Vec3::new(3.0, -1.4, 4.0), 1.1, Vec3::splat(0.38));

        // Balanced stones
        self.add_sphere(Vec3::new(0.0, -0.8, 3.0), 1.2, Vec3::new(0.5, 0.5, 0.52));
        self.add_sphere(Vec3::new(0.0, 0.6, 3.0), 0.8, Vec3::new(0.48, 0.48, 0.5));
        self.add_sphere(Vec3::new(0.0, 1.6, 3.0), 0.5, Vec3::new(0.46, 0.46, 0.48));

        // Torii beams
        let torii = Vec3::new(0.6, 0.2, 0.2);
        self.add_box(Vec3::new(0.0, 3.3, 6.0), Vec3::new(3.0, 0.3, 0.4), torii);
        self.add_box(Vec3::new(0.0, 2.8, 6.0), Vec3::new(2.5, 0.25, 0.35), torii);

        self.add_torus(Vec3::new(-4.0, 0.5, 5.0), 0.8, 0.25, Vec3::new(0.3, 0.5, 0.3));
    }

    fn build_corridor(&mut self) -> CameraPose {
        // Floor, ceiling and side walls
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.2, 0.2, 0.22));
        self.add_plane(Vec3::NEG_Y, 8.0, Vec3::new(0.18, 0.18, 0.2));
        self.add_plane(Vec3::X, 5.0, Vec3::new(0.25, 0.22, 0.2));
        self.add_plane(Vec3::NEG_X, 5.0, Vec3::new(0.25, 0.22, 0.2));

        for i in 0..8 {
            let z = i as f32 * 5.0 + 2.0;
            let x = if i % 2 == 0 { -4.0 } else { 4.0 };
            self.add_cylinder(Vec3::new(x, 0.0, z), 0.5, 6.0, Vec3::new(0.4, 0.35, 0.3));
            self.add_sphere(Vec3::new(x, 6.3, z), 0.6, Vec3::new(1.0, 0.8, 0.3));
        }

        self.add_torus(Vec3::new(0.0, 3.0, 15.0), 2.0, 0.5, Vec3::new(0.3, 0.8, 1.0));
        self.add_sphere(Vec3::new(0.0, 3.0, 35.0), 2.5, Vec3::new(1.0, 0.3, 0.3));

        CameraPose::new(Vec3::new(0.0, 1.5, -10.0), 0.0, -0.05)
    }

    fn build_playground(&mut self) {
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.3, 0.5, 0.3));

        // Jungle gym
        let red = Vec3::new(1.0, 0.3, 0.3);
        self.add_box(Vec3::new(-2.0, 0.0, 3.0), Vec3::new(0.2, 2.0, 0.2), red);
        self.add_box(Vec3::new(2.0, 0.0, 3.0), Vec3::new(0.2, 2.0, 0.2), red);
        self.add_box(Vec3::new(0.0, 1.8, 3.0), Vec3::new(2.2, 0.2, 0.2), red);

        // Slide
        self.add_box(Vec3::new(4.0, 0.5, 2.0), Vec3::new(1.5, 0.1, 0.8), Vec3::new(0.3, 0.3, 1.0));

        for (center, color) in [
            (Vec3::new(-3.0, -0.5, 1.0), Vec3::new(1.0, 0.2, 0.2)),
            (Vec3::new(-1.0, -0.5, 0.0), Vec3::new(0.2, 1.0, 0.2)),
            (Vec3::new(1.0, -0.5, 1.0), Vec3::new(0.2, 0.2, 1.0)),
            (Vec3::new(3.0, -0.5, 0.0), Vec3::new(1.0, 1.0, 0.2)),
        ] {
            self.add_sphere(center, 0.8, color);
        }

        // Hoops
        self.add_torus(Vec3::new(0.0, 1.0, 6.0), 1.2, 0.2, Vec3::new(1.0, 0.5, 0.2));
        self.add_torus(Vec3::new(-3.0, 1.5, 5.0), 0.9, 0.18, Vec3::new(0.2, 1.0, 0.5));
        self.add_torus(Vec3::new(3.0, 1.5, 5.0), 0.9, 0.18, Vec3::new(0.5, 0.2, 1.0));
    }

    fn build_showcase(&mut self) {
        self.add_plane(Vec3::Y, 2.0, Vec3::new(0.3, 0.3, 0.35));

        self.add_sphere(Vec3::new(-6.0, 0.0, 2.0), 0.8, Vec3::new(1.0, 0.3, 0.3));
        self.add_box(Vec3::new(-4.0, 0.0, 2.0), Vec3::splat(0.8), Vec3::new(0.3, 1.0, 0.3));
        self.add_cylinder(Vec3::new(-2.0, 0.0, 2.0), 0.6, 1.5, Vec3::new(0.3, 0.3, 1.0));
        self.add_capsule(Vec3::new(0.0, 0.5, 2.0), 0.4, 1.0, Vec3::new(1.0, 1.0, 0.3));
        self.add_torus(Vec3::new(2.0, 1.0, 2.0), 0.8, 0.3, Vec3::new(1.0, 0.3, 1.0));

        // Marker pebble
        self.add_sphere(Vec3::new(-6.0, -1.5, 1.5), 0.1, Vec3::ONE);
    }
}
