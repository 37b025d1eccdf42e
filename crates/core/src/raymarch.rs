//! Sphere tracing.

use crate::ray::Ray;
use crate::scene::Scene;
use crate::types::HIT_EPSILON;

/// Step and distance bounds for one march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchLimits {
    pub max_steps: u32,
    pub max_distance: f32,
}

impl MarchLimits {
    pub const fn new(max_steps: u32, max_distance: f32) -> Self {
        Self {
            max_steps,
            max_distance,
        }
    }
}

/// Outcome of marching one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct March {
    /// Distance travelled along the ray; `max_distance` on a miss.
    pub distance: f32,
    pub steps: u32,
    /// Object that was hit, `None` on a miss.
    pub object: Option<usize>,
}

impl March {
    pub fn is_hit(&self) -> bool {
        self.object.is_some()
    }
}

/// Marches `ray` through `scene` until it hits, leaves range, or runs out of steps.
pub fn march(scene: &Scene, ray: &Ray, limits: MarchLimits) -> March {
    let mut travelled = 0.0f32;
    let mut steps = 0u32;

    while steps < limits.max_steps {
        let nearest = scene.nearest_surface(ray.at(travelled));

        if nearest.distance < HIT_EPSILON {
            return March {
                distance: travelled,
                steps,
                object: nearest.object,
            };
        }

        travelled += nearest.distance;
        if travelled > limits.max_distance {
            return March {
                distance: limits.max_distance,
                steps,
                object: None,
            };
        }

        steps += 1;
    }

    March {
        distance: limits.max_distance,
        steps: limits.max_steps,
        object: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const LIMITS: MarchLimits = MarchLimits::new(80, 100.0);

    #[test]
    fn empty_scene_misses_out_of_range() {
        let scene = Scene::new();
        let m = march(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), LIMITS);
        assert_eq!(m.object, None);
        assert_eq!(m.distance, 100.0);
        assert_eq!(m.steps, 0);
    }

    #[test]
    fn step_limited_miss_reports_max_steps() {
        // Grazing a plane parallel to the ray: every step advances by a constant 0.5.
        let mut scene = Scene::new();
        scene.add_plane(Vec3::Y, 0.5, Vec3::ONE);
        let m = march(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), MarchLimits::new(10, 100.0));
        assert_eq!(m.object, None);
        assert_eq!(m.steps, 10);
        assert_eq!(m.distance, 100.0);
    }

    #[test]
    fn starting_inside_is_an_immediate_hit() {
        let mut scene = Scene::new();
        let id = scene.add_sphere(Vec3::ZERO, 1.0, Vec3::ONE);
        let m = march(&scene, &Ray::new(Vec3::ZERO, Vec3::X), LIMITS);
        assert_eq!(m.object, Some(id));
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.steps, 0);
    }

    #[test]
    fn sphere_hit_distance() {
        let mut scene = Scene::new();
        let id = scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::ONE);
        let m = march(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), LIMITS);
        assert!(m.is_hit());
        assert_eq!(m.object, Some(id));
        assert!((m.distance - 4.0).abs() < 2.0 * HIT_EPSILON);
    }
}
