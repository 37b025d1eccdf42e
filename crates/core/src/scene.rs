//! Scene: a flat, ordered list of shape instances.
//!
//! Object indices are stable for as long as the scene is not mutated and are
//! used as the hit identity for a frame. Queries are a linear scan over all
//! objects; there is no spatial index, so scenes are expected to stay in the
//! tens of objects.

use glam::Vec3;

use crate::sdf;
use crate::types::{NORMAL_EPSILON, SENTINEL_COLOR, SENTINEL_DISTANCE};

/// Shape kind with its geometric parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Box {
        center: Vec3,
        half_extents: Vec3,
    },
    /// `dot(p, normal) + offset = 0`
    Plane {
        normal: Vec3,
        offset: f32,
    },
    Torus {
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
    },
    Cylinder {
        center: Vec3,
        radius: f32,
        half_height: f32,
    },
    /// Vertical capsule spanning `center ± (0, half_height, 0)`.
    Capsule {
        center: Vec3,
        radius: f32,
        half_height: f32,
    },
}

impl Shape {
    #[inline]
    pub fn distance(&self, p: Vec3) -> f32 {
        match *self {
            Shape::Sphere { center, radius } => sdf::sphere(p - center, radius),
            Shape::Box {
                center,
                half_extents,
            } => sdf::cuboid(p - center, half_extents),
            Shape::Plane { normal, offset } => sdf::plane(p, normal, offset),
            Shape::Torus {
                center,
                major_radius,
                minor_radius,
            } => sdf::torus(p - center, major_radius, minor_radius),
            Shape::Cylinder {
                center,
                radius,
                half_height,
            } => sdf::cylinder(p - center, radius, half_height),
            Shape::Capsule {
                center,
                radius,
                half_height,
            } => {
                let offset = Vec3::new(0.0, half_height, 0.0);
                sdf::capsule(p, center - offset, center + offset, radius)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    /// Material color, normalized 0-1 RGB.
    pub color: Vec3,
}

/// Result of a nearest-surface query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub distance: f32,
    /// `None` when the scene is empty.
    pub object: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    time: f32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Seconds accumulated through [`Scene::advance`].
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Sets the animation clock back to zero.
    pub fn rewind(&mut self) {
        self.time = 0.0;
    }

    /// Removes every object. Previously returned indices become invalid.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn add(&mut self, shape: Shape, color: Vec3) -> usize {
        self.objects.push(SceneObject { shape, color });
        self.objects.len() - 1
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32, color: Vec3) -> usize {
        self.add(Shape::Sphere { center, radius }, color)
    }

    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, color: Vec3) -> usize {
        self.add(
            Shape::Box {
                center,
                half_extents,
            },
            color,
        )
    }

    pub fn add_plane(&mut self, normal: Vec3, offset: f32, color: Vec3) -> usize {
        let normal = normal.try_normalize().unwrap_or(Vec3::Y);
        self.add(Shape::Plane { normal, offset }, color)
    }

    pub fn add_torus(
        &mut self,
        center: Vec3,
        major_radius: f32,
        minor_radius: f32,
        color: Vec3,
    ) -> usize {
        self.add(
            Shape::Torus {
                center,
                major_radius,
                minor_radius,
            },
            color,
        )
    }

    pub fn add_cylinder(&mut self, center: Vec3, radius: f32, half_height: f32, color: Vec3) -> usize {
        self.add(
            Shape::Cylinder {
                center,
                radius,
                half_height,
            },
            color,
        )
    }

    pub fn add_capsule(&mut self, center: Vec3, radius: f32, half_height: f32, color: Vec3) -> usize {
        self.add(
            Shape::Capsule {
                center,
                radius,
                half_height,
            },
            color,
        )
    }

    /// Closest surface to `p` and the index of the object that owns it.
    ///
    /// Ties keep the earlier object.
    pub fn nearest_surface(&self, p: Vec3) -> Nearest {
        let mut best = Nearest {
            distance: SENTINEL_DISTANCE,
            object: None,
        };
        for (i, obj) in self.objects.iter().enumerate() {
            let d = obj.shape.distance(p);
            if d < best.distance {
                best.distance = d;
                best.object = Some(i);
            }
        }
        best
    }

    /// Distance from `p` to the nearest surface, ignoring identity.
    pub fn distance(&self, p: Vec3) -> f32 {
        self.nearest_surface(p).distance
    }

    /// Distance to one object; [`SENTINEL_DISTANCE`] for an invalid index.
    pub fn distance_to(&self, p: Vec3, index: usize) -> f32 {
        match self.objects.get(index) {
            Some(obj) => obj.shape.distance(p),
            None => SENTINEL_DISTANCE,
        }
    }

    /// Forward-difference surface normal of one object at `p`.
    pub fn normal_at(&self, p: Vec3, index: usize) -> Vec3 {
        forward_difference(p, |q| self.distance_to(q, index))
    }

    /// Forward-difference normal of the whole scene's distance field.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        forward_difference(p, |q| self.distance(q))
    }

    /// Material color, or neutral gray for an invalid index.
    pub fn color_of(&self, index: usize) -> Vec3 {
        match self.objects.get(index) {
            Some(obj) => obj.color,
            None => Vec3::from_array(SENTINEL_COLOR),
        }
    }
}

fn forward_difference(p: Vec3, f: impl Fn(Vec3) -> f32) -> Vec3 {
    let d = f(p);
    let g = Vec3::new(
        f(p + Vec3::new(NORMAL_EPSILON, 0.0, 0.0)) - d,
        f(p + Vec3::new(0.0, NORMAL_EPSILON, 0.0)) - d,
        f(p + Vec3::new(0.0, 0.0, NORMAL_EPSILON)) - d,
    );
    // A flat gradient (e.g. sentinel distance) has no direction; point up.
    g.try_normalize().unwrap_or(Vec3::Y)
}
