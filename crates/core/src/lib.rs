//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the geometry and lighting half of the pipeline:
//! distance functions, the scene, the camera, the sphere-tracing loop and
//! shading. It has **no** terminal, threading or I/O dependencies:
//!
//! - **Deterministic**: the same scene, camera and settings always produce the same colors
//! - **Total**: invalid object indices and empty scenes resolve to sentinels, never panics
//! - **Thread-safe by construction**: every query takes `&self`, so a frame can be
//!   rendered from many threads against one read-only snapshot
//!
//! # Module Structure
//!
//! - [`sdf`]: primitive distance functions, combinators and domain operators
//! - [`scene`]: ordered shape instances and nearest-surface queries
//! - [`presets`]: built-in scenes
//! - [`camera`]: first-person camera and primary ray generation
//! - [`ray`]: unit-direction rays
//! - [`raymarch`]: the sphere-tracing loop
//! - [`shading`]: hit/miss to color token
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use tui_raymarch_core::{march, Camera, MarchLimits, Scene};
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::new(1.0, 0.3, 0.3));
//!
//! let camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
//! let ray = camera.ray(40, 12, 80, 24);
//! let hit = march(&scene, &ray, MarchLimits::new(80, 100.0));
//!
//! assert_eq!(hit.object, Some(ball));
//! assert!((hit.distance - 4.0).abs() < 0.01);
//! ```

pub mod camera;
pub mod presets;
pub mod ray;
pub mod raymarch;
pub mod scene;
pub mod sdf;
pub mod shading;

pub use tui_raymarch_types as types;

// Re-export commonly used types for convenience
pub use camera::{Camera, CameraPose};
pub use ray::Ray;
pub use raymarch::{march, March, MarchLimits};
pub use scene::{Nearest, Scene, SceneObject, Shape};
pub use shading::{background, shade, shade_march, ColorMapping, ShadeParams};
