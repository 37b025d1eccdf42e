//! Signed distance functions.
//!
//! Every function here is pure and Lipschitz-bounded (gradient magnitude ~1
//! near the surface), which is what lets the raymarcher step by the returned
//! distance without overshooting.

use glam::{Vec2, Vec3};

pub fn sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Axis-aligned box with half-extents `size`.
pub fn cuboid(p: Vec3, size: Vec3) -> f32 {
    let q = p.abs() - size;
    q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
}

/// Infinite plane `dot(p, normal) + offset = 0`. `normal` must be unit length.
pub fn plane(p: Vec3, normal: Vec3, offset: f32) -> f32 {
    p.dot(normal) + offset
}

/// Torus lying in the XZ plane.
pub fn torus(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(p.x, p.z).length() - major_radius, p.y);
    q.length() - minor_radius
}

/// Capped vertical cylinder; `half_height` measured along Y.
pub fn cylinder(p: Vec3, radius: f32, half_height: f32) -> f32 {
    let d = Vec2::new(Vec2::new(p.x, p.z).length(), p.y).abs() - Vec2::new(radius, half_height);
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
}

/// Capsule around the segment `a..b`.
pub fn capsule(p: Vec3, a: Vec3, b: Vec3, radius: f32) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let len_sq = ba.length_squared();
    // Degenerate segment collapses to a sphere at `a`.
    let h = if len_sq > f32::EPSILON {
        (pa.dot(ba) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (pa - ba * h).length() - radius
}

/// Regular tetrahedron centered at the origin.
pub fn tetrahedron(p: Vec3) -> f32 {
    let md = (-p.x - p.y - p.z)
        .max(p.x + p.y - p.z)
        .max((-p.x + p.y + p.z).max(p.x - p.y + p.z));
    md / 3f32.sqrt()
}

/// Folded Sierpinski pyramid.
pub fn sierpinski_pyramid(mut p: Vec3, iterations: u32) -> f32 {
    const SCALE: f32 = 2.0;
    let offset = Vec3::ONE;

    for _ in 0..iterations {
        if p.x + p.y < 0.0 {
            (p.x, p.y) = (-p.y, -p.x);
        }
        if p.x + p.z < 0.0 {
            (p.x, p.z) = (-p.z, -p.x);
        }
        if p.y + p.z < 0.0 {
            (p.y, p.z) = (-p.z, -p.y);
        }
        p = p * SCALE - offset * (SCALE - 1.0);
    }

    tetrahedron(p) / SCALE.powi(iterations as i32)
}

pub fn union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Carves `d1` out of `d2`.
pub fn subtraction(d1: f32, d2: f32) -> f32 {
    (-d1).max(d2)
}

pub fn intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

/// Polynomial smooth minimum with blend radius `k`.
pub fn smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return union(d1, d2);
    }
    let h = (k - (d1 - d2).abs()).max(0.0) / k;
    d1.min(d2) - h * h * k * 0.25
}

/// Tiles space with cells of size `spacing`, centered on the origin.
pub fn repeat(p: Vec3, spacing: Vec3) -> Vec3 {
    Vec3::new(
        repeat_axis(p.x, spacing.x),
        repeat_axis(p.y, spacing.y),
        repeat_axis(p.z, spacing.z),
    )
}

// A zero spacing leaves the axis untiled.
fn repeat_axis(x: f32, spacing: f32) -> f32 {
    if spacing.abs() <= f32::EPSILON {
        return x;
    }
    let half = spacing * 0.5;
    modulo(x + half, spacing) - half
}

fn modulo(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x * c - p.z * s, p.y, p.x * s + p.z * c)
}
