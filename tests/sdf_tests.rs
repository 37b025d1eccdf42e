//! Distance function tests - surface, inside and outside signs

use glam::Vec3;
use tui_raymarch::core::sdf;

const EPS: f32 = 1e-4;

#[test]
fn test_sphere_surface_and_sign() {
    assert!(sdf::sphere(Vec3::new(2.0, 0.0, 0.0), 2.0).abs() < EPS);
    assert!(sdf::sphere(Vec3::ZERO, 2.0) < 0.0);
    assert!((sdf::sphere(Vec3::new(0.0, 5.0, 0.0), 2.0) - 3.0).abs() < EPS);
}

#[test]
fn test_box_surface_edges_and_corners() {
    let size = Vec3::new(1.0, 2.0, 3.0);
    assert!(sdf::cuboid(Vec3::new(1.0, 0.0, 0.0), size).abs() < EPS);
    assert!(sdf::cuboid(Vec3::new(0.0, 0.0, 3.0), size).abs() < EPS);
    assert!(sdf::cuboid(size, size).abs() < EPS);
    assert!((sdf::cuboid(Vec3::ZERO, size) + 1.0).abs() < EPS);

    // Outside a corner the distance is Euclidean, not per-axis.
    let d = sdf::cuboid(size + Vec3::ONE, size);
    assert!((d - 3f32.sqrt()).abs() < EPS);
}

#[test]
fn test_plane_is_signed_by_normal() {
    assert!(sdf::plane(Vec3::new(3.0, -2.0, 7.0), Vec3::Y, 2.0).abs() < EPS);
    assert!(sdf::plane(Vec3::ZERO, Vec3::Y, 2.0) > 0.0);
    assert!(sdf::plane(Vec3::new(0.0, -3.0, 0.0), Vec3::Y, 2.0) < 0.0);
}

#[test]
fn test_torus_surface() {
    assert!(sdf::torus(Vec3::new(2.5, 0.0, 0.0), 2.0, 0.5).abs() < EPS);
    assert!(sdf::torus(Vec3::new(0.0, 0.5, 2.0), 2.0, 0.5).abs() < EPS);
    assert!((sdf::torus(Vec3::ZERO, 2.0, 0.5) - 1.5).abs() < EPS);
    assert!(sdf::torus(Vec3::new(2.0, 0.0, 0.0), 2.0, 0.5) < 0.0);
}

#[test]
fn test_cylinder_caps_and_side() {
    assert!(sdf::cylinder(Vec3::new(1.0, 0.0, 0.0), 1.0, 2.0).abs() < EPS);
    assert!(sdf::cylinder(Vec3::new(0.0, 2.0, 0.0), 1.0, 2.0).abs() < EPS);
    assert!(sdf::cylinder(Vec3::ZERO, 1.0, 2.0) < 0.0);
    assert!((sdf::cylinder(Vec3::new(0.0, 5.0, 0.0), 1.0, 2.0) - 3.0).abs() < EPS);
}

#[test]
fn test_capsule_surface_and_degenerate_segment() {
    let a = Vec3::new(0.0, -1.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);
    assert!(sdf::capsule(Vec3::new(0.5, 0.0, 0.0), a, b, 0.5).abs() < EPS);
    assert!(sdf::capsule(Vec3::new(0.0, 1.5, 0.0), a, b, 0.5).abs() < EPS);

    // a == b behaves like a sphere and never produces NaN.
    let d = sdf::capsule(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO, 1.0);
    assert!((d - 1.0).abs() < EPS);
}

#[test]
fn test_smooth_union_is_never_above_union() {
    for (d1, d2) in [(0.1, 0.2), (1.0, 1.0), (-0.5, 0.3), (3.0, 0.0)] {
        let hard = sdf::union(d1, d2);
        let soft = sdf::smooth_union(d1, d2, 0.5);
        assert!(soft <= hard + EPS, "{d1} {d2}");
    }
    assert_eq!(sdf::smooth_union(1.0, 2.0, 0.0), 1.0);
}

#[test]
fn test_repeat_tiles_space() {
    let spacing = Vec3::splat(4.0);
    let p = Vec3::new(1.0, -1.0, 0.5);
    let shifted = p + Vec3::new(8.0, -4.0, 12.0);
    assert!((sdf::repeat(shifted, spacing) - p).length() < EPS);
    assert_eq!(
        sdf::repeat(Vec3::new(7.0, 7.0, 7.0), Vec3::new(0.0, 0.0, 0.0)),
        Vec3::splat(7.0)
    );
}

#[test]
fn test_rotate_y_preserves_length_and_height() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let r = sdf::rotate_y(p, 1.1);
    assert!((r.length() - p.length()).abs() < EPS);
    assert_eq!(r.y, 2.0);
}

#[test]
fn test_sierpinski_is_bounded_by_its_tetrahedron() {
    // Far away, folding does not matter much: the fractal is inside its hull.
    let p = Vec3::new(5.0, 5.0, 5.0);
    assert!(sdf::sierpinski_pyramid(p, 0) == sdf::tetrahedron(p));
    assert!(sdf::sierpinski_pyramid(p, 4).is_finite());
}
