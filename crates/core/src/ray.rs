use glam::Vec3;

/// A half-line with a unit-length direction.
///
/// The direction is normalized once at construction and cannot be mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// A zero-length `direction` falls back to +Z.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::Z),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline(always)]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalized() {
        let r = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((r.direction().length() - 1.0).abs() < 1e-6);
        assert!((r.at(5.0) - Vec3::new(0.0, 3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn zero_direction_falls_back() {
        let r = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(r.direction(), Vec3::Z);
    }
}
