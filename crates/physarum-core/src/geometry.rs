//! Continuous world coordinates.

use serde::{Deserialize, Serialize};

/// A position in continuous world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point `distance` units away along `angle` (radians).
    pub fn offset(self, angle: f32, distance: f32) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The rectangular world `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// World width in world units.
    pub width: f32,
    /// World height in world units.
    pub height: f32,
}

impl Bounds {
    /// Construct bounds. Validation happens where bounds are configured.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `p` lies in the half-open world rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Largest x coordinate an agent is clamped to at the far edge.
    pub fn max_x(&self) -> f32 {
        (self.width - 1.0).max(0.0)
    }

    /// Largest y coordinate an agent is clamped to at the far edge.
    pub fn max_y(&self) -> f32 {
        (self.height - 1.0).max(0.0)
    }

    /// Clamp `p` onto the inside of the world.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.max_x()),
            y: p.y.clamp(0.0, self.max_y()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn offset_follows_angle() {
        let p = Point::new(10.0, 10.0).offset(FRAC_PI_2, 2.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 12.0).abs() < 1e-5);
    }

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(10.0, 5.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(9.99, 4.99)));
        assert!(!b.contains(Point::new(10.0, 1.0)));
        assert!(!b.contains(Point::new(1.0, 5.0)));
        assert!(!b.contains(Point::new(-0.01, 1.0)));
    }

    proptest! {
        #[test]
        fn clamp_lands_inside(x in -1e4f32..1e4, y in -1e4f32..1e4) {
            let b = Bounds::new(800.0, 600.0);
            prop_assert!(b.contains(b.clamp(Point::new(x, y))));
        }
    }
}
