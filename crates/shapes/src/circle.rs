use std::fmt;

use euclid::point2;
use getset::{CopyGetters, Setters};

use crate::{CanvasPoint, Shape, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters, Setters)]
pub struct Circle {
    position: CanvasPoint,
    #[getset(get_copy = "pub", set = "pub")]
    radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32) -> Circle {
        Circle {
            position: point2(x, y),
            radius,
        }
    }

    /// A circle of the given radius at the origin.
    pub fn with_radius(radius: i32) -> Circle {
        Circle::new(0, 0, radius)
    }
}

impl Default for Circle {
    fn default() -> Circle {
        Circle::new(0, 0, 0)
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn position(&self) -> CanvasPoint {
        self.position
    }

    fn set_position(&mut self, position: CanvasPoint) {
        self.position = position;
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle at x: {}, y: {}, radius: {}",
            self.position.x, self.position.y, self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_stores_position_and_radius() {
        let circle = Circle::new(3, 4, 5);
        assert_eq!(circle.position(), point2(3, 4));
        assert_eq!((circle.x(), circle.y()), (3, 4));
        assert_eq!(circle.radius(), 5);
    }

    #[test]
    fn test_default_circle_is_zeroed() {
        assert_eq!(Circle::default(), Circle::new(0, 0, 0));
        assert_eq!(
            Circle::default().describe(),
            "Circle at x: 0, y: 0, radius: 0"
        );
    }

    #[test]
    fn test_with_radius_places_the_circle_at_the_origin() {
        let circle = Circle::with_radius(9);
        assert_eq!(circle.position(), point2(0, 0));
        assert_eq!(circle.radius(), 9);
    }

    #[test]
    fn test_describe_line() {
        assert_eq!(
            Circle::new(3, 4, 5).describe(),
            "Circle at x: 3, y: 4, radius: 5"
        );
    }

    #[test]
    fn test_negative_radius_is_stored_as_given() {
        let mut circle = Circle::new(2, 3, -4);
        assert_eq!(circle.radius(), -4);
        circle.set_radius(-9);
        assert_eq!(circle.describe(), "Circle at x: 2, y: 3, radius: -9");
    }

    #[test]
    fn test_setting_coordinates_one_at_a_time() {
        let mut circle = Circle::with_radius(1);
        circle.set_x(-5);
        circle.set_y(12);
        assert_eq!(circle.position(), point2(-5, 12));
    }
}
