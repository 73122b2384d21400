use std::fmt;

use euclid::point2;
use getset::{CopyGetters, Setters};

use crate::{CanvasPoint, Shape, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters, Setters)]
pub struct Rectangle {
    position: CanvasPoint,
    #[getset(get_copy = "pub", set = "pub")]
    width: i32,
    #[getset(get_copy = "pub", set = "pub")]
    height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
        Rectangle {
            position: point2(x, y),
            width,
            height,
        }
    }

    pub fn with_size(width: i32, height: i32) -> Rectangle {
        Rectangle::new(0, 0, width, height)
    }
}

impl Default for Rectangle {
    fn default() -> Rectangle {
        Rectangle::new(0, 0, 0, 0)
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn position(&self) -> CanvasPoint {
        self.position
    }

    fn set_position(&mut self, position: CanvasPoint) {
        self.position = position;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle at x: {}, y: {} with width: {} and height: {}",
            self.position.x, self.position.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_stores_every_field() {
        let rectangle = Rectangle::new(1, 2, 3, 4);
        assert_eq!(rectangle.position(), point2(1, 2));
        assert_eq!(rectangle.width(), 3);
        assert_eq!(rectangle.height(), 4);
    }

    #[test]
    fn test_with_size_is_at_the_origin() {
        assert_eq!(Rectangle::with_size(10, 20), Rectangle::new(0, 0, 10, 20));
    }

    #[test]
    fn test_describe_line() {
        assert_eq!(
            Rectangle::new(1, 2, 3, 4).describe(),
            "Rectangle at x: 1, y: 2 with width: 3 and height: 4"
        );
    }

    #[test]
    fn test_setters_change_one_dimension_at_a_time() {
        let mut rectangle = Rectangle::default();
        rectangle.set_width(7);
        rectangle.set_height(-2);
        assert_eq!((rectangle.width(), rectangle.height()), (7, -2));
        assert_eq!(
            rectangle.describe(),
            "Rectangle at x: 0, y: 0 with width: 7 and height: -2"
        );
    }
}
