use std::fmt;

use euclid::point2;
use getset::{CopyGetters, Setters};

use crate::{CanvasPoint, Shape, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters, Setters)]
pub struct RightTriangle {
    position: CanvasPoint,
    #[getset(get_copy = "pub", set = "pub")]
    base: i32,
    #[getset(get_copy = "pub", set = "pub")]
    height: i32,
}

impl RightTriangle {
    pub fn new(x: i32, y: i32, base: i32, height: i32) -> RightTriangle {
        RightTriangle {
            position: point2(x, y),
            base,
            height,
        }
    }

    pub fn with_size(base: i32, height: i32) -> RightTriangle {
        RightTriangle::new(0, 0, base, height)
    }
}

impl Default for RightTriangle {
    fn default() -> RightTriangle {
        RightTriangle::new(0, 0, 0, 0)
    }
}

impl Shape for RightTriangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RightTriangle
    }

    fn position(&self) -> CanvasPoint {
        self.position
    }

    fn set_position(&mut self, position: CanvasPoint) {
        self.position = position;
    }
}

impl fmt::Display for RightTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Right Triangle at x: {}, y: {} with base: {} and height: {}",
            self.position.x, self.position.y, self.base, self.height
        )
    }
}
