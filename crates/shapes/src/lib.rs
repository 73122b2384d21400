use std::fmt::{self, Debug};

use dyn_clone::DynClone;
use strum_macros::{Display, EnumIter};

pub mod circle;
pub mod rectangle;
pub mod right_triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use right_triangle::RightTriangle;

/// Where a shape sits on the canvas.
pub type CanvasPoint = euclid::default::Point2D<i32>;

/// An owned shape of any variant.
pub type ShapeObject = Box<dyn Shape>;

#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, EnumIter, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    #[strum(serialize = "Right Triangle")]
    RightTriangle,
}

impl ShapeKind {
    pub fn default_shape(self) -> ShapeObject {
        match self {
            ShapeKind::Circle => Box::new(Circle::default()),
            ShapeKind::Rectangle => Box::new(Rectangle::default()),
            ShapeKind::RightTriangle => Box::new(RightTriangle::default()),
        }
    }
}

/// A drawable element. Every variant carries a position plus its own
/// dimensions, and renders itself as a one-line description.
pub trait Shape: DynClone + Debug + fmt::Display {
    fn kind(&self) -> ShapeKind;
    fn position(&self) -> CanvasPoint;
    fn set_position(&mut self, position: CanvasPoint);

    fn x(&self) -> i32 {
        self.position().x
    }
    fn y(&self) -> i32 {
        self.position().y
    }
    fn set_x(&mut self, x: i32) {
        let mut position = self.position();
        position.x = x;
        self.set_position(position);
    }
    fn set_y(&mut self, y: i32) {
        let mut position = self.position();
        position.y = y;
        self.set_position(position);
    }
    fn describe(&self) -> String {
        self.to_string()
    }
}
dyn_clone::clone_trait_object!(Shape);
