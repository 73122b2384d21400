pub mod canvas_list;
pub mod error;

pub use canvas_list::{CanvasList, IntoIter, Iter};
pub use error::CanvasError;
