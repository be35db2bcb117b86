pub mod dict;
pub mod error;
pub mod geometry;

pub use error::{DictError, Result};
pub use geometry::{Point, Rect, RectEdge, Size, Vector, EPSILON};
