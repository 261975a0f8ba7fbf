//! Projection of a dataset and its fitted line onto a canvas.
//!
//! Renderers receive the dataset and model by shared reference only.
mod bounds;
mod plot;
mod svg;

pub use bounds::Bounds;
pub use plot::{Layout, MARGIN, Plot, Point, Segment};
