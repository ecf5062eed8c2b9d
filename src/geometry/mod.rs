pub mod curve;

pub use curve::{Arc, CubicBezier, Offset, Segment};
