mod arc;
mod bezier;
mod offset;
mod segment;

pub use arc::Arc;
pub use bezier::CubicBezier;
pub use offset::Offset;
pub use segment::Segment;
