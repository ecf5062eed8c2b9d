pub mod error;
pub mod geometry;
pub mod laws;
pub mod math;
pub mod operations;
pub mod parametric;

pub use error::{ParametricError, Result};
pub use operations::{adjust, Adjust, AdjustMethod, AdjustOptions, AdjustSide};
pub use parametric::{
    ArcLength, Codomain, CodomainKind, DomainBounds, EndValues, Parametric, SectionPrimitive,
    Sectionable,
};
