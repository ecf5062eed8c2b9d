mod adjust;

pub use adjust::{adjust, Adjust, AdjustMethod, AdjustOptions, AdjustSide};
