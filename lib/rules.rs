mod directions;
mod execute;
mod promotion;
mod sequence;
mod step;

pub use directions::*;
pub use execute::*;
pub use promotion::*;
pub use sequence::*;
pub use step::*;
