mod board;
mod color;
mod coord;
mod piece;
mod rank;
mod square;

pub use board::*;
pub use color::*;
pub use coord::*;
pub use piece::*;
pub use rank::*;
pub use square::*;
