pub mod allocation;
pub mod comparison;
pub mod match_play;
pub mod round;

pub use allocation::*;
pub use comparison::*;
pub use match_play::*;
pub use round::*;
