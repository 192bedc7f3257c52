pub mod comparison;
pub mod course;
pub mod player;
pub mod round;

pub use comparison::*;
pub use course::*;
pub use player::*;
pub use round::*;
