pub mod comparison;
pub mod history;
pub mod index;
pub mod scorecard;
