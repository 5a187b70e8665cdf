pub mod position;
pub mod strategy;

pub use position::*;
pub use strategy::*;
