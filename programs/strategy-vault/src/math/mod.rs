pub mod shares;

pub use shares::*;
