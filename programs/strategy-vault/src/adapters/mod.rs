pub mod account_bridge;
pub mod lending_adapter;
pub mod protocol_ids;

pub use lending_adapter::*;
pub use protocol_ids::*;
