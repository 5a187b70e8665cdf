pub mod deposit;
pub mod withdraw;
pub mod withdraw_all;
pub mod withdraw_token;

pub use deposit::*;
pub use withdraw::*;
pub use withdraw_all::*;
pub use withdraw_token::*;
