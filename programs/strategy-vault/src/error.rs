use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // General (6000-6009)
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Invalid parameter")]
    InvalidParameter,
    #[msg("Unauthorized: signer is not the strategy authority")]
    Unauthorized,
    #[msg("Strategy is paused")]
    StrategyPaused,

    // Configuration (6010-6019)
    #[msg("Invalid configuration: zero or placeholder address")]
    InvalidConfiguration,

    // Share accounting (6020-6029)
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid shares")]
    InvalidShares,

    // External lending pool (6030-6039)
    #[msg("Unsupported lending protocol")]
    UnsupportedProtocol,
    #[msg("Supply did not credit the reserve vault")]
    SupplyFailed,
    #[msg("Redeem did not return the base asset")]
    RedeemFailed,
}
