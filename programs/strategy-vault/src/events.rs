use anchor_lang::prelude::*;

use crate::state::StrategyStatus;

// Admin events
#[event]
pub struct StrategyInitialized {
    pub strategy: Pubkey,
    pub authority: Pubkey,
    pub base_mint: Pubkey,
    pub reserve_mint: Pubkey,
    pub lending_program: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StrategyStatusUpdated {
    pub strategy: Pubkey,
    pub status: StrategyStatus,
    pub timestamp: i64,
}

// Position events
#[event]
pub struct Deposited {
    pub position_id: u64,
    pub amount: u64,
    pub shares_minted: u64,
    pub total_shares: u64,
    pub pooled_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub position_id: u64,
    pub shares_burned: u64,
    pub amount_returned: u64,
    pub total_shares: u64,
    pub pooled_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct PositionClosed {
    pub position_id: u64,
    pub timestamp: i64,
}
