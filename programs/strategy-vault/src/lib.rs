#![allow(ambiguous_glob_reexports)]

pub mod adapters;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("HCiHNgC88wQPNdUf6NfqD7CzXYQdFMQ8dW4BzMBHb39W");

#[program]
pub mod strategy_vault {
    use super::*;

    // ── Admin ───────────────────────────────────────────────

    pub fn initialize_strategy(ctx: Context<InitializeStrategy>) -> Result<()> {
        instructions::admin::initialize_strategy::handler(ctx)
    }

    pub fn set_strategy_status(
        ctx: Context<SetStrategyStatus>,
        status: StrategyStatus,
    ) -> Result<()> {
        instructions::admin::set_strategy_status::handler(ctx, status)
    }

    // ── Positions ───────────────────────────────────────────

    pub fn deposit<'info>(
        ctx: Context<'_, '_, 'info, 'info, Deposit<'info>>,
        position_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::position::deposit::handler(ctx, position_id, amount)
    }

    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        position_id: u64,
        shares: u64,
    ) -> Result<()> {
        instructions::position::withdraw::handler(ctx, position_id, shares)
    }

    pub fn withdraw_token<'info>(
        ctx: Context<'_, '_, 'info, 'info, WithdrawToken<'info>>,
        position_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::position::withdraw_token::handler(ctx, position_id, amount)
    }

    pub fn withdraw_all<'info>(
        ctx: Context<'_, '_, 'info, 'info, WithdrawAll<'info>>,
        position_id: u64,
    ) -> Result<()> {
        instructions::position::withdraw_all::handler(ctx, position_id)
    }

    // ── Views ───────────────────────────────────────────────

    pub fn position_value(ctx: Context<PositionValue>, position_id: u64) -> Result<u64> {
        instructions::view::position_value::handler(ctx, position_id)
    }

    pub fn amount_to_shares(ctx: Context<AmountToShares>, amount: u64) -> Result<u64> {
        instructions::view::amount_to_shares::handler(ctx, amount)
    }
}
