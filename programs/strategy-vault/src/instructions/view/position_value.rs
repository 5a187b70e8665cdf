use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::math::shares::amount_for_shares;
use crate::state::{Position, Strategy};

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct PositionValue<'info> {
    #[account(
        seeds = [STRATEGY_SEED],
        bump = strategy.bump,
    )]
    pub strategy: Account<'info, Strategy>,

    #[account(
        seeds = [POSITION_SEED, &position_id.to_le_bytes()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    #[account(
        constraint = reserve_vault.key() == strategy.reserve_vault @ ErrorCode::InvalidParameter,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,
}

/// Current redeemable value of the position, at the live exchange rate.
pub fn handler(ctx: Context<PositionValue>, _position_id: u64) -> Result<u64> {
    amount_for_shares(
        ctx.accounts.position.shares,
        ctx.accounts.strategy.total_shares,
        ctx.accounts.reserve_vault.amount,
    )
}
