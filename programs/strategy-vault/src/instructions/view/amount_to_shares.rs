use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::math::shares::shares_for_amount;
use crate::state::Strategy;

#[derive(Accounts)]
pub struct AmountToShares<'info> {
    #[account(
        seeds = [STRATEGY_SEED],
        bump = strategy.bump,
    )]
    pub strategy: Account<'info, Strategy>,

    #[account(
        constraint = reserve_vault.key() == strategy.reserve_vault @ ErrorCode::InvalidParameter,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,
}

/// Share count equivalent to `amount` at the exchange rate in effect right
/// now; never cached, since the pooled balance moves with accrual.
pub fn handler(ctx: Context<AmountToShares>, amount: u64) -> Result<u64> {
    shares_for_amount(
        amount,
        ctx.accounts.strategy.total_shares,
        ctx.accounts.reserve_vault.amount,
    )
}
