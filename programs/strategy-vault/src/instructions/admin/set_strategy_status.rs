use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::StrategyStatusUpdated;
use crate::state::{Strategy, StrategyStatus};

#[derive(Accounts)]
pub struct SetStrategyStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STRATEGY_SEED],
        bump = strategy.bump,
        constraint = strategy.authority == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub strategy: Account<'info, Strategy>,
}

pub fn handler(ctx: Context<SetStrategyStatus>, status: StrategyStatus) -> Result<()> {
    let clock = Clock::get()?;
    let strategy = &mut ctx.accounts.strategy;

    strategy.status = status;

    emit!(StrategyStatusUpdated {
        strategy: strategy.key(),
        status,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
