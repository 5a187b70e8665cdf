use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::StrategyInitialized;
use crate::state::{Strategy, StrategyStatus};

#[derive(Accounts)]
pub struct InitializeStrategy<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Strategy::LEN,
        seeds = [STRATEGY_SEED],
        bump,
    )]
    pub strategy: Account<'info, Strategy>,

    /// Base asset supplied to the lending pool
    pub base_mint: Account<'info, Mint>,

    /// Interest-bearing receipt mint credited by the lending pool
    pub reserve_mint: Account<'info, Mint>,

    /// Transit account the base asset moves through on its way in and out
    #[account(
        init,
        payer = authority,
        seeds = [BASE_VAULT_SEED],
        bump,
        token::mint = base_mint,
        token::authority = strategy,
    )]
    pub base_vault: Account<'info, TokenAccount>,

    /// Holds the pooled receipt balance; its amount is the pooled balance
    #[account(
        init,
        payer = authority,
        seeds = [RESERVE_VAULT_SEED],
        bump,
        token::mint = reserve_mint,
        token::authority = strategy,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// CHECK: external lending program; validated in the handler
    pub lending_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeStrategy>) -> Result<()> {
    require!(
        ctx.accounts.base_mint.key() != Pubkey::default(),
        ErrorCode::InvalidConfiguration
    );
    require!(
        ctx.accounts.reserve_mint.key() != ctx.accounts.base_mint.key(),
        ErrorCode::InvalidConfiguration
    );
    require!(
        ctx.accounts.lending_program.key() != Pubkey::default()
            && ctx.accounts.lending_program.executable,
        ErrorCode::InvalidConfiguration
    );

    let clock = Clock::get()?;
    let strategy = &mut ctx.accounts.strategy;

    strategy.authority = ctx.accounts.authority.key();
    strategy.bump = ctx.bumps.strategy;
    strategy.base_mint = ctx.accounts.base_mint.key();
    strategy.reserve_mint = ctx.accounts.reserve_mint.key();
    strategy.base_vault = ctx.accounts.base_vault.key();
    strategy.reserve_vault = ctx.accounts.reserve_vault.key();
    strategy.lending_program = ctx.accounts.lending_program.key();
    strategy.total_shares = 0;
    strategy.total_deposited = 0;
    strategy.total_withdrawn = 0;
    strategy.deposit_count = 0;
    strategy.withdrawal_count = 0;
    strategy.status = StrategyStatus::Active;
    strategy.created_at = clock.unix_timestamp;
    strategy._reserved = [0u8; 64];

    emit!(StrategyInitialized {
        strategy: ctx.accounts.strategy.key(),
        authority: ctx.accounts.authority.key(),
        base_mint: ctx.accounts.base_mint.key(),
        reserve_mint: ctx.accounts.reserve_mint.key(),
        lending_program: ctx.accounts.lending_program.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
