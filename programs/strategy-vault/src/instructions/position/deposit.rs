use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::adapters::lending_adapter::execute_supply;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::Deposited;
use crate::math::shares::shares_for_deposit;
use crate::state::{Position, Strategy};

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STRATEGY_SEED],
        bump = strategy.bump,
        constraint = strategy.authority == authority.key() @ ErrorCode::Unauthorized,
        constraint = strategy.is_active() @ ErrorCode::StrategyPaused,
    )]
    pub strategy: Account<'info, Strategy>,

    #[account(
        init_if_needed,
        payer = authority,
        space = Position::LEN,
        seeds = [POSITION_SEED, &position_id.to_le_bytes()],
        bump,
    )]
    pub position: Account<'info, Position>,

    /// Caller's base-asset token account
    #[account(
        mut,
        constraint = authority_base_account.mint == strategy.base_mint @ ErrorCode::InvalidParameter,
        constraint = authority_base_account.owner == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub authority_base_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = base_vault.key() == strategy.base_vault @ ErrorCode::InvalidParameter,
    )]
    pub base_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = reserve_vault.key() == strategy.reserve_vault @ ErrorCode::InvalidParameter,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// remaining_accounts: [0] = lending program, [1..] = protocol accounts.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Deposit<'info>>,
    position_id: u64,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        !ctx.remaining_accounts.is_empty(),
        ErrorCode::UnsupportedProtocol
    );
    require!(
        ctx.remaining_accounts[0].key() == ctx.accounts.strategy.lending_program,
        ErrorCode::InvalidParameter
    );

    let clock = Clock::get()?;

    // The exchange rate is fixed by the pooled balance observed before this
    // deposit lands.
    let pooled_before = ctx.accounts.reserve_vault.amount;
    let shares_to_mint =
        shares_for_deposit(amount, ctx.accounts.strategy.total_shares, pooled_before)?;
    require!(shares_to_mint > 0, ErrorCode::InvalidAmount);

    let position = &mut ctx.accounts.position;
    if position.created_at == 0 {
        position.position_id = position_id;
        position.shares = 0;
        position.created_at = clock.unix_timestamp;
        position.bump = ctx.bumps.position;
    }

    // Pull the base asset from the caller into the transit vault.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority_base_account.to_account_info(),
                to: ctx.accounts.base_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    // Supply into the lending pool, strategy PDA signing.
    let strategy_key = ctx.accounts.strategy.key();
    let strategy_seeds = &[STRATEGY_SEED, &[ctx.accounts.strategy.bump]];
    let signer_seeds = &[&strategy_seeds[..]];

    execute_supply(ctx.remaining_accounts, amount, &strategy_key, signer_seeds)?;

    // The receipt credit must cover the supplied amount; accrued interest may
    // only push the balance higher.
    ctx.accounts.reserve_vault.reload()?;
    let minimum_credited = pooled_before
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.accounts.reserve_vault.amount >= minimum_credited,
        ErrorCode::SupplyFailed
    );
    let pooled_after = ctx.accounts.reserve_vault.amount;

    let position = &mut ctx.accounts.position;
    position.credit_shares(shares_to_mint)?;
    position.last_updated = clock.unix_timestamp;

    let strategy = &mut ctx.accounts.strategy;
    strategy.record_deposit(shares_to_mint, amount)?;

    emit!(Deposited {
        position_id,
        amount,
        shares_minted: shares_to_mint,
        total_shares: strategy.total_shares,
        pooled_balance: pooled_after,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
