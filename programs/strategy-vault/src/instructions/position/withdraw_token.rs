use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::adapters::lending_adapter::execute_redeem;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::Withdrawn;
use crate::math::shares::{amount_for_shares, shares_for_amount_ceil};
use crate::state::{Position, Strategy};

#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct WithdrawToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STRATEGY_SEED],
        bump = strategy.bump,
        constraint = strategy.authority == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub strategy: Account<'info, Strategy>,

    #[account(
        mut,
        seeds = [POSITION_SEED, &position_id.to_le_bytes()],
        bump = position.bump,
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
}

/// Withdraw by target base-asset amount rather than share count.
///
/// Shares to burn are rounded up and the redeemed amount is floor-valued
/// from the burned shares, so a claim can never be paid out twice.
///
/// remaining_accounts: [0] = lending program, [1..] = protocol accounts.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, WithdrawToken<'info>>,
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

    let pooled = ctx.accounts.reserve_vault.amount;
    let total_shares = ctx.accounts.strategy.total_shares;

    let current_value =
        amount_for_shares(ctx.accounts.position.shares, total_shares, pooled)?;
    require!(amount <= current_value, ErrorCode::InvalidAmount);

    let shares_to_burn = shares_for_amount_ceil(amount, total_shares, pooled)?
        .min(ctx.accounts.position.shares);
    require!(shares_to_burn > 0, ErrorCode::InvalidShares);

    let redeem_amount = amount_for_shares(shares_to_burn, total_shares, pooled)?;
    require!(redeem_amount > 0, ErrorCode::InvalidAmount);

    // Redeem from the lending pool, strategy PDA signing.
    let strategy_key = ctx.accounts.strategy.key();
    let strategy_seeds = &[STRATEGY_SEED, &[ctx.accounts.strategy.bump]];
    let signer_seeds = &[&strategy_seeds[..]];

    let base_before = ctx.accounts.base_vault.amount;
    execute_redeem(ctx.remaining_accounts, redeem_amount, &strategy_key, signer_seeds)?;

    ctx.accounts.base_vault.reload()?;
    let minimum_returned = base_before
        .checked_add(redeem_amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.accounts.base_vault.amount >= minimum_returned,
        ErrorCode::RedeemFailed
    );

    // Pay the caller out of the transit vault.
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.base_vault.to_account_info(),
                to: ctx.accounts.authority_base_account.to_account_info(),
                authority: ctx.accounts.strategy.to_account_info(),
            },
            signer_seeds,
        ),
        redeem_amount,
    )?;

    ctx.accounts.reserve_vault.reload()?;
    let pooled_after = ctx.accounts.reserve_vault.amount;

    let position = &mut ctx.accounts.position;
    position.debit_shares(shares_to_burn)?;
    position.last_updated = clock.unix_timestamp;

    let strategy = &mut ctx.accounts.strategy;
    strategy.record_withdrawal(shares_to_burn, redeem_amount)?;

    emit!(Withdrawn {
        position_id,
        shares_burned: shares_to_burn,
        amount_returned: redeem_amount,
        total_shares: strategy.total_shares,
        pooled_balance: pooled_after,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
