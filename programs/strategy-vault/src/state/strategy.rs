use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrategyStatus {
    Active,
    Paused,
}

/// Global share ledger. One strategy per deployment: a single base asset
/// supplied into one external lending pool, with many integer-id positions
/// holding proportional claims on the pooled interest-bearing balance.
#[account]
pub struct Strategy {
    pub authority: Pubkey,
    pub bump: u8,

    // Token configuration
    pub base_mint: Pubkey,    // asset supplied to the lending pool
    pub reserve_mint: Pubkey, // interest-bearing receipt mint
    pub base_vault: Pubkey,   // transit account for the base asset
    pub reserve_vault: Pubkey, // holds the pooled receipt balance

    // External lending pool
    pub lending_program: Pubkey,

    // Share ledger. Invariant: equals the sum of all position shares.
    pub total_shares: u64,

    // Lifetime accounting
    pub total_deposited: u128,
    pub total_withdrawn: u128,
    pub deposit_count: u64,
    pub withdrawal_count: u64,

    // Status
    pub status: StrategyStatus,

    // Timestamps
    pub created_at: i64,

    // Reserved for future use
    pub _reserved: [u8; 64],
}

impl Strategy {
    pub const LEN: usize = 8  // discriminator
        + 32  // authority
        + 1   // bump
        + 32  // base_mint
        + 32  // reserve_mint
        + 32  // base_vault
        + 32  // reserve_vault
        + 32  // lending_program
        + 8   // total_shares
        + 16  // total_deposited
        + 16  // total_withdrawn
        + 8   // deposit_count
        + 8   // withdrawal_count
        + 1   // status (enum)
        + 8   // created_at
        + 64; // reserved

    pub fn is_active(&self) -> bool {
        self.status == StrategyStatus::Active
    }

    /// Fold a completed deposit into the ledger totals.
    pub fn record_deposit(&mut self, shares_minted: u64, amount: u64) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_add(shares_minted)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        self.deposit_count = self
            .deposit_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Fold a completed withdrawal into the ledger totals.
    pub fn record_withdrawal(&mut self, shares_burned: u64, amount: u64) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_sub(shares_burned)
            .ok_or(ErrorCode::MathUnderflow)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        self.withdrawal_count = self
            .withdrawal_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_strategy() -> Strategy {
        Strategy {
            authority: Pubkey::default(),
            bump: 255,
            base_mint: Pubkey::default(),
            reserve_mint: Pubkey::default(),
            base_vault: Pubkey::default(),
            reserve_vault: Pubkey::default(),
            lending_program: Pubkey::default(),
            total_shares: 0,
            total_deposited: 0,
            total_withdrawn: 0,
            deposit_count: 0,
            withdrawal_count: 0,
            status: StrategyStatus::Active,
            created_at: 0,
            _reserved: [0u8; 64],
        }
    }

    #[test]
    fn record_deposit_accumulates_totals() {
        let mut strategy = empty_strategy();
        strategy.record_deposit(10, 10).unwrap();
        strategy.record_deposit(5, 10).unwrap();

        assert_eq!(strategy.total_shares, 15);
        assert_eq!(strategy.total_deposited, 20);
        assert_eq!(strategy.deposit_count, 2);
    }

    #[test]
    fn record_withdrawal_burns_shares() {
        let mut strategy = empty_strategy();
        strategy.record_deposit(20, 20).unwrap();
        strategy.record_withdrawal(20, 22).unwrap();

        assert_eq!(strategy.total_shares, 0);
        assert_eq!(strategy.total_withdrawn, 22);
        assert_eq!(strategy.withdrawal_count, 1);
    }

    #[test]
    fn record_withdrawal_rejects_excess_burn() {
        let mut strategy = empty_strategy();
        strategy.record_deposit(10, 10).unwrap();

        assert!(strategy.record_withdrawal(11, 11).is_err());
        // failed burn leaves the ledger untouched
        assert_eq!(strategy.total_shares, 10);
        assert_eq!(strategy.total_withdrawn, 0);
        assert_eq!(strategy.withdrawal_count, 0);
    }

    #[test]
    fn paused_strategy_is_not_active() {
        let mut strategy = empty_strategy();
        assert!(strategy.is_active());
        strategy.status = StrategyStatus::Paused;
        assert!(!strategy.is_active());
    }
}
