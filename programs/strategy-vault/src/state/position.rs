use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Per-id claim on the pooled balance.
///
/// Seeds: ["position", position_id]. The strategy is a singleton, so it is
/// not stored here; all positions belong to the single Strategy account.
/// A position is created implicitly by the first deposit to its id and is
/// Empty once its shares reach zero.
#[account]
pub struct Position {
    pub position_id: u64,
    pub shares: u64,
    pub created_at: i64,
    pub last_updated: i64,
    pub bump: u8,

    // Reserved for future use
    pub _reserved: [u8; 32],
}

impl Position {
    pub const LEN: usize = 8  // discriminator
        + 8   // position_id
        + 8   // shares
        + 8   // created_at
        + 8   // last_updated
        + 1   // bump
        + 32; // reserved

    pub fn is_empty(&self) -> bool {
        self.shares == 0
    }

    pub fn credit_shares(&mut self, shares: u64) -> Result<()> {
        self.shares = self
            .shares
            .checked_add(shares)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn debit_shares(&mut self, shares: u64) -> Result<()> {
        self.shares = self
            .shares
            .checked_sub(shares)
            .ok_or(ErrorCode::MathUnderflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_position(id: u64) -> Position {
        Position {
            position_id: id,
            shares: 0,
            created_at: 1_700_000_000,
            last_updated: 1_700_000_000,
            bump: 254,
            _reserved: [0u8; 32],
        }
    }

    #[test]
    fn credit_then_debit_round_trips_to_empty() {
        let mut position = fresh_position(1);
        position.credit_shares(10).unwrap();
        position.credit_shares(10).unwrap();
        assert_eq!(position.shares, 20);
        assert!(!position.is_empty());

        position.debit_shares(20).unwrap();
        assert!(position.is_empty());
    }

    #[test]
    fn debit_beyond_balance_fails_without_mutation() {
        let mut position = fresh_position(7);
        position.credit_shares(3).unwrap();

        assert!(position.debit_shares(4).is_err());
        assert_eq!(position.shares, 3);
    }
}
