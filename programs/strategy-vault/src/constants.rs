use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const STRATEGY_SEED: &[u8] = b"strategy";
#[constant]
pub const POSITION_SEED: &[u8] = b"position";
#[constant]
pub const BASE_VAULT_SEED: &[u8] = b"base_vault";
#[constant]
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";
