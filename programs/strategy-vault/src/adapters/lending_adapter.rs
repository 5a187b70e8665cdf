use anchor_lang::prelude::*;

use crate::adapters::account_bridge::invoke_lending_cpi_signed;
use crate::adapters::protocol_ids::{detect_lending_protocol, LendingProtocol};
use crate::error::ErrorCode;

/// Supply `amount` of the base asset into the external lending pool.
///
/// remaining_accounts layout:
///   [0] = Lending program ID (executable)
///   [1..] = Protocol-specific accounts
#[allow(unused_variables)]
pub fn execute_supply<'info>(
    remaining_accounts: &[AccountInfo<'info>],
    amount: u64,
    strategy_key: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    require!(
        !remaining_accounts.is_empty(),
        ErrorCode::UnsupportedProtocol
    );

    let lending_program = &remaining_accounts[0];
    let protocol = detect_lending_protocol(lending_program.key);

    require!(
        protocol != LendingProtocol::Unknown,
        ErrorCode::UnsupportedProtocol
    );

    let accounts = &remaining_accounts[1..];

    match protocol {
        #[cfg(feature = "kamino-lend")]
        LendingProtocol::Kamino => {
            // Kamino klend depositReserveLiquidity:
            //   discriminator(8) + liquidityAmount(8) = 16 bytes
            //   Accounts (9): owner, reserve, lendingMarket, lendingMarketAuthority,
            //     reserveLiquiditySupply, reserveCollateralMint,
            //     userSourceLiquidity, userDestinationCollateral, tokenProgram
            require!(accounts.len() >= 9, ErrorCode::InvalidParameter);
            let mut data = Vec::with_capacity(16);
            data.extend_from_slice(&[169, 201, 30, 126, 6, 205, 102, 68]); // depositReserveLiquidity
            data.extend_from_slice(&amount.to_le_bytes());
            invoke_lending_cpi_signed(lending_program, accounts, data, strategy_key, signer_seeds)
        }
        #[cfg(feature = "jupiter-lend")]
        LendingProtocol::Jupiter => {
            require!(accounts.len() >= 4, ErrorCode::InvalidParameter);
            let mut data = Vec::with_capacity(16);
            data.extend_from_slice(&[0xd3, 0xb4, 0x06, 0x5e, 0xc4, 0xa3, 0x71, 0x5c]);
            data.extend_from_slice(&amount.to_le_bytes());
            invoke_lending_cpi_signed(lending_program, accounts, data, strategy_key, signer_seeds)
        }
        LendingProtocol::Unknown => Err(ErrorCode::UnsupportedProtocol.into()),
    }
}

/// Redeem `amount` of the base asset from the external lending pool back
/// into the strategy's custody.
#[allow(unused_variables)]
pub fn execute_redeem<'info>(
    remaining_accounts: &[AccountInfo<'info>],
    amount: u64,
    strategy_key: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    require!(
        !remaining_accounts.is_empty(),
        ErrorCode::UnsupportedProtocol
    );

    let lending_program = &remaining_accounts[0];
    let protocol = detect_lending_protocol(lending_program.key);

    require!(
        protocol != LendingProtocol::Unknown,
        ErrorCode::UnsupportedProtocol
    );

    let accounts = &remaining_accounts[1..];

    match protocol {
        #[cfg(feature = "kamino-lend")]
        LendingProtocol::Kamino => {
            // Kamino klend redeemReserveCollateral:
            //   discriminator(8) + collateralAmount(8) = 16 bytes
            //   Accounts (9): owner, lendingMarket, reserve, lendingMarketAuthority,
            //     reserveCollateralMint, reserveLiquiditySupply,
            //     userSourceCollateral, userDestinationLiquidity, tokenProgram
            require!(accounts.len() >= 9, ErrorCode::InvalidParameter);
            let mut data = Vec::with_capacity(16);
            data.extend_from_slice(&[234, 117, 181, 125, 185, 142, 220, 29]); // redeemReserveCollateral
            data.extend_from_slice(&amount.to_le_bytes());
            invoke_lending_cpi_signed(lending_program, accounts, data, strategy_key, signer_seeds)
        }
        #[cfg(feature = "jupiter-lend")]
        LendingProtocol::Jupiter => {
            require!(accounts.len() >= 4, ErrorCode::InvalidParameter);
            let mut data = Vec::with_capacity(16);
            data.extend_from_slice(&[0xa1, 0xc2, 0xd3, 0xe4, 0xf5, 0x06, 0x17, 0x28]);
            data.extend_from_slice(&amount.to_le_bytes());
            invoke_lending_cpi_signed(lending_program, accounts, data, strategy_key, signer_seeds)
        }
        LendingProtocol::Unknown => Err(ErrorCode::UnsupportedProtocol.into()),
    }
}
