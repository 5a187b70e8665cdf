use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

/// CPI plumbing for the external lending programs.
///
/// The strategy's vaults are owned by the strategy PDA, so every supply and
/// redeem call into a lending protocol is signed with the strategy's seeds.
/// Account metas are rebuilt from the caller-provided remaining_accounts:
///   remaining_accounts[0] = lending program (executable)
///   remaining_accounts[1..] = protocol-specific accounts (reserve, vaults, …)

/// Build a CPI instruction from remaining_accounts and invoke it with the
/// strategy PDA as signer. The PDA cannot sign the outer transaction, so its
/// meta is promoted to signer here and the signature is supplied by
/// `invoke_signed` from the seeds.
pub fn invoke_lending_cpi_signed<'info>(
    program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    data: Vec<u8>,
    strategy_key: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let account_metas: Vec<AccountMeta> = accounts
        .iter()
        .map(|a| {
            let is_signer = a.is_signer || a.key == strategy_key;
            if a.is_writable {
                AccountMeta::new(*a.key, is_signer)
            } else {
                AccountMeta::new_readonly(*a.key, is_signer)
            }
        })
        .collect();

    let ix = Instruction {
        program_id: *program.key,
        accounts: account_metas,
        data,
    };

    let mut all_accounts = vec![program.clone()];
    all_accounts.extend_from_slice(accounts);

    anchor_lang::solana_program::program::invoke_signed(&ix, &all_accounts, signer_seeds)?;
    Ok(())
}
