use anchor_lang::prelude::*;

// ── Lending protocol program IDs ─────────────────────────────────────
// The strategy routes supply/redeem calls by checking remaining_accounts[0]
// against these known program IDs. Protocols are opt-in via Cargo.toml
// feature flags; an unrecognized program id is rejected before any CPI.

#[allow(unused_imports)]
pub mod lending_protocols {
    use anchor_lang::pubkey;
    use anchor_lang::solana_program::pubkey::Pubkey;

    /// Kamino Finance klend — devnet program ID
    #[cfg(feature = "kamino-lend")]
    pub const KAMINO: Pubkey = pubkey!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");

    /// Jupiter Earn — devnet program ID
    #[cfg(feature = "jupiter-lend")]
    pub const JUPITER: Pubkey = pubkey!("7tjE28izRUjzmxC1QNXnNwcc4N82CNYCexf3k8mw67s3");
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LendingProtocol {
    #[cfg(feature = "kamino-lend")]
    Kamino,
    #[cfg(feature = "jupiter-lend")]
    Jupiter,
    Unknown,
}

/// Detect which lending protocol from a program ID (remaining_accounts[0]).
pub fn detect_lending_protocol(program_id: &Pubkey) -> LendingProtocol {
    #[cfg(feature = "kamino-lend")]
    if *program_id == lending_protocols::KAMINO {
        return LendingProtocol::Kamino;
    }
    #[cfg(feature = "jupiter-lend")]
    if *program_id == lending_protocols::JUPITER {
        return LendingProtocol::Jupiter;
    }
    let _ = program_id;
    LendingProtocol::Unknown
}
