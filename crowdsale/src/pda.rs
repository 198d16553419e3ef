// File: crowdsale/src/pda.rs
// Project: crowdsale-onchain
// Creation date: Monday 12 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 16:37:50
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use crowdsale_common::pda::{CrowdsalePda as _, PdaType};
use crowdsale_macro::pda;
use solana_program::pubkey::Pubkey;

use crate::{
    allocation::ReserveBucket,
    contributors::ContributorRecord,
    ledger::Ledger,
    offering::Offering,
    vesting::{VestingGrant, VestingVault},
};

/// Phase, parameters and counters of the offering, and the aggregates of its token.
///
/// Its lamports above the rent exemption are the custody of the raised funds.
#[pda(kind = PdaType::Offering, seed = "Offering")]
pub struct OfferingPda {
    /// State of the offering
    pub offering: Offering,
    /// Supply and minting state of the token
    pub ledger: Ledger,
}

impl OfferingPda {
    /// Creates a new Offering PDA
    #[must_use]
    pub const fn new(bump: u8, offering: Offering, ledger: Ledger) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            offering,
            ledger,
        }
    }
}

/// A reserve vault. Its address is the vault's identity on the ledger.
#[pda(kind = PdaType::Vault, seed = "Vault", seed = bucket)]
pub struct VaultPda {
    /// Reserve bucket held by the vault
    pub bucket: ReserveBucket,
    /// The vault
    pub vault: VestingVault,
}

impl VaultPda {
    /// Creates a new Vault PDA
    #[must_use]
    pub const fn new(bump: u8, vault: VestingVault) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            bucket: vault.bucket(),
            vault,
        }
    }
}

/// Token balance of a holder.
#[pda(kind = PdaType::Balance, seed = "Balance", seed = holder)]
pub struct BalancePda {
    /// Holder of the tokens
    pub holder: Pubkey,
    /// Amount of tokens held
    pub balance: u128,
}

impl BalancePda {
    /// Creates a new Balance PDA
    #[must_use]
    pub const fn new(bump: u8, holder: Pubkey, balance: u128) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            holder,
            balance,
        }
    }
}

/// Allowance of a spender over an owner's tokens.
#[pda(kind = PdaType::Allowance, seed = "Allowance", seed = owner, seed = spender)]
pub struct AllowancePda {
    /// Holder of the tokens
    pub owner: Pubkey,
    /// Account allowed to move them
    pub spender: Pubkey,
    /// Amount it may still move
    pub amount: u128,
}

impl AllowancePda {
    /// Creates a new Allowance PDA
    #[must_use]
    pub const fn new(bump: u8, owner: Pubkey, spender: Pubkey, amount: u128) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            owner,
            spender,
            amount,
        }
    }
}

/// Whitelist and refund record of a contributor.
#[pda(kind = PdaType::Contributor, seed = "Contributor", seed = contributor)]
pub struct ContributorPda {
    /// The contributor
    pub contributor: Pubkey,
    /// What is known about them
    pub record: ContributorRecord,
}

impl ContributorPda {
    /// Creates a new Contributor PDA
    #[must_use]
    pub const fn new(bump: u8, contributor: Pubkey, record: ContributorRecord) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            contributor,
            record,
        }
    }
}

/// Tokens of a reserve vault locked for a beneficiary.
#[pda(kind = PdaType::Grant, seed = "Grant", seed = bucket, seed = beneficiary)]
pub struct GrantPda {
    /// Reserve bucket of the vault
    pub bucket: ReserveBucket,
    /// Account the tokens will be released to
    pub beneficiary: Pubkey,
    /// The grant
    pub grant: VestingGrant,
}

impl GrantPda {
    /// Creates a new Grant PDA
    #[must_use]
    pub const fn new(
        bump: u8,
        bucket: ReserveBucket,
        beneficiary: Pubkey,
        grant: VestingGrant,
    ) -> Self {
        Self {
            pda_type: Self::PDA_TYPE,
            bump,
            bucket,
            beneficiary,
            grant,
        }
    }
}

/// Identifies one per-account record, and so the PDA holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountKey {
    /// Balance of a holder
    Balance(Pubkey),
    /// Allowance of (owner, spender)
    Allowance(Pubkey, Pubkey),
    /// Record of a contributor
    Contributor(Pubkey),
    /// Vault of a locked reserve
    Vault(ReserveBucket),
    /// Grant of a beneficiary in a vault
    Grant(ReserveBucket, Pubkey),
}

impl AccountKey {
    /// Address and bump of the PDA holding the record.
    #[must_use]
    pub fn address(&self, program_id: &Pubkey) -> (Pubkey, u8) {
        match *self {
            Self::Balance(holder) => BalancePda::get_address(holder, program_id),
            Self::Allowance(owner, spender) => AllowancePda::get_address(owner, spender, program_id),
            Self::Contributor(contributor) => ContributorPda::get_address(contributor, program_id),
            Self::Vault(bucket) => VaultPda::get_address(bucket, program_id),
            Self::Grant(bucket, beneficiary) => {
                GrantPda::get_address(bucket, beneficiary, program_id)
            }
        }
    }
}
