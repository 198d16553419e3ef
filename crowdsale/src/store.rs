// File: crowdsale/src/store.rs
// Project: crowdsale-onchain
// Creation date: Monday 19 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 15:02:18
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Per-account records of the offering.
//!
//! Balances, allowances, contributor records and vesting grants grow with the
//! number of holders, so the engine never holds them all at once: it reads and
//! writes them one key at a time through a [`Store`].

use std::collections::BTreeMap;

use crowdsale_common::{Error, Result};
use solana_program::pubkey::Pubkey;

use crate::{
    allocation::ReserveBucket,
    contributors::ContributorRecord,
    vesting::{VestingGrant, VestingVault},
};

/// Keyed records of the offering.
///
/// Unknown holders, allowances, contributors and grants read as zero / default.
/// A store may refuse a key it can't reach with [`Error::MissingAccount`].
pub trait Store {
    /// Token balance of a holder.
    ///
    /// # Errors
    /// If the record can't be read.
    fn balance(&self, holder: &Pubkey) -> Result<u128>;

    /// Sets the token balance of a holder.
    ///
    /// # Errors
    /// If the record can't be written.
    fn set_balance(&mut self, holder: &Pubkey, balance: u128) -> Result<()>;

    /// Amount `spender` may transfer out of `owner`'s balance.
    ///
    /// # Errors
    /// If the record can't be read.
    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u128>;

    /// Sets the allowance of `spender` over `owner`'s balance.
    ///
    /// # Errors
    /// If the record can't be written.
    fn set_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()>;

    /// Whitelist and refund record of a contributor.
    ///
    /// # Errors
    /// If the record can't be read.
    fn contributor(&self, contributor: &Pubkey) -> Result<ContributorRecord>;

    /// Saves the record of a contributor.
    ///
    /// # Errors
    /// If the record can't be written.
    fn set_contributor(&mut self, contributor: &Pubkey, record: ContributorRecord) -> Result<()>;

    /// Vault of a locked reserve bucket.
    ///
    /// # Errors
    /// `MissingAccount` if the vault doesn't exist.
    fn vault(&self, bucket: ReserveBucket) -> Result<VestingVault>;

    /// Saves a vault.
    ///
    /// # Errors
    /// If the vault can't be written.
    fn set_vault(&mut self, vault: VestingVault) -> Result<()>;

    /// Grant of a beneficiary in a vault.
    ///
    /// # Errors
    /// If the record can't be read.
    fn grant(&self, bucket: ReserveBucket, beneficiary: &Pubkey) -> Result<VestingGrant>;

    /// Saves the grant of a beneficiary, a zero amount clears it.
    ///
    /// # Errors
    /// If the record can't be written.
    fn set_grant(
        &mut self,
        bucket: ReserveBucket,
        beneficiary: &Pubkey,
        grant: VestingGrant,
    ) -> Result<()>;
}

/// A [`Store`] kept in memory, every key is reachable.
///
/// Zero balances, allowances and grants are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    balances: BTreeMap<Pubkey, u128>,
    allowances: BTreeMap<(Pubkey, Pubkey), u128>,
    contributors: BTreeMap<Pubkey, ContributorRecord>,
    vaults: BTreeMap<ReserveBucket, VestingVault>,
    grants: BTreeMap<(ReserveBucket, Pubkey), VestingGrant>,
}

impl MemoryStore {
    /// Sum of all the balances.
    #[must_use]
    pub fn total_balance(&self) -> u128 {
        self.balances.values().sum()
    }

    /// Number of accounts holding tokens.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Number of known contributors, whitelisted or not.
    #[must_use]
    pub fn contributors(&self) -> usize {
        self.contributors.len()
    }
}

impl Store for MemoryStore {
    fn balance(&self, holder: &Pubkey) -> Result<u128> {
        Ok(self.balances.get(holder).copied().unwrap_or_default())
    }

    fn set_balance(&mut self, holder: &Pubkey, balance: u128) -> Result<()> {
        if balance == 0 {
            self.balances.remove(holder);
        } else {
            self.balances.insert(*holder, balance);
        }
        Ok(())
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u128> {
        Ok(self
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default())
    }

    fn set_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        if amount == 0 {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
        Ok(())
    }

    fn contributor(&self, contributor: &Pubkey) -> Result<ContributorRecord> {
        Ok(self
            .contributors
            .get(contributor)
            .copied()
            .unwrap_or_default())
    }

    fn set_contributor(&mut self, contributor: &Pubkey, record: ContributorRecord) -> Result<()> {
        self.contributors.insert(*contributor, record);
        Ok(())
    }

    fn vault(&self, bucket: ReserveBucket) -> Result<VestingVault> {
        self.vaults.get(&bucket).cloned().ok_or(Error::MissingAccount)
    }

    fn set_vault(&mut self, vault: VestingVault) -> Result<()> {
        self.vaults.insert(vault.bucket(), vault);
        Ok(())
    }

    fn grant(&self, bucket: ReserveBucket, beneficiary: &Pubkey) -> Result<VestingGrant> {
        Ok(self
            .grants
            .get(&(bucket, *beneficiary))
            .copied()
            .unwrap_or_default())
    }

    fn set_grant(
        &mut self,
        bucket: ReserveBucket,
        beneficiary: &Pubkey,
        grant: VestingGrant,
    ) -> Result<()> {
        if grant.locked_amount == 0 {
            self.grants.remove(&(bucket, *beneficiary));
        } else {
            self.grants.insert((bucket, *beneficiary), grant);
        }
        Ok(())
    }
}
