// File: crowdsale/src/accounts.rs
// Project: crowdsale-onchain
// Creation date: Monday 19 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 17:21:45
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! The per-account records given to an instruction.

use std::collections::BTreeMap;

use crowdsale_common::{
    check_pda_address, check_pda_owner, debug, pda::CrowdsalePda, Error, Result,
};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    allocation::ReserveBucket,
    contributors::ContributorRecord,
    pda::{AccountKey, AllowancePda, BalancePda, ContributorPda, GrantPda, VaultPda},
    store::Store,
    vesting::{VestingGrant, VestingVault},
};

/// A record and the account holding it.
struct Entry<'a, T> {
    account: AccountInfo<'a>,
    bump: u8,
    /// `None` until the account is created
    value: Option<T>,
    dirty: bool,
}

impl<'a, T> Entry<'a, T> {
    fn load<P: CrowdsalePda>(
        account: &AccountInfo<'a>,
        bump: u8,
        read: impl FnOnce(P) -> T,
    ) -> std::result::Result<Self, ProgramError> {
        let value = if account.lamports() == 0 {
            None
        } else {
            Some(read(P::from_account(account)?))
        };
        Ok(Self {
            account: account.clone(),
            bump,
            value,
            dirty: false,
        })
    }

    fn set(&mut self, value: T) {
        self.value = Some(value);
        self.dirty = true;
    }

    fn changed(&self) -> Option<&T> {
        if self.dirty {
            self.value.as_ref()
        } else {
            None
        }
    }
}

impl<T: Default + PartialEq> Entry<'_, T> {
    /// Value to save, no account is created to hold a default value.
    fn to_save(&self) -> Option<&T> {
        self.changed()
            .filter(|value| self.account.lamports() > 0 || **value != T::default())
    }
}

/// A [`Store`] over the PDAs given to an instruction.
///
/// Only the registered keys can be read or written, any other is
/// [`Error::MissingAccount`]. Changes are kept in memory until [`AccountStore::flush`].
pub struct AccountStore<'a> {
    program_id: Pubkey,
    balances: BTreeMap<Pubkey, Entry<'a, u128>>,
    allowances: BTreeMap<(Pubkey, Pubkey), Entry<'a, u128>>,
    contributors: BTreeMap<Pubkey, Entry<'a, ContributorRecord>>,
    vaults: BTreeMap<ReserveBucket, Entry<'a, VestingVault>>,
    grants: BTreeMap<(ReserveBucket, Pubkey), Entry<'a, VestingGrant>>,
}

impl<'a> AccountStore<'a> {
    /// Creates an empty store for the PDAs of `program_id`.
    #[must_use]
    pub const fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
            contributors: BTreeMap::new(),
            vaults: BTreeMap::new(),
            grants: BTreeMap::new(),
        }
    }

    /// Makes the record of `key` available, loading it if its account exists.
    /// A key given twice keeps its first load.
    ///
    /// # Errors
    /// If the account is not the PDA of `key`, is not owned by the program
    /// or doesn't hold the expected data.
    pub fn register(&mut self, key: AccountKey, account: &AccountInfo<'a>) -> ProgramResult {
        let program_id = &self.program_id;
        let (address, bump) = key.address(program_id);
        check_pda_address!(account, address);
        check_pda_owner!(program_id, account);

        match key {
            AccountKey::Balance(holder) => {
                if !self.balances.contains_key(&holder) {
                    let entry = Entry::load(account, bump, |pda: BalancePda| pda.balance)?;
                    self.balances.insert(holder, entry);
                }
            }
            AccountKey::Allowance(owner, spender) => {
                if !self.allowances.contains_key(&(owner, spender)) {
                    let entry = Entry::load(account, bump, |pda: AllowancePda| pda.amount)?;
                    self.allowances.insert((owner, spender), entry);
                }
            }
            AccountKey::Contributor(contributor) => {
                if !self.contributors.contains_key(&contributor) {
                    let entry = Entry::load(account, bump, |pda: ContributorPda| pda.record)?;
                    self.contributors.insert(contributor, entry);
                }
            }
            AccountKey::Vault(bucket) => {
                if !self.vaults.contains_key(&bucket) {
                    let entry = Entry::load(account, bump, |pda: VaultPda| pda.vault)?;
                    if let Some(vault) = &entry.value {
                        if vault.bucket() != bucket {
                            debug!("expected the {:?} vault, got {:?}", bucket, vault.bucket());
                            return Err(Error::InvalidPdaAddress.into());
                        }
                    }
                    self.vaults.insert(bucket, entry);
                }
            }
            AccountKey::Grant(bucket, beneficiary) => {
                if !self.grants.contains_key(&(bucket, beneficiary)) {
                    let entry = Entry::load(account, bump, |pda: GrantPda| pda.grant)?;
                    self.grants.insert((bucket, beneficiary), entry);
                }
            }
        }
        Ok(())
    }

    /// Writes the changed records to their accounts, creating the missing ones.
    ///
    /// # Parameters
    /// * `payer` - Pays the rent of the created accounts.
    ///
    /// # Errors
    /// If an account could not be created or written.
    pub fn flush(&self, payer: &AccountInfo<'a>) -> ProgramResult {
        let program_id = &self.program_id;
        for (holder, entry) in &self.balances {
            if let Some(balance) = entry.to_save() {
                BalancePda::new(entry.bump, *holder, *balance).save(&entry.account, payer, program_id)?;
            }
        }
        for ((owner, spender), entry) in &self.allowances {
            if let Some(amount) = entry.to_save() {
                AllowancePda::new(entry.bump, *owner, *spender, *amount).save(
                    &entry.account,
                    payer,
                    program_id,
                )?;
            }
        }
        for (contributor, entry) in &self.contributors {
            if let Some(record) = entry.to_save() {
                ContributorPda::new(entry.bump, *contributor, *record).save(
                    &entry.account,
                    payer,
                    program_id,
                )?;
            }
        }
        for entry in self.vaults.values() {
            if let Some(vault) = entry.changed() {
                debug!("writing {:?} vault PDA", vault.bucket());
                VaultPda::new(entry.bump, vault.clone()).save(&entry.account, payer, program_id)?;
            }
        }
        for ((bucket, beneficiary), entry) in &self.grants {
            if let Some(grant) = entry.to_save() {
                GrantPda::new(entry.bump, *bucket, *beneficiary, *grant).save(
                    &entry.account,
                    payer,
                    program_id,
                )?;
            }
        }
        Ok(())
    }
}

impl Store for AccountStore<'_> {
    fn balance(&self, holder: &Pubkey) -> Result<u128> {
        self.balances
            .get(holder)
            .map(|entry| entry.value.unwrap_or_default())
            .ok_or(Error::MissingAccount)
    }

    fn set_balance(&mut self, holder: &Pubkey, balance: u128) -> Result<()> {
        self.balances
            .get_mut(holder)
            .ok_or(Error::MissingAccount)?
            .set(balance);
        Ok(())
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u128> {
        self.allowances
            .get(&(*owner, *spender))
            .map(|entry| entry.value.unwrap_or_default())
            .ok_or(Error::MissingAccount)
    }

    fn set_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        self.allowances
            .get_mut(&(*owner, *spender))
            .ok_or(Error::MissingAccount)?
            .set(amount);
        Ok(())
    }

    fn contributor(&self, contributor: &Pubkey) -> Result<ContributorRecord> {
        self.contributors
            .get(contributor)
            .map(|entry| entry.value.unwrap_or_default())
            .ok_or(Error::MissingAccount)
    }

    fn set_contributor(&mut self, contributor: &Pubkey, record: ContributorRecord) -> Result<()> {
        self.contributors
            .get_mut(contributor)
            .ok_or(Error::MissingAccount)?
            .set(record);
        Ok(())
    }

    fn vault(&self, bucket: ReserveBucket) -> Result<VestingVault> {
        self.vaults
            .get(&bucket)
            .and_then(|entry| entry.value.clone())
            .ok_or(Error::MissingAccount)
    }

    fn set_vault(&mut self, vault: VestingVault) -> Result<()> {
        self.vaults
            .get_mut(&vault.bucket())
            .ok_or(Error::MissingAccount)?
            .set(vault);
        Ok(())
    }

    fn grant(&self, bucket: ReserveBucket, beneficiary: &Pubkey) -> Result<VestingGrant> {
        self.grants
            .get(&(bucket, *beneficiary))
            .map(|entry| entry.value.unwrap_or_default())
            .ok_or(Error::MissingAccount)
    }

    fn set_grant(
        &mut self,
        bucket: ReserveBucket,
        beneficiary: &Pubkey,
        grant: VestingGrant,
    ) -> Result<()> {
        self.grants
            .get_mut(&(bucket, *beneficiary))
            .ok_or(Error::MissingAccount)?
            .set(grant);
        Ok(())
    }
}
