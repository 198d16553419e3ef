// File: crowdsale/src/vesting.rs
// Project: crowdsale-onchain
// Creation date: Thursday 08 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 15:41:12
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::{debug, Error, Result};
use shank::ShankType;
use solana_program::pubkey::Pubkey;

use crate::allocation::{ReserveBucket, VESTING_DELAY};

/// Tokens locked for a beneficiary until maturity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, ShankType,
)]
pub struct VestingGrant {
    /// Locked amount of tokens.
    pub locked_amount: u128,
    /// Height from which the grant can be released.
    pub maturity: u64,
}

/// Holds the tokens of a reserve bucket.
///
/// The vault's tokens live on the ledger under [`VestingVault::address`], its grants
/// are kept per beneficiary next to it. The sum of the grants is kept in
/// `assigned_balance` and never exceeds the vault's balance.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct VestingVault {
    bucket: ReserveBucket,
    address: Pubkey,
    owner: Pubkey,
    maturity: Option<u64>,
    assigned_balance: u128,
}

impl VestingVault {
    /// Creates an empty vault.
    ///
    /// # Parameters
    /// * `bucket` - Reserve bucket held by the vault,
    /// * `address` - Identity of the vault on the ledger,
    /// * `owner` - Identity allowed to assign grants.
    #[must_use]
    pub const fn new(bucket: ReserveBucket, address: Pubkey, owner: Pubkey) -> Self {
        Self {
            bucket,
            address,
            owner,
            maturity: None,
            assigned_balance: 0,
        }
    }

    /// Reserve bucket held by the vault.
    #[must_use]
    pub const fn bucket(&self) -> ReserveBucket {
        self.bucket
    }

    /// Identity of the vault on the ledger.
    #[must_use]
    pub const fn address(&self) -> &Pubkey {
        &self.address
    }

    /// Identity allowed to assign grants.
    #[must_use]
    pub const fn owner(&self) -> &Pubkey {
        &self.owner
    }

    /// Height from which grants can be released, once the vault is funded.
    #[must_use]
    pub const fn maturity(&self) -> Option<u64> {
        self.maturity
    }

    /// Sum of all the grants.
    #[must_use]
    pub const fn assigned_balance(&self) -> u128 {
        self.assigned_balance
    }

    /// Starts the vesting period once the vault received its reserve.
    pub(crate) fn start(&mut self, height: u64) {
        let maturity = height.saturating_add(VESTING_DELAY);
        debug!("{:?} vault matures at {}", self.bucket, maturity);
        self.maturity = Some(maturity);
    }

    /// Sets (not adds to) the locked amount of a beneficiary, returning the new grant.
    ///
    /// # Parameters
    /// * `caller` - Must be the vault's owner,
    /// * `current` - Current grant of the beneficiary,
    /// * `amount` - New locked amount, zero clears the grant,
    /// * `vault_balance` - Tokens held by the vault on the ledger,
    /// * `height` - Current height.
    ///
    /// # Errors
    /// `Unauthorized` if not called by the owner, `InvalidPhase` before the vault is funded,
    /// `WindowClosed` after maturity, `InsufficientFunds` if the grants would exceed the vault's balance.
    pub(crate) fn assign(
        &mut self,
        caller: &Pubkey,
        current: VestingGrant,
        amount: u128,
        vault_balance: u128,
        height: u64,
    ) -> Result<VestingGrant> {
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        let maturity = self.maturity.ok_or(Error::InvalidPhase)?;
        if height >= maturity {
            return Err(Error::WindowClosed);
        }
        let assigned = self
            .assigned_balance
            .checked_sub(current.locked_amount)
            .and_then(|others| others.checked_add(amount))
            .ok_or(Error::OutOfRange)?;
        if assigned > vault_balance {
            return Err(Error::InsufficientFunds);
        }

        self.assigned_balance = assigned;
        if amount == 0 {
            Ok(VestingGrant::default())
        } else {
            Ok(VestingGrant {
                locked_amount: amount,
                maturity,
            })
        }
    }

    /// Takes a matured grant out of the vault, returning the amount to move to the beneficiary.
    ///
    /// # Errors
    /// `InvalidPhase` before the vault is funded, `WindowClosed` before maturity,
    /// `InsufficientFunds` if the beneficiary has no grant.
    pub(crate) fn release(&mut self, grant: VestingGrant, height: u64) -> Result<u128> {
        let maturity = self.maturity.ok_or(Error::InvalidPhase)?;
        if height < maturity {
            return Err(Error::WindowClosed);
        }
        let amount = grant.locked_amount;
        if amount == 0 {
            return Err(Error::InsufficientFunds);
        }
        self.assigned_balance = self
            .assigned_balance
            .checked_sub(amount)
            .ok_or(Error::UnknownError)?;
        Ok(amount)
    }
}
