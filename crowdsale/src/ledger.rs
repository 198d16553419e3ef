// File: crowdsale/src/ledger.rs
// Project: crowdsale-onchain
// Creation date: Wednesday 07 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 15:20:41
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::{debug, Error, Result};
use shank::ShankType;
use solana_program::pubkey::Pubkey;

use crate::store::Store;

/// Aggregates of the token.
///
/// Balances and allowances are kept per account in a [`Store`]: the sum of
/// all balances is always equal to [`Ledger::supply`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, ShankType,
)]
pub struct Ledger {
    supply: u128,
    minting_finished: bool,
}

impl Ledger {
    /// Total amount of tokens minted.
    #[must_use]
    pub const fn supply(&self) -> u128 {
        self.supply
    }

    /// Whether minting has been closed for good.
    #[must_use]
    pub const fn minting_finished(&self) -> bool {
        self.minting_finished
    }

    /// Checks that `amount` can be minted to `to`, without minting it.
    /// Returns the new supply and the new balance of `to`.
    ///
    /// # Errors
    /// `InvalidPhase` once minting is finished, `OutOfRange` on a zero amount or an overflow.
    pub(crate) fn check_mint<S: Store>(
        &self,
        store: &S,
        to: &Pubkey,
        amount: u128,
    ) -> Result<(u128, u128)> {
        if self.minting_finished {
            return Err(Error::InvalidPhase);
        }
        if amount == 0 {
            return Err(Error::OutOfRange);
        }
        let supply = self.supply.checked_add(amount).ok_or(Error::OutOfRange)?;
        let balance = store
            .balance(to)?
            .checked_add(amount)
            .ok_or(Error::OutOfRange)?;
        Ok((supply, balance))
    }

    /// Mints new tokens.
    pub(crate) fn mint<S: Store>(&mut self, store: &mut S, to: &Pubkey, amount: u128) -> Result<()> {
        let (supply, balance) = self.check_mint(store, to, amount)?;
        debug!("minting {} tokens to {}", amount, to);
        store.set_balance(to, balance)?;
        self.supply = supply;
        Ok(())
    }

    /// Closes minting, no token can be created afterwards.
    pub(crate) fn finish_minting(&mut self) {
        self.minting_finished = true;
    }
}

/// New balances of `from` and `to` after moving `amount`, `None` for a self-transfer.
///
/// # Errors
/// `OutOfRange` on a zero amount, `InsufficientFunds` if `from` doesn't hold enough tokens.
pub(crate) fn check_transfer<S: Store>(
    store: &S,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<Option<(u128, u128)>> {
    if amount == 0 {
        return Err(Error::OutOfRange);
    }
    let from_balance = store
        .balance(from)?
        .checked_sub(amount)
        .ok_or(Error::InsufficientFunds)?;
    if from == to {
        return Ok(None);
    }
    let to_balance = store
        .balance(to)?
        .checked_add(amount)
        .ok_or(Error::OutOfRange)?;
    Ok(Some((from_balance, to_balance)))
}

/// Moves tokens between two accounts.
///
/// # Errors
/// See [`check_transfer`].
pub(crate) fn transfer<S: Store>(
    store: &mut S,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<()> {
    if let Some((from_balance, to_balance)) = check_transfer(store, from, to, amount)? {
        store.set_balance(from, from_balance)?;
        store.set_balance(to, to_balance)?;
    }
    Ok(())
}

/// Raises an allowance, returning its new value.
///
/// # Errors
/// `OutOfRange` on overflow.
pub(crate) fn increase_allowance<S: Store>(
    store: &mut S,
    owner: &Pubkey,
    spender: &Pubkey,
    amount: u128,
) -> Result<u128> {
    let allowance = store
        .allowance(owner, spender)?
        .checked_add(amount)
        .ok_or(Error::OutOfRange)?;
    store.set_allowance(owner, spender, allowance)?;
    Ok(allowance)
}

/// Lowers an allowance, returning its new value.
///
/// # Errors
/// `InsufficientFunds` if it would go below zero.
pub(crate) fn decrease_allowance<S: Store>(
    store: &mut S,
    owner: &Pubkey,
    spender: &Pubkey,
    amount: u128,
) -> Result<u128> {
    let allowance = store
        .allowance(owner, spender)?
        .checked_sub(amount)
        .ok_or(Error::InsufficientFunds)?;
    store.set_allowance(owner, spender, allowance)?;
    Ok(allowance)
}

/// Moves tokens on behalf of `from`, consuming `spender`'s allowance.
/// Returns the remaining allowance.
///
/// # Errors
/// `InsufficientFunds` if the allowance or the balance is too low.
pub(crate) fn transfer_from<S: Store>(
    store: &mut S,
    spender: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<u128> {
    let allowance = store
        .allowance(from, spender)?
        .checked_sub(amount)
        .ok_or(Error::InsufficientFunds)?;
    let balances = check_transfer(store, from, to, amount)?;
    store.set_allowance(from, spender, allowance)?;
    if let Some((from_balance, to_balance)) = balances {
        store.set_balance(from, from_balance)?;
        store.set_balance(to, to_balance)?;
    }
    Ok(allowance)
}
