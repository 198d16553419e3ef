// File: crowdsale/src/engine.rs
// Project: crowdsale-onchain
// Creation date: Friday 09 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 16:08:37
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Offering state machine.
//!
//! Every operation checks everything it can before touching the state, so a
//! failed call leaves the offering untouched. Value leaving the custody is
//! sent only once the bookkeeping is done, and the bookkeeping is reverted if
//! the host can't complete the transfer.
//!
//! Only the aggregates of the offering are held here, the per-account records
//! are read and written one key at a time through the [`Store`].

use core::mem;

use crowdsale_common::{debug, Error, Result};
use solana_program::pubkey::Pubkey;

use crate::{
    access::{AccessGuard, Authority},
    allocation::{ReserveBucket, RESERVE_SHARES, VESTED_BUCKETS},
    bonus::{apply_bonus, bonus_factor},
    contributors::ContributorRecord,
    event::Event,
    ledger::{self, Ledger},
    offering::{Offering, Phase, Thresholds},
    store::{MemoryStore, Store},
    vesting::{VestingGrant, VestingVault},
};

/// What the offering needs from the chain it runs on.
pub trait Host {
    /// Current height of the chain, never decreasing.
    ///
    /// # Errors
    /// If the height could not be read.
    fn current_height(&self) -> Result<u64>;

    /// Moves `amount` lamports from `from` into the offering's custody.
    ///
    /// # Errors
    /// If the transfer failed.
    fn receive(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` lamports from the offering's custody to `to`.
    ///
    /// # Errors
    /// If the transfer failed.
    fn send(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// The aggregates of an offering, persisted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrowdsaleParts {
    /// Phase, parameters and counters
    pub offering: Offering,
    /// Supply and minting state of the token
    pub ledger: Ledger,
}

/// A crowdsale: the offering and everything it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crowdsale<S = MemoryStore> {
    offering: Offering,
    ledger: Ledger,
    store: S,
    events: Vec<Event>,
}

impl<S: Store> Crowdsale<S> {
    /// Creates a new offering in the [`Phase::Initial`] phase and saves its vaults.
    ///
    /// # Parameters
    /// * `address` - Identity of the offering on the ledger,
    /// * `guard` - Privileged identities,
    /// * `vaults` - Team, developers and country vaults, in that order,
    /// * `store` - Where the per-account records are kept.
    ///
    /// # Errors
    /// `OutOfRange` if the vaults are not given in the expected order, or a store error.
    pub fn new(
        address: Pubkey,
        guard: AccessGuard,
        vaults: [VestingVault; 3],
        mut store: S,
    ) -> Result<Self> {
        let in_order = vaults
            .iter()
            .zip(VESTED_BUCKETS)
            .all(|(vault, bucket)| vault.bucket() == bucket);
        if !in_order {
            return Err(Error::OutOfRange);
        }
        for vault in vaults {
            store.set_vault(vault)?;
        }
        Ok(Self::from_parts(
            CrowdsaleParts {
                offering: Offering::new(address, guard),
                ledger: Ledger::default(),
            },
            store,
        ))
    }

    /// Rebuilds an offering from its persisted aggregates and its records.
    #[must_use]
    pub fn from_parts(parts: CrowdsaleParts, store: S) -> Self {
        Self {
            offering: parts.offering,
            ledger: parts.ledger,
            store,
            events: Vec::new(),
        }
    }

    /// Splits the offering into its aggregates, its records and the events not taken yet.
    #[must_use]
    pub fn into_parts(self) -> (CrowdsaleParts, S, Vec<Event>) {
        (
            CrowdsaleParts {
                offering: self.offering,
                ledger: self.ledger,
            },
            self.store,
            self.events,
        )
    }

    /// Takes the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Phase, parameters and counters of the offering.
    #[must_use]
    pub const fn offering(&self) -> &Offering {
        &self.offering
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.offering.phase
    }

    /// Supply and minting state of the token.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Per-account records.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Token balance of an account.
    ///
    /// # Errors
    /// A store error.
    pub fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        self.store.balance(account)
    }

    /// Amount `spender` may still transfer out of `owner`'s balance.
    ///
    /// # Errors
    /// A store error.
    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Result<u128> {
        self.store.allowance(owner, spender)
    }

    /// Whitelist and refund record of a contributor.
    ///
    /// # Errors
    /// A store error.
    pub fn contributor(&self, contributor: &Pubkey) -> Result<ContributorRecord> {
        self.store.contributor(contributor)
    }

    /// Vault of a locked reserve bucket.
    ///
    /// # Errors
    /// `OutOfRange` for the not-locked bucket, or a store error.
    pub fn vault(&self, bucket: ReserveBucket) -> Result<VestingVault> {
        bucket.vault_index().ok_or(Error::OutOfRange)?;
        self.store.vault(bucket)
    }

    /// Grant of a beneficiary in a reserve vault.
    ///
    /// # Errors
    /// `OutOfRange` for the not-locked bucket, or a store error.
    pub fn grant(&self, bucket: ReserveBucket, beneficiary: &Pubkey) -> Result<VestingGrant> {
        bucket.vault_index().ok_or(Error::OutOfRange)?;
        self.store.grant(bucket, beneficiary)
    }

    /// Sets the funding thresholds and derives the token rate.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidPhase` outside of [`Phase::Initial`],
    /// `OutOfRange` if the minimum is above the maximum or the rate can't be computed.
    pub fn configure_thresholds(&mut self, caller: &Pubkey, thresholds: Thresholds) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::Initial])?;
        if thresholds.wei_minimum > thresholds.wei_maximum {
            return Err(Error::OutOfRange);
        }
        let rate = self.offering.rate_for(thresholds.wei_maximum)?;

        self.offering.thresholds = thresholds;
        self.offering.tokens_per_wei = rate;
        debug!("{} tokens per lamport", rate);
        self.move_to(Phase::ValuationSet)
    }

    /// Opens the sale, the silence period starts now.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidPhase` outside of [`Phase::ValuationSet`], or a host error.
    pub fn start_ico<H: Host>(&mut self, caller: &Pubkey, host: &H) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::ValuationSet])?;
        let height = host.current_height()?;

        self.offering.ico_entry_height = height;
        self.move_to(Phase::Ico)
    }

    /// Turns the contribution bonus on or off.
    ///
    /// # Errors
    /// `Unauthorized`, or `InvalidPhase` unless the sale is set up, running or paused.
    pub fn set_bonus_phase(&mut self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering
            .require(&[Phase::ValuationSet, Phase::Ico, Phase::Paused])?;
        self.offering.bonus_phase_enabled = enabled;
        Ok(())
    }

    /// Allows an account to contribute.
    ///
    /// # Errors
    /// `Unauthorized`, or a store error.
    pub fn add_to_whitelist(&mut self, caller: &Pubkey, account: &Pubkey) -> Result<()> {
        self.offering
            .guard
            .check(Authority::WhitelistControl, caller)?;
        let record = ContributorRecord {
            is_whitelisted: true,
            ..self.store.contributor(account)?
        };
        self.store.set_contributor(account, record)?;
        self.events.push(Event::Whitelisted { account: *account });
        Ok(())
    }

    /// Buys tokens with `wei` lamports, returning the amount of tokens minted.
    ///
    /// # Errors
    /// `InvalidPhase` outside of [`Phase::Ico`], `OutOfRange` for a zero amount, above the
    /// funding maximum or past the maximum supply, `Unauthorized` if `from` is not whitelisted,
    /// `WindowClosed` outside of the admission window, a store or a host error.
    pub fn contribute<H: Host>(&mut self, from: &Pubkey, wei: u64, host: &mut H) -> Result<u128> {
        self.offering.require(&[Phase::Ico])?;
        if wei == 0 {
            return Err(Error::OutOfRange);
        }
        let record = self.store.contributor(from)?;
        if !record.is_whitelisted {
            return Err(Error::Unauthorized);
        }
        let height = host.current_height()?;
        if !self.offering.admission_open(height) {
            return Err(Error::WindowClosed);
        }
        let raised = self
            .offering
            .wei_raised
            .checked_add(wei)
            .ok_or(Error::OutOfRange)?;
        if raised > self.offering.thresholds.wei_maximum {
            debug!("{} lamports would exceed the maximum", raised);
            return Err(Error::OutOfRange);
        }

        let before_bonus = u128::from(wei)
            .checked_mul(self.offering.tokens_per_wei)
            .ok_or(Error::OutOfRange)?;
        let factor = bonus_factor(before_bonus, self.offering.bonus_phase_enabled);
        let tokens = apply_bonus(before_bonus, factor)?;
        let sold = self.check_sold(tokens)?;
        let total = self
            .offering
            .total_supply
            .checked_add(tokens)
            .ok_or(Error::OutOfRange)?;
        let custody = self
            .offering
            .custody
            .checked_add(wei)
            .ok_or(Error::OutOfRange)?;
        let record = record.with_contribution(wei)?;
        self.ledger.check_mint(&self.store, from, tokens)?;

        host.receive(from, wei)?;

        self.ledger.mint(&mut self.store, from, tokens)?;
        self.store.set_contributor(from, record)?;
        self.offering.wei_raised = raised;
        self.offering.custody = custody;
        self.offering.sold_tokens = sold;
        self.offering.total_supply = total;
        self.events.push(Event::Mint {
            to: *from,
            amount: tokens,
        });
        self.events.push(Event::Transfer {
            from: None,
            to: *from,
            amount: tokens,
        });
        self.events.push(Event::Contribution {
            contributor: *from,
            wei,
            tokens,
        });
        Ok(tokens)
    }

    /// Mints tokens sold outside of the public sale.
    ///
    /// The supply grows by `amount * 100 / percent_for_sale` so that the
    /// presale keeps the proportion of the public sale.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidPhase` unless the sale is set up or running,
    /// `OutOfRange` for a zero amount, past the maximum supply or on overflow, or a store error.
    pub fn add_presale_amount(
        &mut self,
        caller: &Pubkey,
        beneficiary: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.offering
            .guard
            .check(Authority::TokenAssignmentControl, caller)?;
        self.offering.require(&[Phase::ValuationSet, Phase::Ico])?;
        if amount == 0 {
            return Err(Error::OutOfRange);
        }
        let total = self
            .offering
            .presale_supply(amount)
            .and_then(|supply| {
                self.offering
                    .total_supply
                    .checked_add(supply)
                    .ok_or(Error::OutOfRange)
            })?;
        let sold = self.check_sold(amount)?;
        self.ledger.mint(&mut self.store, beneficiary, amount)?;

        self.offering.total_supply = total;
        self.offering.sold_tokens = sold;
        self.events.push(Event::Mint {
            to: *beneficiary,
            amount,
        });
        self.events.push(Event::Transfer {
            from: None,
            to: *beneficiary,
            amount,
        });
        Ok(())
    }

    /// Tokens sold once `amount` more are sold.
    ///
    /// # Errors
    /// `OutOfRange` if the final supply would go past the maximum supply.
    fn check_sold(&self, amount: u128) -> Result<u128> {
        let sold = self
            .offering
            .sold_tokens
            .checked_add(amount)
            .ok_or(Error::OutOfRange)?;
        if self.offering.presale_supply(sold)? > self.offering.max_total_supply {
            debug!("{} tokens sold would exceed the maximum supply", sold);
            return Err(Error::OutOfRange);
        }
        Ok(sold)
    }

    /// Closes the sale on the state-control authority's request.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidPhase` outside of [`Phase::Ico`], `OutOfRange` if
    /// the reserves can't be minted, a store or a host error.
    pub fn end_ico<H: Host>(&mut self, caller: &Pubkey, host: &H) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::Ico])?;
        let height = host.current_height()?;
        self.close(height)
    }

    /// Closes the sale once its deadline passed, anyone can call it.
    ///
    /// # Errors
    /// `InvalidPhase` outside of [`Phase::Ico`], `WindowClosed` until the end block
    /// is passed, `OutOfRange` if the reserves can't be minted, a store or a host error.
    pub fn anyone_end_ico<H: Host>(&mut self, host: &H) -> Result<()> {
        self.offering.require(&[Phase::Ico])?;
        let height = host.current_height()?;
        if height <= self.offering.thresholds.end_block {
            return Err(Error::WindowClosed);
        }
        self.close(height)
    }

    fn close(&mut self, height: u64) -> Result<()> {
        if self.offering.wei_raised < self.offering.thresholds.wei_minimum {
            debug!(
                "only {} lamports raised out of {}",
                self.offering.wei_raised, self.offering.thresholds.wei_minimum
            );
            return self.move_to(Phase::Underfunded);
        }

        let mut vaults = Vec::with_capacity(VESTED_BUCKETS.len());
        for bucket in VESTED_BUCKETS {
            vaults.push(self.store.vault(bucket)?);
        }
        let final_supply = self.offering.final_supply()?;
        let mut reserves = Vec::with_capacity(RESERVE_SHARES.len());
        let mut reserved = 0_u128;
        for (bucket, share) in RESERVE_SHARES {
            let amount = final_supply
                .checked_mul(u128::from(share))
                .and_then(|scaled| scaled.checked_div(100))
                .ok_or(Error::OutOfRange)?;
            reserved = reserved.checked_add(amount).ok_or(Error::OutOfRange)?;
            let to = match vaults.iter().find(|vault| vault.bucket() == bucket) {
                Some(vault) => *vault.address(),
                None => self.offering.guard.not_locked,
            };
            if amount > 0 {
                self.store.balance(&to)?;
            }
            reserves.push((to, amount));
        }
        // Balances never exceed the supply, so no mint below can overflow.
        self.ledger
            .supply()
            .checked_add(reserved)
            .ok_or(Error::OutOfRange)?;

        for (to, amount) in reserves {
            if amount == 0 {
                continue;
            }
            self.ledger.mint(&mut self.store, &to, amount)?;
            self.events.push(Event::Mint { to, amount });
            self.events.push(Event::Transfer {
                from: None,
                to,
                amount,
            });
        }
        self.ledger.finish_minting();
        self.events.push(Event::MintFinished);

        for mut vault in vaults {
            vault.start(height);
            self.store.set_vault(vault)?;
        }
        self.offering.total_supply = self.ledger.supply();
        self.offering.operational_since = Some(height);
        self.move_to(Phase::Operational)
    }

    /// Suspends the sale.
    ///
    /// # Errors
    /// `Unauthorized` or `InvalidPhase` outside of [`Phase::Ico`].
    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::Ico])?;
        self.move_to(Phase::Paused)
    }

    /// Resumes a paused sale. The silence period is not restarted.
    ///
    /// # Errors
    /// `Unauthorized` or `InvalidPhase` outside of [`Phase::Paused`].
    pub fn resume_ico(&mut self, caller: &Pubkey) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::Paused])?;
        self.move_to(Phase::Ico)
    }

    /// Gives up on a paused sale, contributors can then ask for refunds.
    ///
    /// # Errors
    /// `Unauthorized` or `InvalidPhase` outside of [`Phase::Paused`].
    pub fn abort(&mut self, caller: &Pubkey) -> Result<()> {
        self.offering.guard.check(Authority::StateControl, caller)?;
        self.offering.require(&[Phase::Paused])?;
        self.move_to(Phase::Underfunded)
    }

    /// Withdraws raised lamports to the withdraw-control authority.
    ///
    /// # Errors
    /// `Unauthorized`, `InvalidPhase` outside of [`Phase::Operational`], `OutOfRange`
    /// for a zero amount, `InsufficientFunds` above the custody, or a host error.
    pub fn request_payout<H: Host>(&mut self, caller: &Pubkey, wei: u64, host: &mut H) -> Result<()> {
        self.offering
            .guard
            .check(Authority::WithdrawControl, caller)?;
        self.offering.require(&[Phase::Operational])?;
        if wei == 0 {
            return Err(Error::OutOfRange);
        }
        let custody = self
            .offering
            .custody
            .checked_sub(wei)
            .ok_or(Error::InsufficientFunds)?;

        let previous = mem::replace(&mut self.offering.custody, custody);
        if let Err(err) = host.send(caller, wei) {
            self.offering.custody = previous;
            return Err(err);
        }
        self.events.push(Event::Payout { to: *caller, wei });
        Ok(())
    }

    /// Pays a contributor back, once.
    ///
    /// # Errors
    /// `InvalidPhase` outside of [`Phase::Underfunded`], `AlreadyClaimed` on a second
    /// request, `InsufficientFunds` if nothing was contributed, a store or a host error.
    pub fn request_refund<H: Host>(&mut self, caller: &Pubkey, host: &mut H) -> Result<u64> {
        self.offering.require(&[Phase::Underfunded])?;
        let record = self.store.contributor(caller)?;
        let wei = record.refundable()?;
        let custody = self
            .offering
            .custody
            .checked_sub(wei)
            .ok_or(Error::InsufficientFunds)?;

        self.store.set_contributor(
            caller,
            ContributorRecord {
                refund_claimed: true,
                ..record
            },
        )?;
        let previous = mem::replace(&mut self.offering.custody, custody);
        if let Err(err) = host.send(caller, wei) {
            self.store.set_contributor(caller, record)?;
            self.offering.custody = previous;
            return Err(err);
        }
        self.events.push(Event::Refund {
            contributor: *caller,
            wei,
        });
        Ok(wei)
    }

    /// Moves tokens from the caller to `to`.
    ///
    /// # Errors
    /// `OutOfRange` for a zero amount, `InsufficientFunds` above the caller's balance,
    /// or a store error.
    pub fn transfer(&mut self, caller: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        ledger::transfer(&mut self.store, caller, to, amount)?;
        self.events.push(Event::Transfer {
            from: Some(*caller),
            to: *to,
            amount,
        });
        Ok(())
    }

    /// Sets the allowance of `spender` over the caller's tokens.
    ///
    /// # Errors
    /// A store error.
    pub fn approve(&mut self, caller: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        self.store.allowance(caller, spender)?;
        self.store.set_allowance(caller, spender, amount)?;
        self.push_approval(caller, spender, amount);
        Ok(())
    }

    /// Raises the allowance of `spender` over the caller's tokens.
    ///
    /// # Errors
    /// `OutOfRange` on overflow, or a store error.
    pub fn increase_allowance(
        &mut self,
        caller: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = ledger::increase_allowance(&mut self.store, caller, spender, amount)?;
        self.push_approval(caller, spender, allowance);
        Ok(())
    }

    /// Lowers the allowance of `spender` over the caller's tokens.
    ///
    /// # Errors
    /// `InsufficientFunds` if it would go below zero, or a store error.
    pub fn decrease_allowance(
        &mut self,
        caller: &Pubkey,
        spender: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = ledger::decrease_allowance(&mut self.store, caller, spender, amount)?;
        self.push_approval(caller, spender, allowance);
        Ok(())
    }

    /// Moves tokens from `from` to `to` using the caller's allowance.
    ///
    /// # Errors
    /// `OutOfRange` for a zero amount, `InsufficientFunds` above the allowance or balance,
    /// or a store error.
    pub fn transfer_from(
        &mut self,
        caller: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = ledger::transfer_from(&mut self.store, caller, from, to, amount)?;
        self.events.push(Event::Transfer {
            from: Some(*from),
            to: *to,
            amount,
        });
        self.push_approval(from, caller, allowance);
        Ok(())
    }

    /// Locks `amount` tokens of a reserve vault for a beneficiary, replacing any previous grant.
    ///
    /// # Errors
    /// `OutOfRange` for the not-locked bucket, `Unauthorized` if the caller doesn't own the vault,
    /// `InvalidPhase` before the vault is funded, `WindowClosed` after maturity,
    /// `InsufficientFunds` if the vault doesn't hold enough tokens, a store or a host error.
    pub fn assign_vesting<H: Host>(
        &mut self,
        caller: &Pubkey,
        bucket: ReserveBucket,
        beneficiary: &Pubkey,
        amount: u128,
        host: &H,
    ) -> Result<()> {
        let mut vault = self.vault(bucket)?;
        let height = host.current_height()?;
        let balance = self.store.balance(vault.address())?;
        let current = self.store.grant(bucket, beneficiary)?;
        let grant = vault.assign(caller, current, amount, balance, height)?;

        self.store.set_grant(bucket, beneficiary, grant)?;
        self.store.set_vault(vault)?;
        self.events.push(Event::VestingAssigned {
            bucket,
            beneficiary: *beneficiary,
            amount,
        });
        Ok(())
    }

    /// Moves a matured grant to its beneficiary, anyone can call it.
    /// Returns the amount released.
    ///
    /// # Errors
    /// `OutOfRange` for the not-locked bucket, `InvalidPhase` before the vault is funded,
    /// `WindowClosed` before maturity, `InsufficientFunds` without a grant, a store or a host error.
    pub fn release_vesting<H: Host>(
        &mut self,
        bucket: ReserveBucket,
        beneficiary: &Pubkey,
        host: &H,
    ) -> Result<u128> {
        let mut vault = self.vault(bucket)?;
        let height = host.current_height()?;
        let grant = self.store.grant(bucket, beneficiary)?;
        let amount = vault.release(grant, height)?;
        let address = *vault.address();
        ledger::check_transfer(&self.store, &address, beneficiary, amount)?;

        ledger::transfer(&mut self.store, &address, beneficiary, amount)?;
        self.store
            .set_grant(bucket, beneficiary, VestingGrant::default())?;
        self.store.set_vault(vault)?;
        self.events.push(Event::Transfer {
            from: Some(address),
            to: *beneficiary,
            amount,
        });
        self.events.push(Event::VestingReleased {
            bucket,
            beneficiary: *beneficiary,
            amount,
        });
        Ok(amount)
    }

    /// Moves the tokens sent to the offering's own address to `to`.
    /// Returns the amount rescued.
    ///
    /// # Errors
    /// `Unauthorized`, `InsufficientFunds` if there is nothing to rescue, or a store error.
    pub fn rescue_token(&mut self, caller: &Pubkey, to: &Pubkey) -> Result<u128> {
        self.offering
            .guard
            .check(Authority::TokenAssignmentControl, caller)?;
        let address = self.offering.address;
        let amount = self.store.balance(&address)?;
        if amount == 0 {
            return Err(Error::InsufficientFunds);
        }
        ledger::transfer(&mut self.store, &address, to, amount)?;
        self.events.push(Event::Transfer {
            from: Some(address),
            to: *to,
            amount,
        });
        Ok(amount)
    }

    fn move_to(&mut self, next: Phase) -> Result<()> {
        let old = self.offering.transition(next)?;
        debug!("offering moved from {:?} to {:?}", old, next);
        self.events.push(Event::StateTransition { old, new: next });
        Ok(())
    }

    fn push_approval(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) {
        self.events.push(Event::Approval {
            owner: *owner,
            spender: *spender,
            amount,
        });
    }
}
