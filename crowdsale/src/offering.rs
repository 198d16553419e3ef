// File: crowdsale/src/offering.rs
// Project: crowdsale-onchain
// Creation date: Thursday 08 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Saturday 17 October 2026 @ 17:40:02
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::{debug, Error, Result};
use shank::ShankType;
use solana_program::pubkey::Pubkey;

use crate::{
    access::AccessGuard,
    allocation::{MAX_TOTAL_SUPPLY, PERCENT_FOR_SALE},
};

/// Phases of the offering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType)]
pub enum Phase {
    /// Waiting for the funding thresholds.
    Initial,
    /// Thresholds and rate are set, the sale hasn't started.
    ValuationSet,
    /// Contributions are accepted.
    Ico,
    /// The minimum was not reached (or the sale was aborted): contributors get refunds.
    Underfunded,
    /// The sale succeeded and the reserves were minted.
    Operational,
    /// The sale is suspended.
    Paused,
}

/// Every phase change allowed, the rest are rejected.
const TRANSITIONS: [(Phase, Phase); 7] = [
    (Phase::Initial, Phase::ValuationSet),
    (Phase::ValuationSet, Phase::Ico),
    (Phase::Ico, Phase::Underfunded),
    (Phase::Ico, Phase::Operational),
    (Phase::Ico, Phase::Paused),
    (Phase::Paused, Phase::Ico),
    (Phase::Paused, Phase::Underfunded),
];

impl Phase {
    /// Whether the offering can go from `self` to `next`.
    #[must_use]
    pub fn can_become(self, next: Self) -> bool {
        TRANSITIONS.contains(&(self, next))
    }
}

/// Funding limits and admission window of the sale.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType,
)]
pub struct Thresholds {
    /// Lamports needed for the sale to succeed (inclusive).
    pub wei_minimum: u64,
    /// Maximum lamports accepted (inclusive).
    pub wei_maximum: u64,
    /// Slots after the start of the sale during which contributions are refused.
    pub silence_blocks: u64,
    /// Last slot at which contributions are accepted.
    pub end_block: u64,
}

/// State of the offering.
#[derive(Debug, Clone, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType)]
pub struct Offering {
    /// Identity of the offering on the ledger.
    pub address: Pubkey,
    /// Privileged identities.
    pub guard: AccessGuard,
    /// Current phase.
    pub phase: Phase,
    /// Funding limits and admission window.
    pub thresholds: Thresholds,
    /// Share of the final supply sold to the public.
    pub percent_for_sale: u8,
    /// Maximum supply of tokens.
    pub max_total_supply: u128,
    /// Tokens (base units) bought by one lamport, before bonus.
    pub tokens_per_wei: u128,
    /// Tokens sold through contributions and presale.
    pub sold_tokens: u128,
    /// Supply of tokens accounted by the sale.
    pub total_supply: u128,
    /// Whether contributions get a bonus.
    pub bonus_phase_enabled: bool,
    /// Height at which the sale started, the silence period counts from it.
    pub ico_entry_height: u64,
    /// Height at which the sale succeeded.
    pub operational_since: Option<u64>,
    /// Lamports contributed over the whole sale.
    pub wei_raised: u64,
    /// Lamports currently held for contributors or withdrawal.
    pub custody: u64,
}

impl Offering {
    /// Creates an offering in the [`Phase::Initial`] phase.
    #[must_use]
    pub const fn new(address: Pubkey, guard: AccessGuard) -> Self {
        Self {
            address,
            guard,
            phase: Phase::Initial,
            thresholds: Thresholds {
                wei_minimum: 0,
                wei_maximum: 0,
                silence_blocks: 0,
                end_block: 0,
            },
            percent_for_sale: PERCENT_FOR_SALE,
            max_total_supply: MAX_TOTAL_SUPPLY,
            tokens_per_wei: 0,
            sold_tokens: 0,
            total_supply: 0,
            bonus_phase_enabled: false,
            ico_entry_height: 0,
            operational_since: None,
            wei_raised: 0,
            custody: 0,
        }
    }

    /// Checks that the offering is in one of the given phases.
    ///
    /// # Errors
    /// `InvalidPhase` otherwise.
    pub fn require(&self, phases: &[Phase]) -> Result<()> {
        if phases.contains(&self.phase) {
            Ok(())
        } else {
            debug!("operation not allowed in phase {:?}", self.phase);
            Err(Error::InvalidPhase)
        }
    }

    /// Moves to the next phase, returning the previous one.
    ///
    /// # Errors
    /// `InvalidPhase` if the change is not allowed.
    pub fn transition(&mut self, next: Phase) -> Result<Phase> {
        let previous = self.phase;
        if !previous.can_become(next) {
            debug!("cannot go from {:?} to {:?}", previous, next);
            return Err(Error::InvalidPhase);
        }
        self.phase = next;
        Ok(previous)
    }

    /// Computes the tokens per lamport for a funding maximum.
    ///
    /// # Errors
    /// `OutOfRange` if the maximum is zero or the rate would be zero.
    pub fn rate_for(&self, wei_maximum: u64) -> Result<u128> {
        let rate = self
            .max_total_supply
            .checked_mul(u128::from(self.percent_for_sale))
            .and_then(|supply| supply.checked_div(100))
            .and_then(|for_sale| for_sale.checked_div(u128::from(wei_maximum)))
            .ok_or(Error::OutOfRange)?;
        if rate == 0 {
            return Err(Error::OutOfRange);
        }
        Ok(rate)
    }

    /// Whether contributions are admitted at `height`.
    #[must_use]
    pub fn admission_open(&self, height: u64) -> bool {
        let opens = self
            .ico_entry_height
            .saturating_add(self.thresholds.silence_blocks);
        opens <= height && height <= self.thresholds.end_block
    }

    /// Scales a presale amount into the supply it stands for.
    ///
    /// # Errors
    /// `OutOfRange` on overflow.
    pub fn presale_supply(&self, amount: u128) -> Result<u128> {
        amount
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_div(u128::from(self.percent_for_sale)))
            .ok_or(Error::OutOfRange)
    }

    /// Final supply once the reserves are minted, from the tokens sold.
    ///
    /// # Errors
    /// `OutOfRange` on overflow.
    pub fn final_supply(&self) -> Result<u128> {
        self.presale_supply(self.sold_tokens)
    }
}
