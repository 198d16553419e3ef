// File: crowdsale/src/contributors.rs
// Project: crowdsale-onchain
// Creation date: Wednesday 07 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 15:26:07
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::{Error, Result};
use shank::ShankType;

/// What is known about a contributor.
///
/// Unknown contributors read as the default record. Records are never removed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, ShankType,
)]
pub struct ContributorRecord {
    /// Allowed to contribute during the sale.
    pub is_whitelisted: bool,
    /// Cumulative lamports contributed, which is also the refund entitlement.
    pub wei_contributed: u64,
    /// The refund has been paid.
    pub refund_claimed: bool,
}

impl ContributorRecord {
    /// The record after a contribution of `wei`.
    ///
    /// # Errors
    /// `OutOfRange` on overflow.
    pub fn with_contribution(self, wei: u64) -> Result<Self> {
        let wei_contributed = self
            .wei_contributed
            .checked_add(wei)
            .ok_or(Error::OutOfRange)?;
        Ok(Self {
            wei_contributed,
            ..self
        })
    }

    /// Amount that would be refunded to the contributor.
    ///
    /// # Errors
    /// `AlreadyClaimed` if the refund was paid, `InsufficientFunds` if nothing was contributed.
    pub fn refundable(&self) -> Result<u64> {
        if self.refund_claimed {
            return Err(Error::AlreadyClaimed);
        }
        if self.wei_contributed == 0 {
            return Err(Error::InsufficientFunds);
        }
        Ok(self.wei_contributed)
    }
}
