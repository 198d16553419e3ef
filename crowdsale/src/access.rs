// File: crowdsale/src/access.rs
// Project: crowdsale-onchain
// Creation date: Tuesday 06 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Thursday 15 October 2026 @ 09:12:30
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::{debug, Error, Result};
use shank::ShankType;
use solana_program::pubkey::Pubkey;

/// The privileged identities of the offering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType)]
pub enum Authority {
    /// Moves the offering through its phases.
    StateControl,
    /// Adds contributors to the whitelist.
    WhitelistControl,
    /// Withdraws the raised funds once the offering succeeded.
    WithdrawControl,
    /// Assigns presale tokens and rescues stranded tokens.
    TokenAssignmentControl,
    /// Receives the not-locked reserve.
    NotLocked,
}

/// Holds the identity designated for each [`Authority`].
///
/// Set once at initialization, there is no rotation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType)]
pub struct AccessGuard {
    /// Identity moving the offering through its phases.
    pub state_control: Pubkey,
    /// Identity managing the whitelist.
    pub whitelist_control: Pubkey,
    /// Identity allowed to withdraw the funds.
    pub withdraw_control: Pubkey,
    /// Identity assigning presale tokens.
    pub token_assignment_control: Pubkey,
    /// Beneficiary of the not-locked reserve.
    pub not_locked: Pubkey,
}

impl AccessGuard {
    /// Get the identity holding an authority.
    #[must_use]
    pub const fn get(&self, authority: Authority) -> &Pubkey {
        match authority {
            Authority::StateControl => &self.state_control,
            Authority::WhitelistControl => &self.whitelist_control,
            Authority::WithdrawControl => &self.withdraw_control,
            Authority::TokenAssignmentControl => &self.token_assignment_control,
            Authority::NotLocked => &self.not_locked,
        }
    }

    /// Checks that `caller` holds the given authority.
    ///
    /// # Errors
    /// `Unauthorized` if it doesn't.
    pub fn check(&self, authority: Authority, caller: &Pubkey) -> Result<()> {
        if self.get(authority) == caller {
            Ok(())
        } else {
            debug!("{} does not hold the {:?} authority", caller, authority);
            Err(Error::Unauthorized)
        }
    }
}
