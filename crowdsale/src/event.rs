// File: crowdsale/src/event.rs
// Project: crowdsale-onchain
// Creation date: Friday 09 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Friday 16 October 2026 @ 16:58:45
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use shank::ShankType;
use solana_program::pubkey::Pubkey;

use crate::{allocation::ReserveBucket, offering::Phase};

/// Notifications emitted by the offering, enough to rebuild balances and phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, BorshSerialize, BorshDeserialize, ShankType)]
pub enum Event {
    /// The offering changed phase.
    StateTransition {
        /// Previous phase
        old: Phase,
        /// Current phase
        new: Phase,
    },
    /// An account was added to the whitelist.
    Whitelisted {
        /// Whitelisted account
        account: Pubkey,
    },
    /// Tokens were created.
    Mint {
        /// Receiver of the tokens
        to: Pubkey,
        /// Amount minted
        amount: u128,
    },
    /// Tokens moved (`from` is `None` when minting).
    Transfer {
        /// Sender
        from: Option<Pubkey>,
        /// Receiver
        to: Pubkey,
        /// Amount moved
        amount: u128,
    },
    /// An allowance was set to a new value.
    Approval {
        /// Owner of the tokens
        owner: Pubkey,
        /// Account allowed to spend them
        spender: Pubkey,
        /// New allowance
        amount: u128,
    },
    /// No more tokens can be minted.
    MintFinished,
    /// A contribution was accepted.
    Contribution {
        /// Contributor
        contributor: Pubkey,
        /// Lamports received
        wei: u64,
        /// Tokens minted, bonus included
        tokens: u128,
    },
    /// A contributor got its lamports back.
    Refund {
        /// Contributor
        contributor: Pubkey,
        /// Lamports paid back
        wei: u64,
    },
    /// Raised lamports were withdrawn.
    Payout {
        /// Receiver
        to: Pubkey,
        /// Lamports withdrawn
        wei: u64,
    },
    /// A vesting grant was set.
    VestingAssigned {
        /// Vault of the grant
        bucket: ReserveBucket,
        /// Beneficiary of the grant
        beneficiary: Pubkey,
        /// Locked amount
        amount: u128,
    },
    /// A vesting grant was released.
    VestingReleased {
        /// Vault of the grant
        bucket: ReserveBucket,
        /// Beneficiary of the grant
        beneficiary: Pubkey,
        /// Released amount
        amount: u128,
    },
}
