// File: crowdsale/src/allocation.rs
// Project: crowdsale-onchain
// Creation date: Tuesday 06 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Friday 16 October 2026 @ 14:05:47
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use crowdsale_common::pda::Seed;
use shank::ShankType;

/// Number of decimals of the token.
pub const TOKEN_DECIMALS: u32 = 18;

/// One whole token, in base units.
pub const ONE_TOKEN: u128 = 10_u128.pow(TOKEN_DECIMALS);

/// Maximum number of tokens that can ever be minted.
pub const MAX_TOTAL_SUPPLY: u128 = 45_000_000 * ONE_TOKEN;

/// Percentage of the final supply sold to the public.
pub const PERCENT_FOR_SALE: u8 = 50;

/// Delay (in slots) between the successful close of the offering
/// and the release of the vested reserves, about a year of 400ms slots.
pub const VESTING_DELAY: u64 = 78_840_000;

/// Share of the final supply minted to each reserve bucket when the offering succeeds,
/// in minting order.
pub const RESERVE_SHARES: [(ReserveBucket, u8); 4] = [
    (ReserveBucket::Team, 15),
    (ReserveBucket::Developers, 10),
    (ReserveBucket::Country, 10),
    (ReserveBucket::NotLocked, 15),
];

const _: () = {
    let mut total = PERCENT_FOR_SALE as u32;
    let mut idx = 0;
    while idx < RESERVE_SHARES.len() {
        total += RESERVE_SHARES[idx].1 as u32;
        idx += 1;
    }
    assert!(total == 100, "sale and reserve shares must add up to 100%");
};

/// Allocations minted alongside the public sale.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize, ShankType,
)]
pub enum ReserveBucket {
    /// Team members, locked in a vault
    Team,
    /// Developers, locked in a vault
    Developers,
    /// Country / jurisdiction reserve, locked in a vault
    Country,
    /// Freely available allocation
    NotLocked,
}

/// Reserve buckets held in a vesting vault, in the order of the vault accounts.
pub const VESTED_BUCKETS: [ReserveBucket; 3] = [
    ReserveBucket::Team,
    ReserveBucket::Developers,
    ReserveBucket::Country,
];

impl ReserveBucket {
    /// Index of the bucket's vault, `None` for the not-locked allocation.
    #[must_use]
    pub const fn vault_index(self) -> Option<usize> {
        match self {
            Self::Team => Some(0),
            Self::Developers => Some(1),
            Self::Country => Some(2),
            Self::NotLocked => None,
        }
    }
}

impl From<ReserveBucket> for Seed {
    fn from(value: ReserveBucket) -> Self {
        Self::from(value as u8)
    }
}
