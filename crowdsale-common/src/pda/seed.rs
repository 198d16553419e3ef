// File: crowdsale-common/src/pda/seed.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 14:20:51
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use solana_program::pubkey::Pubkey;

/// A seed used to derive the address of a PDA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    data: Vec<u8>,
}

impl Seed {
    /// Raw bytes of the seed.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<u8> for Seed {
    fn from(value: u8) -> Self {
        Self { data: vec![value] }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self {
            data: value.as_bytes().to_vec(),
        }
    }
}

impl From<Pubkey> for Seed {
    fn from(value: Pubkey) -> Self {
        Self::from(&value)
    }
}

impl From<&Pubkey> for Seed {
    fn from(value: &Pubkey) -> Self {
        Self {
            data: value.to_bytes().to_vec(),
        }
    }
}

impl From<Seed> for Vec<u8> {
    fn from(value: Seed) -> Self {
        value.data
    }
}
