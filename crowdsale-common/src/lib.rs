// File: crowdsale-common/src/lib.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Friday 16 October 2026 @ 18:02:11
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Definitions of errors, account helpers and utilities shared by the crowdsale programs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod checks;
mod error;
/// Definition of the program's PDAs
pub mod pda;

pub use error::{Error, Result};

/// Only output messages if in debug mode.
#[macro_export]
macro_rules! debug {
    ($($msg:expr),+$(,)?) => {
        #[cfg(feature = "debug-msg")]
        solana_program::msg!($($msg,)+)
    };
}

/// Get the current height of the chain (the slot on Solana).
///
/// # Errors
/// If the clock could not be obtained
pub fn get_height() -> Result<u64> {
    use solana_program::{clock::Clock, sysvar::Sysvar as _};
    let clock = Clock::get().map_err(|_err| Error::Clock)?;
    Ok(clock.slot)
}
