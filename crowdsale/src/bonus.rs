// File: crowdsale/src/bonus.rs
// Project: crowdsale-onchain
// Creation date: Tuesday 06 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Tuesday 13 October 2026 @ 16:44:09
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use crowdsale_common::{Error, Result};

use crate::allocation::ONE_TOKEN;

/// Factor applied when the bonus phase is off (x1000 factor).
pub const NEUTRAL_FACTOR: u16 = 1_000;

/// Bonus breakpoints: (minimum tokens before bonus, factor x1000), ordered by threshold.
pub const BONUS_TABLE: [(u128, u16); 5] = [
    (0, 1_200),
    (10_000 * ONE_TOKEN, 1_225),
    (50_000 * ONE_TOKEN, 1_250),
    (100_000 * ONE_TOKEN, 1_275),
    (500_000 * ONE_TOKEN, 1_300),
];

/// Get the bonus factor (x1000) for a contribution worth `tokens` before bonus.
#[must_use]
pub fn bonus_factor(tokens: u128, enabled: bool) -> u16 {
    if !enabled {
        return NEUTRAL_FACTOR;
    }
    BONUS_TABLE
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= tokens)
        .map_or(NEUTRAL_FACTOR, |(_, factor)| *factor)
}

/// Applies a bonus factor (x1000) to an amount of tokens, rounding down.
///
/// # Errors
/// `OutOfRange` on overflow.
pub fn apply_bonus(tokens: u128, factor: u16) -> Result<u128> {
    tokens
        .checked_mul(u128::from(factor))
        .and_then(|scaled| scaled.checked_div(u128::from(NEUTRAL_FACTOR)))
        .ok_or(Error::OutOfRange)
}
