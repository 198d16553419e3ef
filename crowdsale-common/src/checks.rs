// File: crowdsale-common/src/checks.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Tuesday 13 October 2026 @ 10:41:37
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

/// Checks that the given accounts signed the instruction.
#[macro_export]
macro_rules! check_signer {
    () => {};
    ($a:expr) => {
        if !$a.is_signer {
            $crate::debug!("{} did not sign the instruction", $a.key);
            return Err($crate::Error::InvalidSigner.into());
        }
    };
    ($a:expr, $($tail:tt)*) => {
        check_signer!($a);
        check_signer!($($tail)*);
    };
}

/// Check that the given program owns the PDA
#[macro_export]
macro_rules! check_pda_owner {
    ($program_id:ident, $pda:expr $(,)?) => {
        if $pda.lamports() > 0 && $pda.owner != $program_id {
            $crate::debug!("{} has owner {} and not {}", stringify!($pda), $pda.owner, $program_id);
            return Err($crate::Error::InvalidOwner.into());
        }
    };
    ($program_id:ident, $pda:expr $(, $tail:expr)*) => {
        check_pda_owner!($program_id, $pda);
        check_pda_owner!($program_id $(, $tail)*);
    }
}

/// Checks that the given account is the PDA expected at that position.
///
/// # Arguments
/// * `account` - The account to check
/// * `expected` - The address it must have
///
/// # Errors
/// If the account's key does not match
#[macro_export]
macro_rules! check_pda_address {
    ($account:expr, $expected:expr) => {
        if *$account.key != $expected {
            $crate::debug!("{} is not the expected PDA {}", $account.key, $expected);
            return Err($crate::Error::InvalidPdaAddress.into());
        }
    };
}

/// Checks that the given account's key matches the System program ID
///
/// # Arguments
/// * `account` - The account to check
///
/// # Errors
/// If the account's key does not match
#[macro_export]
macro_rules! check_system_program {
    ($id:expr) => {
        if *$id.key != solana_program::system_program::id() {
            return Err($crate::Error::InvalidProgramId.into());
        }
    };
}
