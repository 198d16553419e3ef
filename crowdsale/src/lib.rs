// File: crowdsale/src/lib.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 17:52:26
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Crowdsale token engine: a phased offering selling a capped supply,
//! its token ledger, the refunds of an underfunded sale and the vesting of the reserves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod accounts;
mod allocation;
mod bonus;
mod contributors;
mod engine;
#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
mod event;
mod instruction;
mod ledger;
mod offering;
mod pda;
mod processor;
mod store;
mod vesting;

// Only make public elements that would be useful.
/// Roles of the offering.
pub use access::{AccessGuard, Authority};
/// Supply split and vesting delay.
pub use allocation::*;
/// Purchase bonus schedule.
pub use bonus::{apply_bonus, bonus_factor, BONUS_TABLE, NEUTRAL_FACTOR};
/// Contributors' whitelist and refund records.
pub use contributors::ContributorRecord;
/// The offering engine and its host.
pub use engine::{Crowdsale, CrowdsaleParts, Host};
/// Events logged by the program.
pub use event::Event;
/// Instructions for the crowdsale program.
pub use instruction::*;
/// Supply and minting state of the token.
pub use ledger::Ledger;
/// Phases and parameters of the offering.
pub use offering::{Offering, Phase, Thresholds};
/// The PDAs holding the program's state.
pub use pda::{
    AccountKey, AllowancePda, BalancePda, ContributorPda, GrantPda, OfferingPda, VaultPda,
};
/// Per-account records of the offering.
pub use store::{MemoryStore, Store};
/// Handles the dispatch of the processing operations (only used in tests).
pub use processor::process_instruction;
/// Reserve vaults.
pub use vesting::{VestingGrant, VestingVault};

// Set the program's ID.
include!(concat!(env!("OUT_DIR"), "/program_id.rs"));

// Set the security.txt data
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Crowdsale Program",
    project_url: "https://github.com/crowdsale-onchain/crowdsale-onchain",
    contacts: "email:security@crowdsale-onchain.dev",
    policy: "none at this time",

    // Optional
    preferred_languages: "en"
}
