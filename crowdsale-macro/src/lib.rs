// File: crowdsale-macro/src/lib.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 14:43:30
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Procedural macros of the crowdsale programs.

mod pda;
use pda::impl_pda;

use proc_macro::TokenStream;

/// Implements the boilerplate of a PDA: type tag and bump fields,
/// the `CrowdsalePda` trait and `get_address`, with one parameter per field seed.
///
/// ```ignore
/// #[pda(kind = PdaType::Grant, seed = "Grant", seed = bucket, seed = beneficiary)]
/// pub struct GrantPda { pub bucket: ReserveBucket, pub beneficiary: Pubkey }
/// ```
#[proc_macro_attribute]
pub fn pda(attrs: TokenStream, input: TokenStream) -> TokenStream {
    impl_pda(attrs, input)
}
