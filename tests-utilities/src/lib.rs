// File: tests-utilities/src/lib.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 05 October 2026 @ 14:02:11
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

//! Helpers shared by the On-Chain tests of the crowdsale programs.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::print_stdout)]

pub mod onchain;
