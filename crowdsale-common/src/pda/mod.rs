// File: crowdsale-common/src/pda/mod.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 05 October 2026 @ 15:12:40
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

mod account;
mod seed;

pub use account::*;
pub use seed::*;
