// File: crowdsale/src/entrypoint.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 05 October 2026 @ 16:12:09
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, msg,
    program_error::ProgramError, pubkey::Pubkey,
};

use crate::{check_id, processor::process_instruction as process};

entrypoint!(process_instruction);

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if !check_id(program_id) {
        msg!(
            "Invalid program ID: expected {}, got {}",
            crate::ID,
            program_id
        );
        return Err(ProgramError::IncorrectProgramId);
    }
    process(program_id, accounts, instruction_data)
}
