// File: crowdsale-common/src/pda/account.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 14:36:40
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use shank::ShankType;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction::{create_account, transfer},
    sysvar::Sysvar,
};

use crate::{debug, Error};

/// Define the type of account for a PDA.
///
/// This is a security requirement to make sure that a PDA of one type can't be used for
/// something else than it was supposed to be.
#[derive(Clone, Copy, Debug, BorshSerialize, BorshDeserialize, PartialEq, Eq, ShankType)]
pub enum PdaType {
    /// Phase, parameters and counters of the offering.
    Offering,
    /// Header of a reserve vault.
    Vault,
    /// Token balance of a holder.
    Balance,
    /// Allowance of a spender over an owner's tokens.
    Allowance,
    /// Whitelist and refund record of a contributor.
    Contributor,
    /// Locked grant of a beneficiary in a reserve vault.
    Grant,
}

/// Common properties of a crowdsale PDA
pub trait CrowdsalePda: BorshDeserialize + BorshSerialize {
    /// The type of the PDA
    const PDA_TYPE: PdaType;

    /// Get the PDA's bump
    fn get_bump(&self) -> u8;

    /// Checks that a PDA has the expected [`PdaType`]
    fn is_valid(&self) -> bool;

    /// Get the seeds used to sign the PDA's address.
    fn seeds(&self) -> Vec<Vec<u8>>;

    /// Loads a PDA data from an account.
    ///
    /// # Parameters
    /// * `account` - Account from which to read the data
    ///
    /// # Errors
    /// If the given account does not contain the expected data.
    fn from_account(account: &AccountInfo) -> Result<Self, ProgramError>
    where
        Self: Sized,
    {
        let data = account.try_borrow_data()?;
        let res = Self::try_from_slice(&data).map_err(|_err| Error::InvalidRawData)?;
        if !res.is_valid() {
            return Err(Error::InvalidPdaType.into());
        }
        Ok(res)
    }

    /// Saves the PDA, creating its account on the first write.
    ///
    /// # Errors
    /// See [`CrowdsalePda::create`] and [`CrowdsalePda::write`].
    fn save<'a>(
        &self,
        account: &AccountInfo<'a>,
        payer: &AccountInfo<'a>,
        program_id: &Pubkey,
    ) -> ProgramResult {
        if account.lamports() == 0 {
            self.create(account, payer, program_id)
        } else {
            self.write(account, payer)
        }
    }

    /// Checks that the account is the one derived from the PDA's seeds and bump.
    ///
    /// # Errors
    /// If the addresses don't match.
    fn check_address(&self, account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
        let seeds = self.seeds();
        let seeds = seeds.iter().map(Vec::as_slice).collect::<Vec<_>>();
        match Pubkey::create_program_address(&seeds, program_id) {
            Ok(address) if address == *account.key => Ok(()),
            _ => {
                debug!("{} is not the expected {:?} PDA", account.key, Self::PDA_TYPE);
                Err(Error::InvalidPdaAddress.into())
            }
        }
    }

    /// Update the PDA's data.
    ///
    /// # Parameters
    /// * `account` - The account on which the PDA is saved,
    /// * `payer` - The transaction paying account (used in case `realloc` necessary).
    ///
    /// # Errors
    /// If the account was never created or the PDA failed to be serialized.
    fn write<'a>(&self, account: &AccountInfo<'a>, payer: &AccountInfo<'a>) -> ProgramResult {
        if account.lamports() == 0 {
            return Err(Error::WriteInsteadOfCreatePda.into());
        }
        let mut account_data = borsh::to_vec(self).map_err(|_err| Error::InvalidRawData)?;
        if account_data.len() != account.data_len() {
            let rent = Rent::get()?.minimum_balance(account_data.len());
            if rent > account.lamports() {
                let diff = rent.saturating_sub(account.lamports());
                debug!("topping up {} with {} lamports", account.key, diff);
                invoke(
                    &transfer(payer.key, account.key, diff),
                    &[payer.clone(), account.clone()],
                )?;
            }
            account.realloc(account_data.len(), false)?;
        }
        account_data.swap_with_slice(*account.try_borrow_mut_data()?);
        Ok(())
    }

    /// creates the PDA on the chain
    ///
    /// # Parameters
    /// * `account` - The account where the data will be saved,
    /// * `payer` - The transaction paying account,
    /// * `program_id` - The program owning the PDA.
    ///
    /// # Errors
    /// If the account already exists, the data failed to be
    /// serialized, rent could not be computed, etc.
    fn create<'a>(
        &self,
        account: &AccountInfo<'a>,
        payer: &AccountInfo<'a>,
        program_id: &Pubkey,
    ) -> ProgramResult {
        if !self.is_valid() {
            return Err(Error::InvalidPdaType.into());
        }
        if account.lamports() > 0 {
            return Err(Error::AccountAlreadyExists.into());
        }

        let mut data = borsh::to_vec(self).map_err(|_err| Error::InvalidRawData)?;
        let rent = Rent::get()?.minimum_balance(data.len());
        debug!("Creating PDA. Rent needed: {} lamports", rent);

        let create_pda_instr =
            create_account(payer.key, account.key, rent, data.len() as u64, program_id);

        let seeds = self.seeds();
        let seeds = seeds.iter().map(Vec::as_slice).collect::<Vec<_>>();
        invoke_signed(
            &create_pda_instr,
            &[payer.clone(), account.clone()],
            &[seeds.as_slice()],
        )?;

        data.swap_with_slice(*account.try_borrow_mut_data()?);
        Ok(())
    }
}
