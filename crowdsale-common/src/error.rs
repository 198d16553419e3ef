// File: crowdsale-common/src/error.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 14:12:09
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use std::{error, result};

use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Results for the crowdsale programs with an `Error` associated by default.
pub type Result<T> = result::Result<T, Error>;

/// Custom error that can occur in the crowdsale program
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum Error {
    /// The operation was invoked by someone other than its designated authority.
    #[error("the caller is not the authority required for this operation")]
    Unauthorized,
    /// The operation is not valid in the current phase of the offering.
    #[error("operation not allowed in the current phase")]
    InvalidPhase,
    /// A numeric input violates its bounds (zero amount, min > max, overflow…).
    #[error("value out of range")]
    OutOfRange,
    /// The admission window is not open (silence period, deadline or vesting maturity).
    #[error("the window for this operation is closed")]
    WindowClosed,
    /// The refund was already paid out.
    #[error("the refund has already been claimed")]
    AlreadyClaimed,
    /// Not enough funds (custody, balance, allowance or vested amount) for the operation.
    #[error("there are not enough funds for this operation")]
    InsufficientFunds,
    /// If attempting to create an account that already exists.
    #[error("the account already exists and can't be created")]
    AccountAlreadyExists,
    /// Could not obtain the clock.
    #[error("failed to obtain the clock from the blockchain")]
    Clock,
    /// A CPI call has failed.
    #[error("an error happened during a cross-program call")]
    CrossProgramCallFailed,
    /// The account given is not the PDA expected at this position.
    #[error("the PDA address does not match what was expected")]
    InvalidPdaAddress,
    /// Data is not of the PDA type expected.
    #[error("the PDA's type does not match what was expected")]
    InvalidPdaType,
    /// Tried to perform an operation on an account with the wrong owner.
    #[error("invalid owner for account")]
    InvalidOwner,
    /// The program id given is not the one expected.
    #[error("invalid program id")]
    InvalidProgramId,
    /// The raw data of an account could not be (de)serialized.
    #[error("failed to read or write the account's data")]
    InvalidRawData,
    /// A required signature is missing.
    #[error("the instruction is missing a required signature")]
    InvalidSigner,
    /// An operation that can only happen once was attempted again.
    #[error("this operation can only be executed once")]
    UniqueOperationAlreadyExecuted,
    /// Tried to write a PDA that was never created.
    #[error("the PDA must be created before being written to")]
    WriteInsteadOfCreatePda,
    /// The operation needs an account that was not given to the instruction.
    #[error("an account needed by the operation is missing")]
    MissingAccount,
    /// An unknown error has occurred (should not happen obviously, check the logs…)
    #[error("unknown error")]
    UnknownError,
}

impl From<Error> for ProgramError {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(err: Error) -> Self {
        msg!("CrowdsaleError: {}", err);
        Self::Custom(err as u32)
    }
}

impl From<u32> for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn from(value: u32) -> Self {
        <Self as num_traits::FromPrimitive>::from_u32(value).unwrap_or(Self::UnknownError)
    }
}

impl<T> DecodeError<T> for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn type_of() -> &'static str {
        "CrowdsaleError"
    }
}

impl PrintProgramError for Error {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn print<E>(&self)
    where
        E: 'static + error::Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!("CrowdsaleError: {}", self);
    }
}
