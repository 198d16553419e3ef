// File: crowdsale/src/instruction.rs
// Project: crowdsale-onchain
// Creation date: Monday 12 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 19:07:40
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::{BorshDeserialize, BorshSerialize};
use shank::ShankInstruction;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::{
    allocation::{ReserveBucket, VESTED_BUCKETS},
    offering::Thresholds,
    pda::{AccountKey, OfferingPda, VaultPda},
};

/// Arguments for the program's initialization.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Moves the offering through its phases
    pub state_control: Pubkey,
    /// Manages the whitelist
    pub whitelist_control: Pubkey,
    /// Withdraws the raised funds
    pub withdraw_control: Pubkey,
    /// Assigns presale tokens and rescues stranded tokens
    pub token_assignment_control: Pubkey,
    /// Receives the not-locked reserve
    pub not_locked: Pubkey,
    /// Assigns the grants of the team vault
    pub team_vault_owner: Pubkey,
    /// Assigns the grants of the developers vault
    pub developers_vault_owner: Pubkey,
    /// Assigns the grants of the country vault
    pub country_vault_owner: Pubkey,
}

/// Turns the bonus on or off.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetBonusPhaseArgs {
    /// New state of the bonus phase
    pub enabled: bool,
}

/// An account to whitelist.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WhitelistArgs {
    /// Account allowed to contribute
    pub account: Pubkey,
}

/// Lamports sent or withdrawn.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LamportsArgs {
    /// Amount of lamports
    pub wei: u64,
}

/// Tokens granted during the presale.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresaleArgs {
    /// Receiver of the tokens
    pub beneficiary: Pubkey,
    /// Amount of tokens
    pub amount: u128,
}

/// Tokens moved by their owner.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferArgs {
    /// Receiver of the tokens
    pub to: Pubkey,
    /// Amount of tokens
    pub amount: u128,
}

/// Change of an allowance.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowanceArgs {
    /// Account allowed to spend the signer's tokens
    pub spender: Pubkey,
    /// Amount of tokens
    pub amount: u128,
}

/// Tokens moved on behalf of their owner.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferFromArgs {
    /// Owner of the tokens
    pub from: Pubkey,
    /// Receiver of the tokens
    pub to: Pubkey,
    /// Amount of tokens
    pub amount: u128,
}

/// A vesting grant.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignVestingArgs {
    /// Vault of the grant
    pub bucket: ReserveBucket,
    /// Beneficiary of the grant
    pub beneficiary: Pubkey,
    /// Locked amount, replacing the previous one
    pub amount: u128,
}

/// Release of a vesting grant.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseVestingArgs {
    /// Vault of the grant
    pub bucket: ReserveBucket,
    /// Beneficiary of the grant
    pub beneficiary: Pubkey,
}

/// Receiver of rescued tokens.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RescueTokenArgs {
    /// Receiver of the tokens
    pub to: Pubkey,
}

/// Closing of the sale.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseArgs {
    /// Receiver of the not-locked reserve, must be the one set at initialization
    pub not_locked: Pubkey,
}

/// Global payload for the crowdsale program.
///
/// Every instruction takes the signer, the offering PDA and the system program,
/// followed by the PDAs of the records it reads or writes (see [`CrowdsaleInstruction::records`]).
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq, ShankInstruction)]
#[rustfmt::skip]
pub enum CrowdsaleInstruction {
    /// Initialize the program and create its accounts.
    #[account(0, signer, writable, name="signer", desc="Deployment key, paying for the accounts")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="team_vault_pda", desc="Team reserve vault")]
    #[account(4, writable, name="developers_vault_pda", desc="Developers reserve vault")]
    #[account(5, writable, name="country_vault_pda", desc="Country reserve vault")]
    Initialize(InitializeArgs),

    /// Set the funding thresholds and compute the token rate.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    UpdateThresholds(Thresholds),

    /// Open the sale.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    StartIco,

    /// Turn the contribution bonus on or off.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    SetBonusPhase(SetBonusPhaseArgs),

    /// Allow an account to contribute.
    #[account(0, signer, writable, name="signer", desc="Whitelist-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="contributor_pda", desc="Record of the whitelisted account")]
    AddToWhitelist(WhitelistArgs),

    /// Buy tokens.
    #[account(0, signer, writable, name="signer", desc="Contributor, sending the lamports")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="contributor_pda", desc="Record of the signer")]
    #[account(4, writable, name="balance_pda", desc="Token balance of the signer")]
    Contribute(LamportsArgs),

    /// Mint presale tokens.
    #[account(0, signer, writable, name="signer", desc="Token-assignment-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="balance_pda", desc="Token balance of the beneficiary")]
    AddPresaleAmount(PresaleArgs),

    /// Close the sale.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="team_vault_pda", desc="Team reserve vault")]
    #[account(4, writable, name="developers_vault_pda", desc="Developers reserve vault")]
    #[account(5, writable, name="country_vault_pda", desc="Country reserve vault")]
    #[account(6, writable, name="team_balance_pda", desc="Token balance of the team vault")]
    #[account(7, writable, name="developers_balance_pda", desc="Token balance of the developers vault")]
    #[account(8, writable, name="country_balance_pda", desc="Token balance of the country vault")]
    #[account(9, writable, name="not_locked_balance_pda", desc="Token balance of the not-locked reserve")]
    EndIco(CloseArgs),

    /// Close the sale after its end block.
    #[account(0, signer, writable, name="signer", desc="Any account")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="team_vault_pda", desc="Team reserve vault")]
    #[account(4, writable, name="developers_vault_pda", desc="Developers reserve vault")]
    #[account(5, writable, name="country_vault_pda", desc="Country reserve vault")]
    #[account(6, writable, name="team_balance_pda", desc="Token balance of the team vault")]
    #[account(7, writable, name="developers_balance_pda", desc="Token balance of the developers vault")]
    #[account(8, writable, name="country_balance_pda", desc="Token balance of the country vault")]
    #[account(9, writable, name="not_locked_balance_pda", desc="Token balance of the not-locked reserve")]
    AnyoneEndIco(CloseArgs),

    /// Suspend the sale.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    Pause,

    /// Resume a paused sale.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    ResumeIco,

    /// Give up on a paused sale.
    #[account(0, signer, writable, name="signer", desc="State-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    Abort,

    /// Withdraw raised lamports.
    #[account(0, signer, writable, name="signer", desc="Withdraw-control authority, receiving the lamports")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    RequestPayout(LamportsArgs),

    /// Get a contribution back after a failed sale.
    #[account(0, signer, writable, name="signer", desc="Contributor, receiving the lamports")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="contributor_pda", desc="Record of the signer")]
    RequestRefund,

    /// Move tokens.
    #[account(0, signer, writable, name="signer", desc="Owner of the tokens")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="from_balance_pda", desc="Token balance of the signer")]
    #[account(4, writable, name="to_balance_pda", desc="Token balance of the receiver")]
    Transfer(TransferArgs),

    /// Set an allowance.
    #[account(0, signer, writable, name="signer", desc="Owner of the tokens")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="allowance_pda", desc="Allowance of the spender over the signer's tokens")]
    Approve(AllowanceArgs),

    /// Raise an allowance.
    #[account(0, signer, writable, name="signer", desc="Owner of the tokens")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="allowance_pda", desc="Allowance of the spender over the signer's tokens")]
    IncreaseAllowance(AllowanceArgs),

    /// Lower an allowance.
    #[account(0, signer, writable, name="signer", desc="Owner of the tokens")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="allowance_pda", desc="Allowance of the spender over the signer's tokens")]
    DecreaseAllowance(AllowanceArgs),

    /// Move tokens using an allowance.
    #[account(0, signer, writable, name="signer", desc="Spender")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="allowance_pda", desc="Allowance of the signer over the owner's tokens")]
    #[account(4, writable, name="from_balance_pda", desc="Token balance of the owner")]
    #[account(5, writable, name="to_balance_pda", desc="Token balance of the receiver")]
    TransferFrom(TransferFromArgs),

    /// Lock reserve tokens for a beneficiary.
    #[account(0, signer, writable, name="signer", desc="Owner of the vault")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="vault_pda", desc="Reserve vault of the grant")]
    #[account(4, writable, name="vault_balance_pda", desc="Token balance of the vault")]
    #[account(5, writable, name="grant_pda", desc="Grant of the beneficiary")]
    AssignVesting(AssignVestingArgs),

    /// Release a matured grant.
    #[account(0, signer, writable, name="signer", desc="Any account")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="vault_pda", desc="Reserve vault of the grant")]
    #[account(4, writable, name="vault_balance_pda", desc="Token balance of the vault")]
    #[account(5, writable, name="beneficiary_balance_pda", desc="Token balance of the beneficiary")]
    #[account(6, writable, name="grant_pda", desc="Grant of the beneficiary")]
    ReleaseVesting(ReleaseVestingArgs),

    /// Move tokens sent to the offering's address.
    #[account(0, signer, writable, name="signer", desc="Token-assignment-control authority")]
    #[account(1, writable, name="offering_pda", desc="Offering and token aggregates, holds the custody")]
    #[account(2, name="system_program", desc="System Program")]
    #[account(3, writable, name="offering_balance_pda", desc="Token balance of the offering")]
    #[account(4, writable, name="to_balance_pda", desc="Token balance of the receiver")]
    RescueToken(RescueTokenArgs),
}

impl CrowdsaleInstruction {
    /// Records read or written by the instruction, in the order their accounts
    /// follow the system program.
    ///
    /// # Parameters
    /// * `signer` - Signer of the instruction,
    /// * `program_id` - Program owning the PDAs.
    #[must_use]
    pub fn records(&self, signer: &Pubkey, program_id: &Pubkey) -> Vec<AccountKey> {
        let vault_balance =
            |bucket: ReserveBucket| AccountKey::Balance(VaultPda::get_address(bucket, program_id).0);
        match self {
            Self::Initialize(_) => VESTED_BUCKETS.into_iter().map(AccountKey::Vault).collect(),
            Self::UpdateThresholds(_)
            | Self::StartIco
            | Self::SetBonusPhase(_)
            | Self::Pause
            | Self::ResumeIco
            | Self::Abort
            | Self::RequestPayout(_) => Vec::new(),
            Self::AddToWhitelist(args) => vec![AccountKey::Contributor(args.account)],
            Self::Contribute(_) => vec![
                AccountKey::Contributor(*signer),
                AccountKey::Balance(*signer),
            ],
            Self::AddPresaleAmount(args) => vec![AccountKey::Balance(args.beneficiary)],
            Self::EndIco(args) | Self::AnyoneEndIco(args) => VESTED_BUCKETS
                .into_iter()
                .map(AccountKey::Vault)
                .chain(VESTED_BUCKETS.into_iter().map(vault_balance))
                .chain([AccountKey::Balance(args.not_locked)])
                .collect(),
            Self::RequestRefund => vec![AccountKey::Contributor(*signer)],
            Self::Transfer(args) => vec![AccountKey::Balance(*signer), AccountKey::Balance(args.to)],
            Self::Approve(args) | Self::IncreaseAllowance(args) | Self::DecreaseAllowance(args) => {
                vec![AccountKey::Allowance(*signer, args.spender)]
            }
            Self::TransferFrom(args) => vec![
                AccountKey::Allowance(args.from, *signer),
                AccountKey::Balance(args.from),
                AccountKey::Balance(args.to),
            ],
            Self::AssignVesting(args) => vec![
                AccountKey::Vault(args.bucket),
                vault_balance(args.bucket),
                AccountKey::Grant(args.bucket, args.beneficiary),
            ],
            Self::ReleaseVesting(args) => vec![
                AccountKey::Vault(args.bucket),
                vault_balance(args.bucket),
                AccountKey::Balance(args.beneficiary),
                AccountKey::Grant(args.bucket, args.beneficiary),
            ],
            Self::RescueToken(args) => vec![
                AccountKey::Balance(OfferingPda::get_address(program_id).0),
                AccountKey::Balance(args.to),
            ],
        }
    }
}

fn build(signer: &Pubkey, payload: &CrowdsaleInstruction) -> Result<Instruction, ProgramError> {
    let (offering_pda, _offering_bump) = OfferingPda::get_address(&crate::ID);
    let mut accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new(offering_pda, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    accounts.extend(
        payload
            .records(signer, &crate::ID)
            .iter()
            .map(|record| AccountMeta::new(record.address(&crate::ID).0, false)),
    );
    Ok(Instruction {
        program_id: crate::ID,
        accounts,
        data: borsh::to_vec(payload)?,
    })
}

/// Initializes the program and creates its accounts.
///
/// # Parameters
/// * `signer` - Deployment key, paying for the accounts, signing and paying the transaction,
/// * `args` - Authorities and vault owners.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn initialize(signer: &Pubkey, args: &InitializeArgs) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::Initialize(*args))
}

/// Sets the funding thresholds of the offering.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction,
/// * `thresholds` - Funding limits and admission window.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn update_thresholds(
    signer: &Pubkey,
    thresholds: Thresholds,
) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::UpdateThresholds(thresholds))
}

/// Opens the sale.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn start_ico(signer: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::StartIco)
}

/// Turns the contribution bonus on or off.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction,
/// * `enabled` - New state of the bonus phase.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn set_bonus_phase(signer: &Pubkey, enabled: bool) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::SetBonusPhase(SetBonusPhaseArgs { enabled }))
}

/// Allows an account to contribute.
///
/// # Parameters
/// * `signer` - Whitelist-control authority, signing and paying the transaction,
/// * `account` - Account to whitelist.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn add_to_whitelist(signer: &Pubkey, account: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::AddToWhitelist(WhitelistArgs { account: *account }))
}

/// Buys tokens.
///
/// # Parameters
/// * `signer` - Contributor, signing and paying the transaction,
/// * `wei` - Lamports sent.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn contribute(signer: &Pubkey, wei: u64) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::Contribute(LamportsArgs { wei }))
}

/// Mints presale tokens.
///
/// # Parameters
/// * `signer` - Token-assignment-control authority, signing and paying the transaction,
/// * `beneficiary` - Receiver of the tokens,
/// * `amount` - Amount of tokens.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn add_presale_amount(
    signer: &Pubkey,
    beneficiary: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::AddPresaleAmount(PresaleArgs {
            beneficiary: *beneficiary,
            amount,
        }),
    )
}

/// Closes the sale.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction,
/// * `not_locked` - Receiver of the not-locked reserve.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn end_ico(signer: &Pubkey, not_locked: &Pubkey) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::EndIco(CloseArgs {
            not_locked: *not_locked,
        }),
    )
}

/// Closes the sale once its end block is passed.
///
/// # Parameters
/// * `signer` - Any account, signing and paying the transaction,
/// * `not_locked` - Receiver of the not-locked reserve.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn anyone_end_ico(signer: &Pubkey, not_locked: &Pubkey) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::AnyoneEndIco(CloseArgs {
            not_locked: *not_locked,
        }),
    )
}

/// Suspends the sale.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn pause(signer: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::Pause)
}

/// Resumes a paused sale.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn resume_ico(signer: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::ResumeIco)
}

/// Gives up on a paused sale.
///
/// # Parameters
/// * `signer` - State-control authority, signing and paying the transaction.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn abort(signer: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::Abort)
}

/// Withdraws raised lamports.
///
/// # Parameters
/// * `signer` - Withdraw-control authority, signing and paying the transaction,
/// * `wei` - Lamports to withdraw.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn request_payout(signer: &Pubkey, wei: u64) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::RequestPayout(LamportsArgs { wei }))
}

/// Gets a contribution back after a failed sale.
///
/// # Parameters
/// * `signer` - Contributor, signing and paying the transaction.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn request_refund(signer: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::RequestRefund)
}

/// Moves tokens.
///
/// # Parameters
/// * `signer` - Owner of the tokens, signing and paying the transaction,
/// * `to` - Receiver of the tokens,
/// * `amount` - Amount of tokens.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn transfer(signer: &Pubkey, to: &Pubkey, amount: u128) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::Transfer(TransferArgs { to: *to, amount }))
}

/// Sets an allowance.
///
/// # Parameters
/// * `signer` - Owner of the tokens, signing and paying the transaction,
/// * `spender` - Account allowed to spend the tokens,
/// * `amount` - New allowance.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn approve(
    signer: &Pubkey,
    spender: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::Approve(AllowanceArgs {
            spender: *spender,
            amount,
        }),
    )
}

/// Raises an allowance.
///
/// # Parameters
/// * `signer` - Owner of the tokens, signing and paying the transaction,
/// * `spender` - Account allowed to spend the tokens,
/// * `amount` - Added allowance.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn increase_allowance(
    signer: &Pubkey,
    spender: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::IncreaseAllowance(AllowanceArgs {
            spender: *spender,
            amount,
        }),
    )
}

/// Lowers an allowance.
///
/// # Parameters
/// * `signer` - Owner of the tokens, signing and paying the transaction,
/// * `spender` - Account allowed to spend the tokens,
/// * `amount` - Removed allowance.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn decrease_allowance(
    signer: &Pubkey,
    spender: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::DecreaseAllowance(AllowanceArgs {
            spender: *spender,
            amount,
        }),
    )
}

/// Moves tokens using an allowance.
///
/// # Parameters
/// * `signer` - Spender, signing and paying the transaction,
/// * `from` - Owner of the tokens,
/// * `to` - Receiver of the tokens,
/// * `amount` - Amount of tokens.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn transfer_from(
    signer: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::TransferFrom(TransferFromArgs {
            from: *from,
            to: *to,
            amount,
        }),
    )
}

/// Locks reserve tokens for a beneficiary.
///
/// # Parameters
/// * `signer` - Owner of the vault, signing and paying the transaction,
/// * `bucket` - Vault of the grant,
/// * `beneficiary` - Beneficiary of the grant,
/// * `amount` - Locked amount.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn assign_vesting(
    signer: &Pubkey,
    bucket: ReserveBucket,
    beneficiary: &Pubkey,
    amount: u128,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::AssignVesting(AssignVestingArgs {
            bucket,
            beneficiary: *beneficiary,
            amount,
        }),
    )
}

/// Releases a matured grant.
///
/// # Parameters
/// * `signer` - Any account, signing and paying the transaction,
/// * `bucket` - Vault of the grant,
/// * `beneficiary` - Beneficiary of the grant.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn release_vesting(
    signer: &Pubkey,
    bucket: ReserveBucket,
    beneficiary: &Pubkey,
) -> Result<Instruction, ProgramError> {
    build(
        signer,
        &CrowdsaleInstruction::ReleaseVesting(ReleaseVestingArgs {
            bucket,
            beneficiary: *beneficiary,
        }),
    )
}

/// Moves the tokens sent to the offering's address.
///
/// # Parameters
/// * `signer` - Token-assignment-control authority, signing and paying the transaction,
/// * `to` - Receiver of the tokens.
///
/// # Errors
/// If instruction's data could not be serialized (so…never?)
pub fn rescue_token(signer: &Pubkey, to: &Pubkey) -> Result<Instruction, ProgramError> {
    build(signer, &CrowdsaleInstruction::RescueToken(RescueTokenArgs { to: *to }))
}
