// File: crowdsale/src/processor.rs
// Project: crowdsale-onchain
// Creation date: Tuesday 13 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 17:46:03
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use borsh::BorshDeserialize as _;
use crowdsale_common::{
    check_pda_address, check_pda_owner, check_signer, check_system_program, debug, get_height,
    pda::CrowdsalePda as _, Error,
};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    log::sol_log_data,
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction::transfer,
};

use crate::{
    access::AccessGuard,
    accounts::AccountStore,
    allocation::ReserveBucket,
    engine::{Crowdsale, CrowdsaleParts, Host},
    event::Event,
    instruction::{CrowdsaleInstruction, InitializeArgs},
    pda::{AccountKey, OfferingPda},
    vesting::VestingVault,
};

include!(concat!(env!("OUT_DIR"), "/keys.rs"));

/// Main processor for the program
///
/// # Errors
/// If the wrong accounts were given, the signer is not allowed to perform the operation, etc.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let Ok(payload) = CrowdsaleInstruction::try_from_slice(instruction_data) else {
        return Err(ProgramError::InvalidInstructionData);
    };
    let accounts_iter = &mut accounts.iter();
    let signer = next_account_info(accounts_iter)?;
    let offering = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;
    check_signer!(signer);
    check_system_program!(system_program);

    let mut store = AccountStore::new(*program_id);
    for key in payload.records(signer.key, program_id) {
        store.register(key, next_account_info(accounts_iter)?)?;
    }

    if let CrowdsaleInstruction::Initialize(args) = payload {
        return initialize(program_id, signer, offering, store, &args);
    }

    check_pda_owner!(program_id, offering);
    let pda = OfferingPda::from_account(offering)?;
    pda.check_address(offering, program_id)?;
    let bump = pda.bump;
    let mut crowdsale = Crowdsale::from_parts(
        CrowdsaleParts {
            offering: pda.offering,
            ledger: pda.ledger,
        },
        store,
    );

    let mut host = OnChainHost {
        signer,
        offering,
        system_program,
    };
    execute(&mut crowdsale, &mut host, signer.key, payload)?;

    let (parts, store, events) = crowdsale.into_parts();
    OfferingPda::new(bump, parts.offering, parts.ledger).write(offering, signer)?;
    store.flush(signer)?;
    emit(&events)
}

/// Logs the events as borsh-serialized data.
fn emit(events: &[Event]) -> ProgramResult {
    for event in events {
        debug!("event: {:?}", event);
        let data = borsh::to_vec(event).map_err(|_err| Error::InvalidRawData)?;
        sol_log_data(&[&data]);
    }
    Ok(())
}

/// Binds the offering to the chain: the height is the slot, the custody is
/// held by the offering's PDA and the signer is the only counterparty.
struct OnChainHost<'a, 'b> {
    signer: &'b AccountInfo<'a>,
    offering: &'b AccountInfo<'a>,
    system_program: &'b AccountInfo<'a>,
}

impl Host for OnChainHost<'_, '_> {
    fn current_height(&self) -> crowdsale_common::Result<u64> {
        get_height()
    }

    fn receive(&mut self, from: &Pubkey, amount: u64) -> crowdsale_common::Result<()> {
        if from != self.signer.key {
            return Err(Error::Unauthorized);
        }
        invoke(
            &transfer(self.signer.key, self.offering.key, amount),
            &[
                self.signer.clone(),
                self.offering.clone(),
                self.system_program.clone(),
            ],
        )
        .map_err(|_err| Error::CrossProgramCallFailed)
    }

    fn send(&mut self, to: &Pubkey, amount: u64) -> crowdsale_common::Result<()> {
        if to != self.signer.key {
            return Err(Error::Unauthorized);
        }
        let remaining = self
            .offering
            .lamports()
            .checked_sub(amount)
            .ok_or(Error::InsufficientFunds)?;
        let credited = self
            .signer
            .lamports()
            .checked_add(amount)
            .ok_or(Error::OutOfRange)?;
        **self
            .offering
            .try_borrow_mut_lamports()
            .map_err(|_err| Error::UnknownError)? = remaining;
        **self
            .signer
            .try_borrow_mut_lamports()
            .map_err(|_err| Error::UnknownError)? = credited;
        Ok(())
    }
}

fn initialize<'a>(
    program_id: &Pubkey,
    signer: &AccountInfo<'a>,
    offering: &AccountInfo<'a>,
    store: AccountStore<'a>,
    args: &InitializeArgs,
) -> ProgramResult {
    msg!("Crowdsale: initializing the program");

    if *signer.key != INIT_KEY {
        msg!(
            "Signer {} is not authorized to initialize the crowdsale program.",
            signer.key
        );
        return Err(Error::InvalidSigner.into());
    }

    if offering.lamports() != 0 {
        msg!("program has already been initialized");
        return Err(Error::UniqueOperationAlreadyExecuted.into());
    }

    let (offering_address, offering_bump) = OfferingPda::get_address(program_id);
    check_pda_address!(offering, offering_address);

    let vault = |bucket: ReserveBucket, owner: Pubkey| {
        let (address, _bump) = AccountKey::Vault(bucket).address(program_id);
        VestingVault::new(bucket, address, owner)
    };
    let vaults = [
        vault(ReserveBucket::Team, args.team_vault_owner),
        vault(ReserveBucket::Developers, args.developers_vault_owner),
        vault(ReserveBucket::Country, args.country_vault_owner),
    ];

    let guard = AccessGuard {
        state_control: args.state_control,
        whitelist_control: args.whitelist_control,
        withdraw_control: args.withdraw_control,
        token_assignment_control: args.token_assignment_control,
        not_locked: args.not_locked,
    };
    let crowdsale = Crowdsale::new(offering_address, guard, vaults, store)?;
    let (parts, store, _events) = crowdsale.into_parts();

    debug!("writing offering PDA");
    OfferingPda::new(offering_bump, parts.offering, parts.ledger).create(
        offering,
        signer,
        program_id,
    )?;
    store.flush(signer)?;

    msg!("Crowdsale program successfully initialized");
    Ok(())
}

#[allow(clippy::too_many_lines)]
fn execute(
    crowdsale: &mut Crowdsale<AccountStore<'_>>,
    host: &mut OnChainHost,
    signer: &Pubkey,
    payload: CrowdsaleInstruction,
) -> crowdsale_common::Result<()> {
    match payload {
        CrowdsaleInstruction::Initialize(_) => {
            msg!("program has already been initialized");
            return Err(Error::UniqueOperationAlreadyExecuted);
        }
        CrowdsaleInstruction::UpdateThresholds(thresholds) => {
            msg!(
                "Crowdsale: thresholds {} - {} lamports, silence {} slots, end at slot {}",
                thresholds.wei_minimum,
                thresholds.wei_maximum,
                thresholds.silence_blocks,
                thresholds.end_block
            );
            crowdsale.configure_thresholds(signer, thresholds)?;
        }
        CrowdsaleInstruction::StartIco => {
            msg!("Crowdsale: starting the sale");
            crowdsale.start_ico(signer, &*host)?;
        }
        CrowdsaleInstruction::SetBonusPhase(args) => {
            msg!("Crowdsale: bonus phase enabled: {}", args.enabled);
            crowdsale.set_bonus_phase(signer, args.enabled)?;
        }
        CrowdsaleInstruction::AddToWhitelist(args) => {
            msg!("Crowdsale: whitelisting {}", args.account);
            crowdsale.add_to_whitelist(signer, &args.account)?;
        }
        CrowdsaleInstruction::Contribute(args) => {
            msg!("Crowdsale: contribution of {} lamports", args.wei);
            let tokens = crowdsale.contribute(signer, args.wei, host)?;
            debug!("{} tokens minted", tokens);
        }
        CrowdsaleInstruction::AddPresaleAmount(args) => {
            msg!(
                "Crowdsale: presale of {} tokens to {}",
                args.amount,
                args.beneficiary
            );
            crowdsale.add_presale_amount(signer, &args.beneficiary, args.amount)?;
        }
        CrowdsaleInstruction::EndIco(_) => {
            msg!("Crowdsale: closing the sale");
            crowdsale.end_ico(signer, &*host)?;
        }
        CrowdsaleInstruction::AnyoneEndIco(_) => {
            msg!("Crowdsale: closing the sale after its end block");
            crowdsale.anyone_end_ico(&*host)?;
        }
        CrowdsaleInstruction::Pause => {
            msg!("Crowdsale: pausing the sale");
            crowdsale.pause(signer)?;
        }
        CrowdsaleInstruction::ResumeIco => {
            msg!("Crowdsale: resuming the sale");
            crowdsale.resume_ico(signer)?;
        }
        CrowdsaleInstruction::Abort => {
            msg!("Crowdsale: aborting the sale");
            crowdsale.abort(signer)?;
        }
        CrowdsaleInstruction::RequestPayout(args) => {
            msg!("Crowdsale: payout of {} lamports", args.wei);
            crowdsale.request_payout(signer, args.wei, host)?;
        }
        CrowdsaleInstruction::RequestRefund => {
            let wei = crowdsale.request_refund(signer, host)?;
            msg!("Crowdsale: refunded {} lamports to {}", wei, signer);
        }
        CrowdsaleInstruction::Transfer(args) => {
            debug!("transfer of {} tokens to {}", args.amount, args.to);
            crowdsale.transfer(signer, &args.to, args.amount)?;
        }
        CrowdsaleInstruction::Approve(args) => {
            debug!("allowance of {} set to {}", args.spender, args.amount);
            crowdsale.approve(signer, &args.spender, args.amount)?;
        }
        CrowdsaleInstruction::IncreaseAllowance(args) => {
            crowdsale.increase_allowance(signer, &args.spender, args.amount)?;
        }
        CrowdsaleInstruction::DecreaseAllowance(args) => {
            crowdsale.decrease_allowance(signer, &args.spender, args.amount)?;
        }
        CrowdsaleInstruction::TransferFrom(args) => {
            debug!(
                "transfer of {} tokens from {} to {}",
                args.amount, args.from, args.to
            );
            crowdsale.transfer_from(signer, &args.from, &args.to, args.amount)?;
        }
        CrowdsaleInstruction::AssignVesting(args) => {
            msg!(
                "Crowdsale: {:?} vault grants {} tokens to {}",
                args.bucket,
                args.amount,
                args.beneficiary
            );
            crowdsale.assign_vesting(signer, args.bucket, &args.beneficiary, args.amount, &*host)?;
        }
        CrowdsaleInstruction::ReleaseVesting(args) => {
            let amount = crowdsale.release_vesting(args.bucket, &args.beneficiary, &*host)?;
            msg!(
                "Crowdsale: {:?} vault released {} tokens to {}",
                args.bucket,
                amount,
                args.beneficiary
            );
        }
        CrowdsaleInstruction::RescueToken(args) => {
            let amount = crowdsale.rescue_token(signer, &args.to)?;
            msg!("Crowdsale: rescued {} tokens to {}", amount, args.to);
        }
    }
    Ok(())
}
