// File: crowdsale/tests/common/mod.rs
// Project: crowdsale-onchain
// Creation date: Saturday 17 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 18:12:31
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

#![allow(clippy::panic)]
#![allow(clippy::print_stdout)]
#![allow(dead_code)]

use std::collections::HashMap;

use crowdsale::{
    initialize, process_instruction, AccessGuard, BalancePda, ContributorPda, ContributorRecord,
    Crowdsale, Host, InitializeArgs, MemoryStore, OfferingPda, ReserveBucket, Thresholds,
    VestingVault,
};
use crowdsale_common::{Error, Result};
use solana_program_test::processor;
use solana_sdk::pubkey::Pubkey;
use tests_utilities::onchain::{Environment, DEPLOYER};

pub const PROGRAM_ID: Pubkey = crowdsale::ID;
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const WEI_MINIMUM: u64 = 25 * LAMPORTS_PER_SOL;
pub const WEI_MAXIMUM: u64 = 1_000 * LAMPORTS_PER_SOL;
/// Tokens (base units) per lamport for [`WEI_MAXIMUM`]: 22.5M tokens for 1000 SOL.
pub const RATE: u128 = 22_500_000_000_000;
pub const START_HEIGHT: u64 = 100;
pub const SILENCE_BLOCKS: u64 = 10;
pub const END_BLOCK: u64 = 1_000;

/// Chain stand-in for the engine tests: a height, wallets and the custody.
#[derive(Debug, Default)]
pub struct MockHost {
    pub height: u64,
    pub wallets: HashMap<Pubkey, u64>,
    pub custody: u64,
    pub fail_transfers: bool,
}

impl MockHost {
    pub fn at(height: u64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn fund(&mut self, wallet: &Pubkey, lamports: u64) {
        *self.wallets.entry(*wallet).or_default() += lamports;
    }

    pub fn lamports(&self, wallet: &Pubkey) -> u64 {
        self.wallets.get(wallet).copied().unwrap_or_default()
    }
}

impl Host for MockHost {
    fn current_height(&self) -> Result<u64> {
        Ok(self.height)
    }

    fn receive(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        if self.fail_transfers {
            return Err(Error::CrossProgramCallFailed);
        }
        let balance = self.lamports(from);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(Error::InsufficientFunds)?;
        self.wallets.insert(*from, remaining);
        self.custody += amount;
        Ok(())
    }

    fn send(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.fail_transfers {
            return Err(Error::CrossProgramCallFailed);
        }
        self.custody = self
            .custody
            .checked_sub(amount)
            .ok_or(Error::InsufficientFunds)?;
        self.fund(to, amount);
        Ok(())
    }
}

/// The identities involved in an offering.
#[derive(Debug, Clone, Copy)]
pub struct Roles {
    pub offering: Pubkey,
    pub state: Pubkey,
    pub whitelist: Pubkey,
    pub withdraw: Pubkey,
    pub assign: Pubkey,
    pub not_locked: Pubkey,
    pub team_owner: Pubkey,
    pub developers_owner: Pubkey,
    pub country_owner: Pubkey,
    pub vaults: [Pubkey; 3],
}

impl Roles {
    pub fn new() -> Self {
        Self {
            offering: Pubkey::new_unique(),
            state: Pubkey::new_unique(),
            whitelist: Pubkey::new_unique(),
            withdraw: Pubkey::new_unique(),
            assign: Pubkey::new_unique(),
            not_locked: Pubkey::new_unique(),
            team_owner: Pubkey::new_unique(),
            developers_owner: Pubkey::new_unique(),
            country_owner: Pubkey::new_unique(),
            vaults: [
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
            ],
        }
    }

    pub const fn vault(&self, bucket: ReserveBucket) -> Pubkey {
        match bucket {
            ReserveBucket::Team => self.vaults[0],
            ReserveBucket::Developers => self.vaults[1],
            ReserveBucket::Country | ReserveBucket::NotLocked => self.vaults[2],
        }
    }

    pub const fn vault_owner(&self, bucket: ReserveBucket) -> Pubkey {
        match bucket {
            ReserveBucket::Team => self.team_owner,
            ReserveBucket::Developers => self.developers_owner,
            ReserveBucket::Country | ReserveBucket::NotLocked => self.country_owner,
        }
    }
}

pub fn default_thresholds() -> Thresholds {
    Thresholds {
        wei_minimum: WEI_MINIMUM,
        wei_maximum: WEI_MAXIMUM,
        silence_blocks: SILENCE_BLOCKS,
        end_block: END_BLOCK,
    }
}

/// A freshly created offering.
pub fn new_crowdsale(roles: &Roles) -> Crowdsale {
    let guard = AccessGuard {
        state_control: roles.state,
        whitelist_control: roles.whitelist,
        withdraw_control: roles.withdraw,
        token_assignment_control: roles.assign,
        not_locked: roles.not_locked,
    };
    let vaults = [
        VestingVault::new(ReserveBucket::Team, roles.vaults[0], roles.team_owner),
        VestingVault::new(
            ReserveBucket::Developers,
            roles.vaults[1],
            roles.developers_owner,
        ),
        VestingVault::new(ReserveBucket::Country, roles.vaults[2], roles.country_owner),
    ];
    let Ok(crowdsale) = Crowdsale::new(roles.offering, guard, vaults, MemoryStore::default())
    else {
        panic!("could not create the offering");
    };
    crowdsale
}

/// An offering whose sale started at [`START_HEIGHT`] with the default thresholds.
pub fn started_crowdsale(roles: &Roles, host: &MockHost) -> Crowdsale {
    let mut crowdsale = new_crowdsale(roles);
    let res = crowdsale
        .configure_thresholds(&roles.state, default_thresholds())
        .and_then(|()| crowdsale.start_ico(&roles.state, host));
    assert!(res.is_ok(), "could not start the sale");
    crowdsale.take_events();
    crowdsale
}

/// Whitelists a funded contributor.
pub fn add_contributor(crowdsale: &mut Crowdsale, host: &mut MockHost, roles: &Roles) -> Pubkey {
    let contributor = Pubkey::new_unique();
    host.fund(&contributor, 2_000 * LAMPORTS_PER_SOL);
    let res = crowdsale.add_to_whitelist(&roles.whitelist, &contributor);
    assert!(res.is_ok(), "could not whitelist the contributor");
    contributor
}

/// Names of the wallets holding the roles in the On-Chain tests.
pub const STATE: &str = "State control";
pub const WHITELIST: &str = "Whitelist control";
pub const WITHDRAW: &str = "Withdraw control";
pub const ASSIGN: &str = "Token assignment control";
pub const NOT_LOCKED: &str = "Not locked";
pub const TEAM: &str = "Team";
pub const DEVELOPERS: &str = "Developers";
pub const COUNTRY: &str = "Country";

/// Creates the environment and the wallets of every role, without initializing the program.
pub async fn environment() -> Environment {
    let mut env = Environment::new(PROGRAM_ID, "crowdsale", processor!(process_instruction)).await;
    for name in [
        STATE, WHITELIST, WITHDRAW, ASSIGN, NOT_LOCKED, TEAM, DEVELOPERS, COUNTRY,
    ] {
        env.add_wallet(name).await;
    }
    env
}

pub fn initialize_args(env: &Environment) -> InitializeArgs {
    InitializeArgs {
        state_control: env.key(STATE),
        whitelist_control: env.key(WHITELIST),
        withdraw_control: env.key(WITHDRAW),
        token_assignment_control: env.key(ASSIGN),
        not_locked: env.key(NOT_LOCKED),
        team_vault_owner: env.key(TEAM),
        developers_vault_owner: env.key(DEVELOPERS),
        country_vault_owner: env.key(COUNTRY),
    }
}

/// Default initialization of the program.
///
/// # Panics
/// If the environment couldn't be set correctly.
pub async fn init_default() -> Environment {
    let mut env = environment().await;
    let deployer = env.key(DEPLOYER);
    let Ok(instruction) = initialize(&deployer, &initialize_args(&env)) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[DEPLOYER]).await;
    assert!(
        res.is_ok(),
        "there was an unexpected error in the instruction"
    );
    env
}

/// Initializes the program and opens the sale from the current slot.
///
/// # Panics
/// If the sale couldn't be started.
pub async fn init_started(wei_minimum: u64, duration: u64) -> Environment {
    let mut env = init_default().await;
    let state = env.key(STATE);
    let end_block = env.slot().await + duration;
    let thresholds = Thresholds {
        wei_minimum,
        wei_maximum: WEI_MAXIMUM,
        silence_blocks: 0,
        end_block,
    };
    let (Ok(update), Ok(start)) = (
        crowdsale::update_thresholds(&state, thresholds),
        crowdsale::start_ico(&state),
    ) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[update, start], &[STATE]).await;
    assert!(res.is_ok(), "could not start the sale");
    env
}

/// Adds a funded and whitelisted contributor.
///
/// # Panics
/// If the contributor could not be whitelisted.
pub async fn add_onchain_contributor(env: &mut Environment, name: &str) -> Pubkey {
    let contributor = env.add_wallet(name).await;
    let whitelist = env.key(WHITELIST);
    let Ok(instruction) = crowdsale::add_to_whitelist(&whitelist, &contributor) else {
        panic!("could not create instruction");
    };
    let res = env.execute_transaction(&[instruction], &[WHITELIST]).await;
    assert!(res.is_ok(), "could not whitelist {name}");
    contributor
}

/// State of the offering on chain.
///
/// # Panics
/// If the offering PDA could not be loaded.
pub async fn onchain_offering(env: &mut Environment) -> OfferingPda {
    let (address, _bump) = OfferingPda::get_address(&PROGRAM_ID);
    let Some(offering) = env.from_account(&address).await else {
        panic!("could not load the offering PDA");
    };
    offering
}

/// Token balance of a holder on chain, zero until its balance account exists.
pub async fn onchain_balance(env: &mut Environment, holder: &Pubkey) -> u128 {
    let (address, _bump) = BalancePda::get_address(holder, &PROGRAM_ID);
    env.from_account::<BalancePda>(&address)
        .await
        .map_or(0, |pda| pda.balance)
}

/// Record of a contributor on chain, the default one until its account exists.
pub async fn onchain_contributor(env: &mut Environment, contributor: &Pubkey) -> ContributorRecord {
    let (address, _bump) = ContributorPda::get_address(contributor, &PROGRAM_ID);
    env.from_account::<ContributorPda>(&address)
        .await
        .map(|pda| pda.record)
        .unwrap_or_default()
}
