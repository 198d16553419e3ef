// File: crowdsale/tests/sale.rs
// Project: crowdsale-onchain
// Creation date: Saturday 17 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 18:26:10
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::panic_in_result_fn)]

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

use std::{error, result};

use crowdsale::{
    AccessGuard, Crowdsale, Event, MemoryStore, Phase, ReserveBucket, Thresholds, VestingVault,
    MAX_TOTAL_SUPPLY, ONE_TOKEN, RESERVE_SHARES,
};
use crowdsale_common::Error as CrowdsaleError;
use solana_sdk::pubkey::Pubkey;

use crate::common::{
    add_contributor, default_thresholds, new_crowdsale, started_crowdsale, MockHost, Roles,
    END_BLOCK, LAMPORTS_PER_SOL, RATE, SILENCE_BLOCKS, START_HEIGHT, WEI_MAXIMUM, WEI_MINIMUM,
};

pub mod common;

const OPEN_HEIGHT: u64 = START_HEIGHT + SILENCE_BLOCKS;

#[test]
fn thresholds_set_the_rate() -> Result<()> {
    let roles = Roles::new();
    let mut crowdsale = new_crowdsale(&roles);
    assert_eq!(crowdsale.phase(), Phase::Initial);

    crowdsale.configure_thresholds(&roles.state, default_thresholds())?;
    assert_eq!(crowdsale.phase(), Phase::ValuationSet);
    assert_eq!(crowdsale.offering().tokens_per_wei, RATE);
    assert_eq!(
        crowdsale.take_events(),
        vec![Event::StateTransition {
            old: Phase::Initial,
            new: Phase::ValuationSet
        }]
    );

    // Only once
    let res = crowdsale.configure_thresholds(&roles.state, default_thresholds());
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    Ok(())
}

#[test]
fn thresholds_are_checked() {
    let roles = Roles::new();
    let mut crowdsale = new_crowdsale(&roles);

    let res = crowdsale.configure_thresholds(&Pubkey::new_unique(), default_thresholds());
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));

    let inverted = Thresholds {
        wei_minimum: WEI_MAXIMUM + 1,
        ..default_thresholds()
    };
    let res = crowdsale.configure_thresholds(&roles.state, inverted);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));

    let no_maximum = Thresholds {
        wei_minimum: 0,
        wei_maximum: 0,
        ..default_thresholds()
    };
    let res = crowdsale.configure_thresholds(&roles.state, no_maximum);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));

    assert_eq!(crowdsale.phase(), Phase::Initial);
    assert!(crowdsale.take_events().is_empty());
}

#[test]
fn start_requires_valuation() -> Result<()> {
    let roles = Roles::new();
    let host = MockHost::at(START_HEIGHT);
    let mut crowdsale = new_crowdsale(&roles);

    let res = crowdsale.start_ico(&roles.state, &host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    crowdsale.configure_thresholds(&roles.state, default_thresholds())?;
    let res = crowdsale.start_ico(&roles.whitelist, &host);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));

    crowdsale.start_ico(&roles.state, &host)?;
    assert_eq!(crowdsale.phase(), Phase::Ico);
    assert_eq!(crowdsale.offering().ico_entry_height, START_HEIGHT);

    Ok(())
}

#[test]
fn funded_sale() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(START_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    let bob = add_contributor(&mut crowdsale, &mut host, &roles);
    crowdsale.take_events();

    host.height = OPEN_HEIGHT;
    let alice_tokens = crowdsale.contribute(&alice, 10 * LAMPORTS_PER_SOL, &mut host)?;
    assert_eq!(alice_tokens, u128::from(10 * LAMPORTS_PER_SOL) * RATE);
    assert_eq!(alice_tokens, 225_000 * ONE_TOKEN);
    assert_eq!(
        crowdsale.take_events(),
        vec![
            Event::Mint {
                to: alice,
                amount: alice_tokens
            },
            Event::Transfer {
                from: None,
                to: alice,
                amount: alice_tokens
            },
            Event::Contribution {
                contributor: alice,
                wei: 10 * LAMPORTS_PER_SOL,
                tokens: alice_tokens
            },
        ]
    );
    let bob_tokens = crowdsale.contribute(&bob, 20 * LAMPORTS_PER_SOL, &mut host)?;

    let sold = alice_tokens + bob_tokens;
    assert_eq!(crowdsale.offering().wei_raised, 30 * LAMPORTS_PER_SOL);
    assert_eq!(crowdsale.offering().sold_tokens, sold);
    assert_eq!(crowdsale.ledger().supply(), sold);
    assert_eq!(host.custody, 30 * LAMPORTS_PER_SOL);
    assert_eq!(
        crowdsale.contributor(&bob)?.wei_contributed,
        20 * LAMPORTS_PER_SOL
    );
    assert_eq!(crowdsale.store().total_balance(), sold);
    crowdsale.take_events();

    // Closing is only open to everyone after the end block
    host.height = END_BLOCK;
    let res = crowdsale.anyone_end_ico(&host);
    assert_eq!(res, Err(CrowdsaleError::WindowClosed));
    host.height = END_BLOCK + 1;
    crowdsale.anyone_end_ico(&host)?;
    assert_eq!(crowdsale.phase(), Phase::Operational);
    assert_eq!(crowdsale.offering().operational_since, Some(END_BLOCK + 1));

    // The sale is half of the final supply, the reserves the other half
    let final_supply = sold * 2;
    assert_eq!(crowdsale.ledger().supply(), final_supply);
    assert_eq!(crowdsale.offering().total_supply, final_supply);
    assert!(crowdsale.ledger().minting_finished());
    assert!(crowdsale.ledger().supply() <= MAX_TOTAL_SUPPLY);
    let mut reserved = 0;
    for (bucket, share) in RESERVE_SHARES {
        let holder = crowdsale
            .vault(bucket)
            .map_or(roles.not_locked, |vault| *vault.address());
        let expected = final_supply * u128::from(share) / 100;
        assert_eq!(crowdsale.balance_of(&holder)?, expected, "{bucket:?} reserve");
        reserved += expected;
    }
    assert_eq!(reserved, sold);
    assert_eq!(
        crowdsale.balance_of(&roles.vault(ReserveBucket::Team))?,
        final_supply * 15 / 100
    );
    assert_eq!(crowdsale.store().total_balance(), final_supply);

    let events = crowdsale.take_events();
    assert_eq!(
        events.last(),
        Some(&Event::StateTransition {
            old: Phase::Ico,
            new: Phase::Operational
        })
    );
    assert_eq!(events.iter().filter(|event| matches!(event, Event::Mint { .. })).count(), 4);
    assert!(events.contains(&Event::MintFinished));

    // No more contributions
    let res = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    Ok(())
}

#[test]
fn admission_window() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(START_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);

    host.height = OPEN_HEIGHT - 1;
    let res = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::WindowClosed));

    host.height = OPEN_HEIGHT;
    crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;
    host.height = END_BLOCK;
    crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;

    host.height = END_BLOCK + 1;
    let res = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::WindowClosed));
    assert_eq!(crowdsale.offering().wei_raised, 2 * LAMPORTS_PER_SOL);

    Ok(())
}

#[test]
fn rejected_contributions_change_nothing() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    let stranger = Pubkey::new_unique();
    host.fund(&stranger, LAMPORTS_PER_SOL);
    crowdsale.take_events();
    let before = crowdsale.clone();

    let res = crowdsale.contribute(&stranger, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    let res = crowdsale.contribute(&alice, 0, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    let res = crowdsale.contribute(&alice, WEI_MAXIMUM + 1, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));

    host.fail_transfers = true;
    let res = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::CrossProgramCallFailed));

    assert_eq!(crowdsale, before);
    assert_eq!(host.custody, 0);

    Ok(())
}

#[test]
fn maximum_is_inclusive() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    let bob = add_contributor(&mut crowdsale, &mut host, &roles);

    crowdsale.contribute(&alice, WEI_MAXIMUM - LAMPORTS_PER_SOL, &mut host)?;
    let res = crowdsale.contribute(&bob, LAMPORTS_PER_SOL + 1, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    crowdsale.contribute(&bob, LAMPORTS_PER_SOL, &mut host)?;

    // The whole sale share is sold at the maximum
    assert_eq!(crowdsale.offering().wei_raised, WEI_MAXIMUM);
    assert_eq!(
        crowdsale.offering().sold_tokens,
        MAX_TOTAL_SUPPLY / 2
    );

    Ok(())
}

#[test]
fn bonus_phase() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);

    let res = crowdsale.set_bonus_phase(&roles.whitelist, true);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    crowdsale.set_bonus_phase(&roles.state, true)?;

    // 22_500 tokens before bonus: second tier
    let tokens = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;
    assert_eq!(tokens, 27_562 * ONE_TOKEN + ONE_TOKEN / 2);

    // Small contributions get the first tier
    let tokens = crowdsale.contribute(&alice, LAMPORTS_PER_SOL / 10, &mut host)?;
    assert_eq!(tokens, 2_700 * ONE_TOKEN);

    crowdsale.set_bonus_phase(&roles.state, false)?;
    let tokens = crowdsale.contribute(&alice, LAMPORTS_PER_SOL / 10, &mut host)?;
    assert_eq!(tokens, 2_250 * ONE_TOKEN);

    Ok(())
}

#[test]
fn underfunded_sale_refunds_once() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    let bob = add_contributor(&mut crowdsale, &mut host, &roles);
    let funds = host.lamports(&alice);

    let tokens = crowdsale.contribute(&alice, 10 * LAMPORTS_PER_SOL, &mut host)?;
    assert!(crowdsale.offering().wei_raised < WEI_MINIMUM);

    let res = crowdsale.end_ico(&alice, &host);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    crowdsale.end_ico(&roles.state, &host)?;
    assert_eq!(crowdsale.phase(), Phase::Underfunded);
    assert!(!crowdsale.ledger().minting_finished());
    crowdsale.take_events();

    let refunded = crowdsale.request_refund(&alice, &mut host)?;
    assert_eq!(refunded, 10 * LAMPORTS_PER_SOL);
    assert_eq!(host.lamports(&alice), funds);
    assert_eq!(host.custody, 0);
    assert_eq!(
        crowdsale.take_events(),
        vec![Event::Refund {
            contributor: alice,
            wei: refunded
        }]
    );
    // The tokens are kept
    assert_eq!(crowdsale.balance_of(&alice)?, tokens);

    let res = crowdsale.request_refund(&alice, &mut host);
    assert_eq!(res, Err(CrowdsaleError::AlreadyClaimed));
    let res = crowdsale.request_refund(&bob, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InsufficientFunds));

    // No withdrawal from an underfunded sale
    let res = crowdsale.request_payout(&roles.withdraw, 1, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    Ok(())
}

#[test]
fn failed_refund_can_be_retried() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;
    crowdsale.end_ico(&roles.state, &host)?;
    crowdsale.take_events();

    let before = crowdsale.clone();
    host.fail_transfers = true;
    let res = crowdsale.request_refund(&alice, &mut host);
    assert_eq!(res, Err(CrowdsaleError::CrossProgramCallFailed));
    assert_eq!(crowdsale, before);
    assert!(!crowdsale.contributor(&alice)?.refund_claimed);

    host.fail_transfers = false;
    assert_eq!(crowdsale.request_refund(&alice, &mut host)?, LAMPORTS_PER_SOL);
    assert!(crowdsale.contributor(&alice)?.refund_claimed);

    Ok(())
}

#[test]
fn payouts() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    crowdsale.contribute(&alice, WEI_MINIMUM, &mut host)?;

    let res = crowdsale.request_payout(&roles.withdraw, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    // The minimum is inclusive
    crowdsale.end_ico(&roles.state, &host)?;
    assert_eq!(crowdsale.phase(), Phase::Operational);
    crowdsale.take_events();

    let res = crowdsale.request_payout(&roles.state, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    let res = crowdsale.request_payout(&roles.withdraw, 0, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));

    host.fail_transfers = true;
    let res = crowdsale.request_payout(&roles.withdraw, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::CrossProgramCallFailed));
    assert_eq!(crowdsale.offering().custody, WEI_MINIMUM);
    host.fail_transfers = false;

    crowdsale.request_payout(&roles.withdraw, 5 * LAMPORTS_PER_SOL, &mut host)?;
    crowdsale.request_payout(&roles.withdraw, 20 * LAMPORTS_PER_SOL, &mut host)?;
    assert_eq!(host.lamports(&roles.withdraw), WEI_MINIMUM);
    assert_eq!(crowdsale.offering().custody, 0);
    assert_eq!(
        crowdsale.take_events(),
        vec![
            Event::Payout {
                to: roles.withdraw,
                wei: 5 * LAMPORTS_PER_SOL
            },
            Event::Payout {
                to: roles.withdraw,
                wei: 20 * LAMPORTS_PER_SOL
            },
        ]
    );

    let res = crowdsale.request_payout(&roles.withdraw, 1, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InsufficientFunds));

    Ok(())
}

#[test]
fn pause_resume_and_abort() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;

    let res = crowdsale.pause(&alice);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    let res = crowdsale.resume_ico(&roles.state);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));
    let res = crowdsale.abort(&roles.state);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    crowdsale.pause(&roles.state)?;
    assert_eq!(crowdsale.phase(), Phase::Paused);
    let res = crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));
    let res = crowdsale.end_ico(&roles.state, &host);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));
    // The bonus can still be tuned while paused
    crowdsale.set_bonus_phase(&roles.state, true)?;

    crowdsale.resume_ico(&roles.state)?;
    assert_eq!(crowdsale.phase(), Phase::Ico);
    crowdsale.contribute(&alice, LAMPORTS_PER_SOL, &mut host)?;

    crowdsale.pause(&roles.state)?;
    crowdsale.abort(&roles.state)?;
    assert_eq!(crowdsale.phase(), Phase::Underfunded);
    let transitions: Vec<_> = crowdsale
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            Event::StateTransition { old, new } => Some((old, new)),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        vec![
            (Phase::Ico, Phase::Paused),
            (Phase::Paused, Phase::Ico),
            (Phase::Ico, Phase::Paused),
            (Phase::Paused, Phase::Underfunded),
        ]
    );

    let refunded = crowdsale.request_refund(&alice, &mut host)?;
    assert_eq!(refunded, 2 * LAMPORTS_PER_SOL);

    Ok(())
}

#[test]
fn whitelisting() -> Result<()> {
    let roles = Roles::new();
    let mut crowdsale = new_crowdsale(&roles);
    let alice = Pubkey::new_unique();

    let res = crowdsale.add_to_whitelist(&roles.state, &alice);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));

    // Allowed in any phase, and idempotent
    crowdsale.add_to_whitelist(&roles.whitelist, &alice)?;
    crowdsale.add_to_whitelist(&roles.whitelist, &alice)?;
    assert!(crowdsale.contributor(&alice)?.is_whitelisted);
    assert_eq!(crowdsale.store().contributors(), 1);
    assert_eq!(
        crowdsale.take_events(),
        vec![
            Event::Whitelisted { account: alice },
            Event::Whitelisted { account: alice },
        ]
    );

    Ok(())
}

#[test]
fn presale() -> Result<()> {
    let roles = Roles::new();
    let host = MockHost::at(START_HEIGHT);
    let mut crowdsale = new_crowdsale(&roles);
    let partner = Pubkey::new_unique();
    let amount = 1_000 * ONE_TOKEN;

    let res = crowdsale.add_presale_amount(&roles.assign, &partner, amount);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    crowdsale.configure_thresholds(&roles.state, default_thresholds())?;
    let res = crowdsale.add_presale_amount(&roles.state, &partner, amount);
    assert_eq!(res, Err(CrowdsaleError::Unauthorized));
    let res = crowdsale.add_presale_amount(&roles.assign, &partner, 0);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    crowdsale.take_events();
    let before = crowdsale.clone();
    let res = crowdsale.add_presale_amount(&roles.assign, &partner, u128::MAX);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    assert_eq!(crowdsale, before);

    crowdsale.add_presale_amount(&roles.assign, &partner, amount)?;
    assert_eq!(crowdsale.balance_of(&partner)?, amount);
    assert_eq!(crowdsale.offering().sold_tokens, amount);
    assert_eq!(crowdsale.offering().total_supply, amount * 2);
    assert_eq!(
        crowdsale.take_events(),
        vec![
            Event::Mint {
                to: partner,
                amount
            },
            Event::Transfer {
                from: None,
                to: partner,
                amount
            },
        ]
    );

    // Still allowed once the sale started
    crowdsale.start_ico(&roles.state, &host)?;
    crowdsale.add_presale_amount(&roles.assign, &partner, amount)?;
    assert_eq!(crowdsale.balance_of(&partner)?, amount * 2);

    crowdsale.pause(&roles.state)?;
    let res = crowdsale.add_presale_amount(&roles.assign, &partner, amount);
    assert_eq!(res, Err(CrowdsaleError::InvalidPhase));

    Ok(())
}

#[test]
fn presale_counts_in_the_reserves() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(START_HEIGHT);
    let mut crowdsale = new_crowdsale(&roles);
    let partner = Pubkey::new_unique();
    crowdsale.configure_thresholds(&roles.state, default_thresholds())?;
    crowdsale.add_presale_amount(&roles.assign, &partner, 1_000 * ONE_TOKEN)?;
    crowdsale.start_ico(&roles.state, &host)?;

    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    host.height = OPEN_HEIGHT;
    let tokens = crowdsale.contribute(&alice, WEI_MINIMUM, &mut host)?;
    crowdsale.end_ico(&roles.state, &host)?;

    let sold = tokens + 1_000 * ONE_TOKEN;
    assert_eq!(crowdsale.ledger().supply(), sold * 2);
    assert_eq!(crowdsale.balance_of(&roles.not_locked)?, sold * 2 * 15 / 100);

    Ok(())
}

#[test]
fn bonus_cannot_push_past_the_maximum_supply() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(OPEN_HEIGHT);
    let mut crowdsale = started_crowdsale(&roles, &host);
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    crowdsale.set_bonus_phase(&roles.state, true)?;

    // 18M tokens before bonus, 23.4M after: more than the sale share
    let res = crowdsale.contribute(&alice, 800 * LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    assert_eq!(crowdsale.offering().wei_raised, 0);

    let tokens = crowdsale.contribute(&alice, 600 * LAMPORTS_PER_SOL, &mut host)?;
    assert_eq!(tokens, 17_550_000 * ONE_TOKEN);
    crowdsale.take_events();

    // Within the funding maximum, but past the maximum supply once combined
    let before = crowdsale.clone();
    let custody = host.custody;
    let res = crowdsale.contribute(&alice, 200 * LAMPORTS_PER_SOL, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    assert_eq!(crowdsale, before);
    assert_eq!(host.custody, custody);

    crowdsale.contribute(&alice, 100 * LAMPORTS_PER_SOL, &mut host)?;
    let final_supply = crowdsale.offering().sold_tokens * 2;
    assert!(final_supply <= MAX_TOTAL_SUPPLY);

    Ok(())
}

#[test]
fn presale_cannot_push_past_the_maximum_supply() -> Result<()> {
    let roles = Roles::new();
    let mut host = MockHost::at(START_HEIGHT);
    let mut crowdsale = new_crowdsale(&roles);
    let partner = Pubkey::new_unique();
    crowdsale.configure_thresholds(&roles.state, default_thresholds())?;

    let before = crowdsale.clone();
    let res = crowdsale.add_presale_amount(&roles.assign, &partner, MAX_TOTAL_SUPPLY / 2 + 1);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    assert_eq!(crowdsale, before);

    // Selling the whole sale share leaves nothing for the public sale
    crowdsale.add_presale_amount(&roles.assign, &partner, MAX_TOTAL_SUPPLY / 2)?;
    assert_eq!(crowdsale.offering().total_supply, MAX_TOTAL_SUPPLY);
    let res = crowdsale.add_presale_amount(&roles.assign, &partner, 1);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));

    crowdsale.start_ico(&roles.state, &host)?;
    let alice = add_contributor(&mut crowdsale, &mut host, &roles);
    host.height = OPEN_HEIGHT;
    let res = crowdsale.contribute(&alice, 1, &mut host);
    assert_eq!(res, Err(CrowdsaleError::OutOfRange));
    assert_eq!(crowdsale.balance_of(&partner)?, MAX_TOTAL_SUPPLY / 2);

    Ok(())
}

#[test]
fn vaults_must_be_given_in_order() {
    let roles = Roles::new();
    let guard = AccessGuard {
        state_control: roles.state,
        whitelist_control: roles.whitelist,
        withdraw_control: roles.withdraw,
        token_assignment_control: roles.assign,
        not_locked: roles.not_locked,
    };
    let vaults = [
        VestingVault::new(ReserveBucket::Developers, roles.vaults[1], roles.developers_owner),
        VestingVault::new(ReserveBucket::Team, roles.vaults[0], roles.team_owner),
        VestingVault::new(ReserveBucket::Country, roles.vaults[2], roles.country_owner),
    ];
    let res = Crowdsale::new(roles.offering, guard, vaults, MemoryStore::default());
    assert_eq!(res.err(), Some(CrowdsaleError::OutOfRange));
}
