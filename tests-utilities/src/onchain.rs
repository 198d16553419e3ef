// File: tests-utilities/src/onchain.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 18:04:55
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use std::{collections::HashMap, fmt::Debug};

use borsh::BorshDeserialize;
use crowdsale_common::{pda::CrowdsalePda, Error};
use solana_program::{
    clock::Clock, hash::Hash, instruction::Instruction, pubkey::Pubkey,
    system_instruction::transfer, system_program,
};
use solana_program_runtime::invoke_context::BuiltinFunctionWithContext;
use solana_program_test::{
    BanksClientError, ProgramTest, ProgramTestBanksClientExt as _, ProgramTestContext,
};
use solana_sdk::{
    account::Account,
    instruction::InstructionError,
    signature::{keypair_from_seed_phrase_and_passphrase, Keypair},
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

/// Name of the wallet allowed to initialize the program.
pub const DEPLOYER: &str = "Deployer";

/// Lamports given to every wallet added with [`Environment::add_wallet`].
pub const WALLET_FUNDING: u64 = 10_000_000_000;

/// Transfers per transaction when funding many wallets, to stay under the transaction size.
const FUNDING_BATCH: usize = 15;

const DEPLOYER_KEY: [u8; 64] = [
    216, 248, 38, 110, 7, 162, 53, 64, 7, 98, 191, 98, 44, 51, 103, 62, 171, 111, 119, 202, 91,
    92, 63, 169, 16, 125, 15, 208, 194, 130, 145, 114, 78, 9, 112, 146, 242, 85, 241, 109, 133,
    183, 206, 39, 217, 61, 221, 171, 87, 237, 182, 116, 26, 215, 16, 57, 217, 150, 75, 71, 41,
    107, 64, 232,
];

/// Environment used for On-Chain tests
pub struct Environment {
    /// Public key of the program
    pub program_id: Pubkey,
    /// Testing runtime / cluster, with control over the slots
    pub context: ProgramTestContext,
    /// Current block
    pub blockhash: Hash,
    /// Map of Name - Keypair for all wallets used in the tests
    pub wallets: HashMap<String, Keypair>,
}

impl Environment {
    /// Creates a new testing environment.
    ///
    /// # Parameters
    /// * `program_id` - Address of the program,
    /// * `program` - Name of the program,
    /// * `entrypoint` - Program's entrypoint (call with `solana_program_test::processor!(entrypoint)`)
    ///
    /// # Panics
    /// If the environment couldn't be created (deployer key was not parsed successfully for example)
    pub async fn new(
        program_id: Pubkey,
        program: &str,
        entrypoint: Option<BuiltinFunctionWithContext>,
    ) -> Self {
        println!("Creating environment");
        let Ok(deployer) = Keypair::from_bytes(&DEPLOYER_KEY) else {
            panic!("could not parse the deployer key while setting up environment");
        };
        let deployer_account = Account::new(500_000_000_000, 0, &system_program::ID);
        let mut program_test = ProgramTest::default();
        program_test.prefer_bpf(false);
        program_test.add_program(program, program_id, entrypoint);
        program_test.add_account(deployer.pubkey(), deployer_account);
        let context = program_test.start_with_context().await;
        let blockhash = context.last_blockhash;

        Self {
            program_id,
            context,
            blockhash,
            wallets: HashMap::from([(DEPLOYER.to_owned(), deployer)]),
        }
    }

    /// Get the public key of a wallet of the environment.
    ///
    /// # Panics
    /// If there is no wallet with that name.
    #[must_use]
    pub fn key(&self, name: &str) -> Pubkey {
        let Some(wallet) = self.wallets.get(name) else {
            panic!("no wallet named '{name}' in the environment");
        };
        wallet.pubkey()
    }

    /// Executes a transaction
    ///
    /// Once the transaction is finished, the block will be switched for a new one,
    /// which prevents duplicated instructions from being ignored.
    ///
    /// # Errors
    /// If an instruction errors with a crowdsale error, it is properly returned.
    ///
    /// # Panics
    /// If there is an error, but it's not a Custom one, then there's a panic as it shouldn't happen.
    /// Can also happen if there are no signers
    pub async fn execute_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&str],
    ) -> Result<(), Error> {
        println!("Executing transaction");
        let signers: Vec<&Keypair> = signers
            .iter()
            .filter_map(|name| self.wallets.get(*name))
            .collect();
        assert!(!signers.is_empty(), "signers must not be empty");
        let mut transaction =
            Transaction::new_with_payer(instructions, Some(&signers.first().unwrap().pubkey()));
        transaction.sign(signers.as_slice(), self.blockhash);
        let res = self
            .context
            .banks_client
            .process_transaction(transaction)
            .await;

        // Go to the next blockhash to prevent duplicated transactions from being ignored
        self.blockhash = self
            .context
            .banks_client
            .get_new_latest_blockhash(&self.blockhash)
            .await
            .unwrap();

        match res {
            Ok(()) => Ok(()),
            Err(BanksClientError::TransactionError(TransactionError::InstructionError(
                _num,
                InstructionError::Custom(err),
            ))) => Err(Error::from(err)),
            Err(err) => panic!("Unexpected error: {err}"),
        }
    }

    /// Current slot of the test cluster.
    ///
    /// # Panics
    /// If the clock could not be read.
    pub async fn slot(&mut self) -> u64 {
        self.context
            .banks_client
            .get_sysvar::<Clock>()
            .await
            .unwrap()
            .slot
    }

    /// Moves the test cluster forward to the given slot.
    ///
    /// # Panics
    /// If the slot is not after the current one.
    pub async fn warp_to_slot(&mut self, slot: u64) {
        println!("warping to slot {slot}");
        self.context.warp_to_slot(slot).unwrap();
        self.blockhash = self
            .context
            .banks_client
            .get_new_latest_blockhash(&self.blockhash)
            .await
            .unwrap();
    }

    /// Get the state of an account.
    ///
    /// If the account doesn't exist, `None` will be returned.
    ///
    /// # Parameters
    /// * `address` - Address of the account for which to get the state
    ///
    /// # Panics
    /// If the account could not be retrieved (existing or not)
    pub async fn get_account(&mut self, address: &Pubkey) -> Option<Account> {
        self.context.banks_client.get_account(*address).await.unwrap()
    }

    /// Lamports held by an account, zero if it doesn't exist.
    pub async fn lamports(&mut self, address: &Pubkey) -> u64 {
        self.get_account(address)
            .await
            .map_or(0, |account| account.lamports)
    }

    /// Loads a PDA data from an account.
    ///
    /// # Parameters
    /// * `account` - Account from which to read the data
    ///
    /// # Errors
    /// If the given account does not contain the expected data.
    pub async fn from_account<T>(&mut self, account: &Pubkey) -> Option<T>
    where
        T: BorshDeserialize + CrowdsalePda + Debug,
    {
        let data = self.get_account(account).await?.data;
        let res = T::try_from_slice(&data).ok()?;
        if !res.is_valid() {
            return None::<T>;
        }
        Some(res)
    }

    /// Adds a new wallet to the testing environment, funded by the deployer.
    ///
    /// # Parameters
    /// * `name` - Name of the wallet to add.
    ///
    /// # Returns
    /// * Pubkey of the wallet.
    ///
    /// # Panics
    /// If the keypair couldn't be generated
    pub async fn add_wallet(&mut self, name: &str) -> Pubkey {
        println!("adding wallet for user '{name}'");
        let keypair = keypair_from_seed_phrase_and_passphrase(name, "passphrase").unwrap();
        let key = keypair.pubkey();
        self.wallets.insert(name.into(), keypair);

        let deployer = self.key(DEPLOYER);
        let instruction = transfer(&deployer, &key, WALLET_FUNDING);
        assert!(
            self.execute_transaction(&[instruction], &[DEPLOYER])
                .await
                .is_ok(),
            "could not fund the wallet for {name}"
        );

        key
    }

    /// Adds `count` wallets named `{prefix} {idx}`, funded by the deployer in batches.
    ///
    /// # Parameters
    /// * `prefix` - Prefix of the wallets' names,
    /// * `count` - Number of wallets to add,
    /// * `lamports` - Lamports given to each wallet.
    ///
    /// # Returns
    /// * Names and pubkeys of the wallets, in order.
    ///
    /// # Panics
    /// If a keypair couldn't be generated or the wallets couldn't be funded.
    pub async fn add_wallets(
        &mut self,
        prefix: &str,
        count: usize,
        lamports: u64,
    ) -> Vec<(String, Pubkey)> {
        println!("adding {count} wallets for '{prefix}'");
        let mut wallets = Vec::with_capacity(count);
        for idx in 0..count {
            let name = format!("{prefix} {idx}");
            let keypair = keypair_from_seed_phrase_and_passphrase(&name, "passphrase").unwrap();
            wallets.push((name.clone(), keypair.pubkey()));
            self.wallets.insert(name, keypair);
        }

        let deployer = self.key(DEPLOYER);
        for batch in wallets.chunks(FUNDING_BATCH) {
            let instructions: Vec<Instruction> = batch
                .iter()
                .map(|(_name, key)| transfer(&deployer, key, lamports))
                .collect();
            assert!(
                self.execute_transaction(&instructions, &[DEPLOYER])
                    .await
                    .is_ok(),
                "could not fund the wallets for {prefix}"
            );
        }

        wallets
    }
}
