//! # Wallet application
//!
//! This module exposes the wallet application

use std::path::{Path, PathBuf};

use crate::Args;

use plasma_client::blockchain::{open_block_store, Block, Transaction, TransactionBuilder};
use plasma_client::codec::{self, Decodable, RlpEncoder};
use plasma_client::config::Config;
use plasma_client::signer::{normalize_key, PrivateKey, Secp256k1Signer};
use std::fs;
use std::io::Write;

const WALLET_SECRET_KEY: &str = ".plasma.key";

/// Defines the task to run in the wallet app
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Task {
    GenerateKey,
    PrintAddress,
    SignTransaction {
        prev_block: u64,
        uid: u64,
        amount: u64,
        to: String,
    },
    DecodeTransaction(String),
    DecodeBlock(String),
    SaveBlock(String),
    ShowBlock(u64),
    None,
}

pub struct App;

impl App {
    /// run wallet
    pub fn run(task: Task, args: Args) -> anyhow::Result<()> {
        match task {
            Task::GenerateKey => Self::generate_key(&args.wallet),
            Task::PrintAddress => Self::print_address(&args.wallet),
            Task::SignTransaction {
                prev_block,
                uid,
                amount,
                to,
            } => Self::sign_transaction(&args.wallet, prev_block, uid, amount, &to),
            Task::DecodeTransaction(hex) => Self::print_record::<Transaction>(&hex),
            Task::DecodeBlock(hex) => Self::print_record::<Block>(&hex),
            Task::SaveBlock(hex) => Self::save_block(&hex),
            Task::ShowBlock(number) => Self::show_block(number),
            Task::None => Ok(()),
        }
    }

    /// generate new key for wallet
    fn generate_key(p: &Path) -> anyhow::Result<()> {
        let key = PrivateKey::generate();
        if let Err(err) = fs::create_dir_all(p) {
            anyhow::bail!("could not create directory at {}: {}", p.display(), err);
        }
        let path = Self::key_path(p);
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(e) => anyhow::bail!("could not open file {}: {}", path.display(), e),
        };
        file.write_all(key.to_hex().as_bytes())
            .map_err(|e| anyhow::anyhow!("failed to write key file {}: {}", path.display(), e))?;
        println!("created new key at {}", path.display());
        println!("your address is: {}", key.address()?);
        Ok(())
    }

    fn print_address(p: &Path) -> anyhow::Result<()> {
        let key = Self::open_key(p)?;
        println!("{}", key.address()?);
        Ok(())
    }

    /// Sign transaction with wallet key and print it
    fn sign_transaction(
        p: &Path,
        prev_block: u64,
        uid: u64,
        amount: u64,
        to: &str,
    ) -> anyhow::Result<()> {
        let key = Self::open_key(p)?;
        let transaction = TransactionBuilder::new(prev_block, uid)
            .amount(amount)
            .new_owner(to.trim().as_bytes())
            .finish(&Secp256k1Signer::new(), &RlpEncoder, key.to_hex().as_bytes())
            .map_err(|e| anyhow::anyhow!("failed to sign transaction: {}", e))?;
        println!("{}", hex::encode(transaction));
        Ok(())
    }

    /// Decode a record from hex and print it as json
    fn print_record<T>(hex: &str) -> anyhow::Result<()>
    where
        T: Decodable + serde::Serialize,
    {
        let record: T = Self::decode_hex(hex)?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }

    fn save_block(hex: &str) -> anyhow::Result<()> {
        let block: Block = Self::decode_hex(hex)?;
        let store = open_block_store(&Config::try_from_env()?)?;
        let number = block.number();
        store.save_block(block, number)?;
        println!("saved block {}", number);
        Ok(())
    }

    fn show_block(number: u64) -> anyhow::Result<()> {
        let store = open_block_store(&Config::try_from_env()?)?;
        match store.get_block(number)? {
            Some(block) => println!("{}", serde_json::to_string_pretty(&block)?),
            None => println!("block {} not found", number),
        }
        Ok(())
    }

    fn decode_hex<T: Decodable>(hex: &str) -> anyhow::Result<T> {
        let hex = hex.trim();
        let bytes = hex::decode(hex.strip_prefix("0x").unwrap_or(hex))
            .map_err(|e| anyhow::anyhow!("bad hex: {}", e))?;
        codec::decode(&bytes).map_err(|e| anyhow::anyhow!("malformed record: {}", e))
    }

    /// Open the key stored in wallet directory `p`
    fn open_key(p: &Path) -> anyhow::Result<PrivateKey> {
        let path = Self::key_path(p);
        let key = fs::read(&path)
            .map_err(|e| anyhow::anyhow!("could not read key file {}: {}", path.display(), e))?;
        normalize_key(&key).map_err(|e| anyhow::anyhow!("failed to parse key: {}", e))
    }

    fn key_path(p: &Path) -> PathBuf {
        p.join(WALLET_SECRET_KEY)
    }
}
