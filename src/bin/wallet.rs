mod client;
use client::{App, Task};

use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs)]
#[argh(description = "plasma cash wallet: manage keys, sign transactions offline, inspect blocks")]
pub struct Args {
    #[argh(switch, short = 'g', description = "generate a new key")]
    pub generate_key: bool,
    #[argh(switch, short = 'a', description = "print the address of the wallet key")]
    pub address: bool,
    #[argh(option, description = "sign a transfer of coin <uid> and print its hex encoding")]
    pub uid: Option<u64>,
    #[argh(option, default = "0", description = "block where the coin was last transferred")]
    pub prev_block: u64,
    #[argh(option, default = "0", description = "coin denomination")]
    pub amount: u64,
    #[argh(option, description = "recipient address")]
    pub to: Option<String>,
    #[argh(option, description = "decode a hex encoded transaction")]
    pub decode_transaction: Option<String>,
    #[argh(option, description = "decode a hex encoded block")]
    pub decode_block: Option<String>,
    #[argh(option, description = "save a hex encoded block into the block store")]
    pub save_block: Option<String>,
    #[argh(option, description = "show block with provided number from the block store")]
    pub show_block: Option<u64>,
    #[argh(switch, short = 'D', description = "enable TRACE log level")]
    pub debug: bool,
    #[argh(
        option,
        short = 'w',
        default = "PathBuf::from(\".\")",
        description = "provide wallet directory"
    )]
    pub wallet: PathBuf,
}

impl From<&Args> for Task {
    fn from(args: &Args) -> Self {
        if args.generate_key {
            Self::GenerateKey
        } else if args.address {
            Self::PrintAddress
        } else if let Some(uid) = args.uid {
            Self::SignTransaction {
                prev_block: args.prev_block,
                uid,
                amount: args.amount,
                to: args.to.clone().unwrap_or_default(),
            }
        } else if let Some(hex) = &args.decode_transaction {
            Self::DecodeTransaction(hex.clone())
        } else if let Some(hex) = &args.decode_block {
            Self::DecodeBlock(hex.clone())
        } else if let Some(hex) = &args.save_block {
            Self::SaveBlock(hex.clone())
        } else if let Some(number) = args.show_block {
            Self::ShowBlock(number)
        } else {
            Self::None
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args: Args = argh::from_env();
    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }
    let task = Task::from(&args);
    App::run(task, args)
}
