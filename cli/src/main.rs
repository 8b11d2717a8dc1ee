//! `pasc`: query a PascalCoin node and drive a multi-operation from the shell.

use anyhow::{bail, Context};
use clap::Parser;
use pasc_operations::{Receiver, Sender};
use pasc_rpc::{AccountOperationsQuery, ClientConfig, MultiOperationSession, PascClient, Page, Response};
use pasc_types::{KeyRef, Pasc};
use pasc_utils::{init_logging, LogFormat};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pasc", about = "PascalCoin JSON-RPC client")]
struct Cli {
    /// JSON-RPC endpoint of the node.
    #[arg(long, env = "PASC_NODE_URL")]
    url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PASC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log output: "human" or "json".
    #[arg(long, env = "PASC_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show node status.
    Status,
    /// Show one account.
    Account { account: u32 },
    /// List recent operations of an account.
    Operations {
        account: u32,
        /// Blocks to search back.
        #[arg(long)]
        depth: Option<u32>,
        #[arg(long, default_value_t = 20)]
        max: u32,
    },
    /// Resolve a Base58 public key to its encoded form.
    DecodeKey { b58_pubkey: String },
    /// Compose a multi-operation, sign it with the node's wallet and
    /// optionally execute it.
    MultiSend {
        /// Sender as ACCOUNT:AMOUNT, repeatable.
        #[arg(long = "from", value_parser = parse_party, required = true)]
        senders: Vec<(u32, Pasc)>,
        /// Receiver as ACCOUNT:AMOUNT, repeatable.
        #[arg(long = "to", value_parser = parse_party, required = true)]
        receivers: Vec<(u32, Pasc)>,
        /// Submit once fully signed.
        #[arg(long)]
        execute: bool,
    },
}

fn parse_party(s: &str) -> Result<(u32, Pasc), String> {
    let (account, amount) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ACCOUNT:AMOUNT, got {s:?}"))?;
    let account = account
        .parse::<u32>()
        .map_err(|e| format!("bad account {account:?}: {e}"))?;
    let amount = amount.parse::<Pasc>().map_err(|e| e.to_string())?;
    Ok((account, amount))
}

fn load_config(cli: &Cli) -> ClientConfig {
    let mut config = match &cli.config {
        Some(path) => match ClientConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load {}: {e}, using defaults", path.display());
                ClientConfig::default()
            }
        },
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    config
}

/// Print the result as JSON, or fail with the node's error.
fn print<T: Serialize>(response: Response<T>) -> anyhow::Result<()> {
    let id = response.id;
    let result = response
        .into_result()
        .with_context(|| format!("call {id} failed"))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn multi_send(
    client: &PascClient,
    senders: Vec<(u32, Pasc)>,
    receivers: Vec<(u32, Pasc)>,
    execute: bool,
) -> anyhow::Result<()> {
    let senders: Vec<Sender> = senders
        .into_iter()
        .map(|(account, amount)| Sender::new(account, amount))
        .collect();
    let receivers: Vec<Receiver> = receivers
        .into_iter()
        .map(|(account, amount)| Receiver::new(account, amount))
        .collect();

    let mut session = MultiOperationSession::new(client);
    session
        .add_operation(&senders, &receivers, &[])
        .await?
        .into_result()
        .context("multioperationaddoperation failed")?;
    let signed = session
        .sign_online()
        .await?
        .into_result()
        .context("multioperationsignonline failed")?;
    tracing::info!(
        digest = %signed.digest,
        signed = signed.signed_count,
        not_signed = signed.not_signed_count,
        fee = %signed.fee,
        "multi-operation signed"
    );
    println!("{}", serde_json::to_string_pretty(&signed)?);

    if !execute {
        return Ok(());
    }
    if !signed.can_execute() {
        bail!(
            "{} signature(s) missing; sign them offline and retry",
            signed.not_signed_count
        );
    }
    let results = session
        .execute()
        .await?
        .into_result()
        .context("executeoperations failed")?;
    for entry in &results {
        match (&entry.errors, entry.ophash()) {
            (Some(errors), _) if !entry.valid => println!("rejected: {errors}"),
            (_, Some(ophash)) => println!("accepted: {ophash}"),
            _ => println!("accepted"),
        }
    }
    if results.iter().any(|entry| !entry.valid) {
        bail!("some operations were rejected");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);
    init_logging(config.log_format, &config.log_level);
    tracing::debug!(url = %config.url, "using node");

    let client = PascClient::new(&config)?;

    match cli.command {
        Command::Status => print(client.node_status().await)?,
        Command::Account { account } => print(client.get_account(account).await)?,
        Command::Operations {
            account,
            depth,
            max,
        } => {
            let query = AccountOperationsQuery {
                depth,
                page: Page::new(0, max),
                ..AccountOperationsQuery::new(account)
            };
            print(client.get_account_operations(&query).await)?
        }
        Command::DecodeKey { b58_pubkey } => {
            print(client.decode_pub_key(KeyRef::base58(b58_pubkey)).await)?
        }
        Command::MultiSend {
            senders,
            receivers,
            execute,
        } => multi_send(&client, senders, receivers, execute).await?,
    }

    Ok(())
}
