use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use runway_core::{classify_entry, ledger, Category, Region, Snapshot, SnapshotStore, Transaction, TxStatus, TxType};
use runway_engine::{calculate_forecast, generate_actions};
use std::path::PathBuf;

mod config;
mod demo;
mod report;
mod state;

use config::{load_config, Config};
use state::JsonFileStore;

#[derive(Parser, Debug)]
#[command(
    name = "runway",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RUNWAY_BUILD_SHA"), ")"),
    about = "Cash-flow forecasting: crunch dates, runway and what to do about them"
)]
struct Cli {
    /// Snapshot key (defaults to profile.user from config.toml)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a CSV ledger export; new rows go in front of existing ones
    Import {
        csv: PathBuf,

        /// Override the saved region for column mapping
        #[arg(long)]
        region: Option<Region>,
    },

    /// Show burn, runway, crunch date and the projected balance
    Forecast {
        #[arg(long)]
        json: bool,
    },

    /// Show recommended actions
    Actions {
        #[arg(long)]
        json: bool,

        /// Print a prefilled WhatsApp/email link under each action
        #[arg(long)]
        links: bool,
    },

    /// Manual ledger edits
    Tx {
        #[command(subcommand)]
        command: TxCommand,
    },

    /// Set the current bank balance (may be negative when overdrawn)
    Balance {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Set the region (IN or US)
    Region { region: Region },

    /// Load the demo ledger (region IN)
    Demo,

    /// Wipe all transactions and the balance
    Reset {
        #[arg(long)]
        yes: bool,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// List transactions with their row index
    List {
        #[arg(long)]
        json: bool,
    },

    /// Add a manual entry
    Add {
        #[command(flatten)]
        fields: EntryFields,
    },

    /// Edit the entry with this id; omitted fields keep their value
    Edit {
        id: String,

        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        payee: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long = "type", value_enum)]
        tx_type: Option<Direction>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long, value_enum)]
        status: Option<Status>,
    },

    /// Delete the row at this index
    Delete { index: usize },

    /// Flip PAID/PENDING for the row at this index
    Toggle { index: usize },

    /// Re-categorize the row at this index
    Categorize { index: usize, category: Category },
}

#[derive(clap::Args, Debug)]
struct EntryFields {
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    payee: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    amount: f64,
    #[arg(long = "type", value_enum)]
    tx_type: Direction,
    /// Defaults to keyword classification
    #[arg(long)]
    category: Option<Category>,
    #[arg(long, value_enum, default_value_t = Status::Pending)]
    status: Status,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.runway/config.toml if none exists
    Init,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Direction {
    In,
    Out,
}

impl From<Direction> for TxType {
    fn from(d: Direction) -> Self {
        match d {
            Direction::In => TxType::In,
            Direction::Out => TxType::Out,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Status {
    Paid,
    Pending,
}

impl From<Status> for TxStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Paid => TxStatus::Paid,
            Status::Pending => TxStatus::Pending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = load_config()?;
    let key = cli.user.clone().unwrap_or_else(|| cfg.profile.user.clone());
    let store = JsonFileStore::open_default()?;

    match cli.command {
        Command::Import { csv, region } => {
            let mut snap = load_snapshot(&store, &key, &cfg)?;
            let region = region.unwrap_or(snap.region);

            let bytes = std::fs::read(&csv).with_context(|| format!("read {}", csv.display()))?;
            let text = String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", csv.display()))?;
            let imported = runway_ingest::normalize(&text, region, cfg.today()?)
                .await
                .with_context(|| format!("parsing {}", csv.display()))?;

            println!("Imported {} transactions from {}", imported.len(), csv.display());
            snap.transactions = ledger::merge_import(&imported, &snap.transactions);
            store.save(&key, &snap)?;
        }

        Command::Forecast { json } => {
            let snap = load_snapshot(&store, &key, &cfg)?;
            let forecast = calculate_forecast(&snap.transactions, snap.balance, cfg.today()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                report::print_forecast(&forecast, snap.region);
            }
        }

        Command::Actions { json, links } => {
            let snap = load_snapshot(&store, &key, &cfg)?;
            let actions = generate_actions(&snap.transactions, snap.balance, snap.region, cfg.today()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&actions)?);
            } else {
                report::print_actions(&actions, snap.region, links);
            }
        }

        Command::Tx { command } => {
            let mut snap = load_snapshot(&store, &key, &cfg)?;
            snap.transactions = match command {
                TxCommand::List { json } => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&snap.transactions)?);
                    } else {
                        report::print_transactions(&snap.transactions, snap.region);
                    }
                    return Ok(());
                }
                TxCommand::Add { fields } => {
                    ledger::add_entry(&snap.transactions, entry_from_fields(fields), Utc::now())
                }
                TxCommand::Edit {
                    id,
                    date,
                    payee,
                    description,
                    amount,
                    tx_type,
                    category,
                    status,
                } => {
                    let Some(current) = snap.transactions.iter().find(|t| t.id.as_deref() == Some(id.as_str())) else {
                        bail!("no transaction with id {id} (see `runway tx list`)");
                    };
                    let edited = Transaction {
                        id: current.id.clone(),
                        date: date.unwrap_or(current.date),
                        payee: payee.unwrap_or_else(|| current.payee.clone()),
                        description: description.unwrap_or_else(|| current.description.clone()),
                        amount: amount.map(f64::abs).unwrap_or(current.amount),
                        tx_type: tx_type.map(TxType::from).unwrap_or(current.tx_type),
                        category: category.unwrap_or(current.category),
                        status: status.map(TxStatus::from).unwrap_or(current.status),
                    };
                    ledger::replace_by_id(&snap.transactions, &id, edited)?
                }
                TxCommand::Delete { index } => ledger::remove_at(&snap.transactions, index)?,
                TxCommand::Toggle { index } => ledger::toggle_status_at(&snap.transactions, index)?,
                TxCommand::Categorize { index, category } => {
                    ledger::set_category_at(&snap.transactions, index, category)?
                }
            };
            store.save(&key, &snap)?;
            report::print_transactions(&snap.transactions, snap.region);
        }

        Command::Balance { amount } => {
            let mut snap = load_snapshot(&store, &key, &cfg)?;
            snap.balance = amount;
            store.save(&key, &snap)?;
            println!("Balance set to {amount}");
        }

        Command::Region { region } => {
            let mut snap = load_snapshot(&store, &key, &cfg)?;
            snap.region = region;
            store.save(&key, &snap)?;
            println!("Region set to {region}");
        }

        Command::Demo => {
            store.save(&key, &demo::demo_snapshot())?;
            println!("Loaded demo ledger for {key}");
        }

        Command::Reset { yes } => {
            if !yes {
                bail!("this wipes all data for {key}; re-run with --yes");
            }
            let snap = load_snapshot(&store, &key, &cfg)?;
            store.save(
                &key,
                &Snapshot {
                    transactions: vec![],
                    balance: 0.0,
                    region: snap.region,
                },
            )?;
            println!("Cleared data for {key}");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },
    }

    Ok(())
}

fn load_snapshot(store: &impl SnapshotStore, key: &str, cfg: &Config) -> Result<Snapshot> {
    Ok(store.load(key)?.unwrap_or_else(|| Snapshot {
        region: cfg.defaults.region,
        ..Snapshot::default()
    }))
}

fn entry_from_fields(fields: EntryFields) -> Transaction {
    let tx_type = TxType::from(fields.tx_type);
    let category = fields
        .category
        .unwrap_or_else(|| classify_entry(&fields.payee, &fields.description, tx_type));
    Transaction::new(
        fields.date,
        fields.payee,
        fields.description,
        fields.amount.abs(),
        tx_type,
        category,
    )
    .with_status(fields.status.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_accepts_overdrawn_amount() {
        let cli = Cli::try_parse_from(["runway", "balance", "-5000"]).unwrap();
        match cli.command {
            Command::Balance { amount } => assert_eq!(amount, -5_000.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_tx_add_parses_entry_fields() {
        let cli = Cli::try_parse_from([
            "runway", "tx", "add", "--date", "2026-02-01", "--payee", "Indiqube", "--amount", "100000", "--type", "out",
        ])
        .unwrap();
        let Command::Tx { command: TxCommand::Add { fields } } = cli.command else {
            panic!("expected tx add");
        };
        let entry = entry_from_fields(fields);
        assert_eq!(entry.tx_type, TxType::Out);
        assert_eq!(entry.status, TxStatus::Pending);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }
}
