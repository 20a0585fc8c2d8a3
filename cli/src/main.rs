//! `registrar` - command-line front end for the owner-gated address
//! registry.
//!
//! Every subcommand maps 1:1 onto an operation of the core registry. The
//! caller identity is taken from `--as` (or the config file's `identity`)
//! and trusted as already authenticated; signature checking is out of
//! scope here.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use registrar::batch::{self, EntrySpec};
use registrar::store;
use registrar_config::Config;
use registrar_core::Registry;
use registrar_types::Address;

#[derive(Debug, Parser)]
#[command(name = "registrar", version, about = "Owner-gated address registry")]
struct Cli {
    /// Caller identity for mutating commands (defaults to config `identity`)
    #[arg(long = "as", value_name = "ADDRESS", global = true)]
    caller: Option<Address>,

    /// Registry state file (defaults to config `store`, then the platform
    /// data directory)
    #[arg(long, value_name = "PATH", global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a fresh registry owned by the given address
    Init {
        /// Initial owner identity
        owner: Address,
    },
    /// Add entries as one all-or-nothing batch
    Add {
        /// Entries as address=description pairs
        #[arg(required = true, value_name = "ADDRESS=DESCRIPTION")]
        entries: Vec<EntrySpec>,
    },
    /// Replace the description of an existing entry
    Update {
        address: Address,
        description: String,
    },
    /// Delete an existing entry
    Remove { address: Address },
    /// Transfer ownership to a new identity
    Transfer {
        /// The new owner (must not be the zero address)
        new_owner: Address,
    },
    /// Print the stored description for an address (empty if absent)
    Lookup { address: Address },
    /// Print the current owner
    Owner,
    /// Print all entries in address order
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store_path = resolve_store_path(cli.store, &config)?;

    match cli.command {
        Command::Init { owner } => {
            let registry = store::init(&store_path, owner)?;
            println!(
                "initialized registry at {} owned by {}",
                store_path.display(),
                registry.owner()
            );
        }
        Command::Add { entries } => {
            let caller = resolve_caller(cli.caller, &config)?;
            let (addresses, descriptions) = batch::into_columns(entries);
            mutate(&store_path, |registry| {
                registry.add_entries(caller, addresses, descriptions)
            })?;
        }
        Command::Update {
            address,
            description,
        } => {
            let caller = resolve_caller(cli.caller, &config)?;
            mutate(&store_path, |registry| {
                registry.update_entry(caller, address, description)
            })?;
        }
        Command::Remove { address } => {
            let caller = resolve_caller(cli.caller, &config)?;
            mutate(&store_path, |registry| {
                registry.remove_entry(caller, address)
            })?;
        }
        Command::Transfer { new_owner } => {
            let caller = resolve_caller(cli.caller, &config)?;
            mutate(&store_path, |registry| {
                registry.transfer_ownership(caller, new_owner)
            })?;
        }
        Command::Lookup { address } => {
            let registry = store::load(&store_path)?;
            println!("{}", registry.lookup(address));
        }
        Command::Owner => {
            let registry = store::load(&store_path)?;
            println!("{}", registry.owner());
        }
        Command::List => {
            let registry = store::load(&store_path)?;
            for (address, description) in registry.iter() {
                println!("{address}\t{description}");
            }
        }
    }

    Ok(())
}

/// Load, apply one mutation, save, then print the emitted events as the
/// user-facing success messages. A failed mutation saves nothing.
fn mutate<F>(store_path: &std::path::Path, op: F) -> Result<()>
where
    F: FnOnce(&mut Registry) -> Result<(), registrar_types::RegistryError>,
{
    let mut registry = store::load(store_path)?;
    op(&mut registry)?;
    store::save(store_path, &registry)?;
    for event in registry.take_events() {
        println!("{}", event.format());
    }
    Ok(())
}

fn resolve_caller(flag: Option<Address>, config: &Config) -> Result<Address> {
    match flag.or(config.identity) {
        Some(caller) => Ok(caller),
        None => bail!("no caller identity: pass --as <address> or set `identity` in the config"),
    }
}

fn resolve_store_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.store.clone())
        .or_else(registrar_config::default_store_path)
        .context("no usable store path: pass --store <path> or set `store` in the config")
}
