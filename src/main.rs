//! pazar-fis - CLI for the produce-stall customer directory and receipts.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use pazar_fis_rs::{
    config, issue_receipt, model, parse_amount, print_file, suggested_filename,
    CustomerDirectory, ErrorClass, FisError, Role, SaleEntry,
};

/// Customer directory and VAT receipts for a produce market stall.
#[derive(Parser, Debug)]
#[command(name = "pazar-fis")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Customer store file
    #[arg(long, global = true, default_value = config::DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Diagnostic log file
    #[arg(long, global = true, default_value = config::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CommandKind,
}

#[derive(Subcommand, Debug)]
enum CommandKind {
    /// Manage the customer directory
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// List catalog items for a category
    Items {
        /// Category: meyve or sebze
        #[arg(default_value = "meyve")]
        category: String,
    },
    /// Issue a receipt: validate, save atomically, optionally print
    Issue(IssueArgs),
}

#[derive(Subcommand, Debug)]
enum CustomerAction {
    /// Add a customer, stored under its title-cased name
    Add {
        /// Customer name
        name: String,
        /// Contact phone
        #[arg(long, default_value = "")]
        phone: String,
        /// Stall or delivery address
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Remove every entry matching the name
    Remove {
        /// Customer name, any case or spacing variant
        name: String,
    },
    /// List all customers
    List,
    /// Resolve a name the way receipts do: exact first, then fuzzy
    Find {
        /// Typed customer name
        query: String,
    },
    /// Show the names the live filter would offer for typed text
    Filter {
        /// Partially typed name
        typed: String,
    },
}

#[derive(clap::Args, Debug)]
struct IssueArgs {
    /// Customer name, resolved against the directory
    #[arg(short, long)]
    customer: String,

    /// Item name from the catalog, or DİĞER with --custom-item
    #[arg(short, long)]
    item: String,

    /// Free-text item used when the item is DİĞER
    #[arg(long)]
    custom_item: Option<String>,

    /// Piece or crate count, printed verbatim
    #[arg(short, long, default_value = "")]
    pieces: String,

    /// Weight in kg; comma or dot decimals
    #[arg(short, long)]
    weight: String,

    /// Unit price per kg; comma or dot decimals
    #[arg(long)]
    price: String,

    /// Customer type: pazarci or halici
    #[arg(short, long, default_value = "pazarci")]
    role: String,

    /// Output path (default: fis_<timestamp>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Send the saved receipt to the printer
    #[arg(long)]
    print: bool,

    /// Output the sale entry as JSON and exit
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging: console on stderr, warnings also appended to the
    // persistent log file.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .with_context(|| format!("Failed to open log file {}", args.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(LevelFilter::WARN),
        )
        .init();

    match args.command {
        CommandKind::Customer { action } => run_customer(&args.store, action),
        CommandKind::Items { category } => run_items(&category),
        CommandKind::Issue(issue) => run_issue(&args.store, issue),
    }
}

/// Map a workflow error onto the CLI reporting policy: validation problems
/// surface with their own message, everything else gets a generic wrapper
/// over the logged detail.
fn report(err: FisError, generic: &'static str) -> anyhow::Error {
    match err.class() {
        ErrorClass::Validation => anyhow!("{err}"),
        _ => anyhow::Error::new(err).context(generic),
    }
}

fn run_customer(store: &Path, action: CustomerAction) -> Result<()> {
    let mut directory = CustomerDirectory::load(store);

    match action {
        CustomerAction::Add {
            name,
            phone,
            address,
        } => {
            let added = directory
                .add(&name, &phone, &address)
                .map_err(|err| report(err, "Customer could not be saved"))?;
            println!("Added: {}", added.name);
        }
        CustomerAction::Remove { name } => {
            let removed = directory
                .remove(&name)
                .map_err(|err| report(err, "Customer store could not be updated"))?;
            if removed {
                println!("Removed: {}", name);
            } else {
                println!("No customer matched: {}", name);
            }
        }
        CustomerAction::List => {
            let mut names: Vec<String> = directory
                .customers()
                .iter()
                .map(|c| c.name.clone())
                .collect();
            names.sort_by_key(|name| name.to_lowercase());
            for name in &names {
                println!("{name}");
            }
            info!("{} customer(s)", names.len());
        }
        CustomerAction::Find { query } => match directory.find_by_name(&query) {
            Some(customer) => {
                println!("{}", customer.name);
                if !customer.phone.is_empty() {
                    println!("Phone: {}", customer.phone);
                }
                if !customer.address.is_empty() {
                    println!("Address: {}", customer.address);
                }
            }
            None => println!("No match for: {}", query),
        },
        CustomerAction::Filter { typed } => {
            let mut names = directory.filter_names(&typed);
            names.sort_by_key(|name| name.to_lowercase());
            for name in &names {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn run_items(category: &str) -> Result<()> {
    let category = model::ItemCategory::from_label(category)
        .with_context(|| format!("Unknown category: {category} (try meyve or sebze)"))?;
    for item in category.items() {
        println!("{item}");
    }
    Ok(())
}

fn run_issue(store: &Path, args: IssueArgs) -> Result<()> {
    let role = Role::from_label(&args.role)
        .with_context(|| format!("Unknown role: {} (try pazarci or halici)", args.role))?;
    let item_type = model::resolve_item(&args.item, args.custom_item.as_deref())
        .context("Item name is empty (DİĞER needs --custom-item)")?;

    let sale = SaleEntry {
        customer_name: args.customer,
        item_type,
        piece_count: args.pieces,
        weight_kg: parse_amount(&args.weight),
        unit_price: parse_amount(&args.price),
        role,
    };

    // Debug output
    if args.debug {
        sale.validate().map_err(|err| report(err, "Invalid entry"))?;
        let json = serde_json::to_string_pretty(&sale)?;
        println!("{}", json);
        return Ok(());
    }

    let directory = CustomerDirectory::load(store);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(Local::now())));

    let receipt = issue_receipt(&directory, &sale, &output)
        .map_err(|err| report(err, "Receipt could not be written; nothing was saved"))?;

    print!("{receipt}");

    if args.print && !print_file(&output) {
        warn!(
            "Printing failed; the receipt is still saved at {}",
            output.display()
        );
    }

    Ok(())
}
