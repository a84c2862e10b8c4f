//! Core library for the produce-stall receipt workflow.
//!
//! Resolves operator-typed customer names against a JSON-backed directory
//! (exact normalized match first, then fuzzy), computes VAT-inclusive
//! totals, renders the stall's fixed receipt layout and persists it
//! atomically. Turkish names get a dedicated case fold so İ/i and I/ı stay
//! separate letters throughout.
//!
//! # Example
//!
//! ```no_run
//! use pazar_fis_rs::{issue_receipt, CustomerDirectory, Role, SaleEntry};
//! use std::path::Path;
//!
//! let directory = CustomerDirectory::load("customers.json");
//! let sale = SaleEntry {
//!     customer_name: "ibrahim yılmaz".to_string(),
//!     item_type: "ŞEFTALİ".to_string(),
//!     piece_count: "3".to_string(),
//!     weight_kg: 12.5,
//!     unit_price: 30.0,
//!     role: Role::PazarciEsnafi,
//! };
//! let text = issue_receipt(&directory, &sale, Path::new("fis.txt")).unwrap();
//! print!("{}", text);
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod pricing;
pub mod print;
pub mod receipt;
pub mod text;

pub use config::Role;
pub use directory::CustomerDirectory;
pub use error::{ErrorClass, FisError, Result};
pub use model::{Customer, ItemCategory, SaleEntry};
pub use pricing::{compute_totals, parse_amount, Totals};
pub use print::{dispatch_print, print_file};
pub use receipt::{render_receipt, suggested_filename, write_receipt_atomic};
pub use text::{display_name, normalize_key};

/// Issue a receipt for a sale.
///
/// The full submit pipeline: validate the entry, resolve the customer
/// against the directory (or build an ad-hoc record for a walk-in), compute
/// the totals, render the receipt text and write it atomically to `output`.
///
/// Returns the rendered text. Print dispatch is left to the caller, so a
/// failed print cannot disturb an already-saved receipt.
pub fn issue_receipt(
    directory: &CustomerDirectory,
    sale: &SaleEntry,
    output: &std::path::Path,
) -> Result<String> {
    sale.validate()?;

    let customer = directory.resolve(&sale.customer_name);
    let totals = compute_totals(sale.weight_kg, sale.unit_price, sale.role.vat_rate());
    let receipt = render_receipt(&customer, sale, &totals, chrono::Local::now());

    write_receipt_atomic(output, &receipt)?;
    tracing::info!("Receipt saved to {}", output.display());

    Ok(receipt)
}
