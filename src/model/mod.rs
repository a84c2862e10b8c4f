//! Data model types for the receipt workflow.

mod catalog;
mod customer;
mod sale;

pub use catalog::{resolve_item, ItemCategory, FRUITS, OTHER_ITEM, VEGETABLES};
pub use customer::Customer;
pub use sale::SaleEntry;
