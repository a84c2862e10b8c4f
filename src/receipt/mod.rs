//! Receipt rendering and persistence.

mod text;
mod writer;

pub use text::{render_receipt, suggested_filename};
pub use writer::write_receipt_atomic;
