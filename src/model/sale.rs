//! Sale entry: the operator's input for one receipt.

use serde::Serialize;

use crate::config::Role;
use crate::error::{FisError, Result};
use crate::text;

/// A single weighed sale, as entered at the stall.
#[derive(Debug, Clone, Serialize)]
pub struct SaleEntry {
    /// Customer name as typed; resolved against the directory at issue time.
    pub customer_name: String,
    /// Item printed on the receipt, e.g. "ŞEFTALİ".
    pub item_type: String,
    /// Piece or crate count, free text, printed verbatim.
    pub piece_count: String,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Unit price per kilogram.
    pub unit_price: f64,
    /// Customer type selecting the VAT rate.
    pub role: Role,
}

impl SaleEntry {
    /// Check the submit gates: a non-empty customer name and positive
    /// weight and price. NaN fails the positive checks.
    pub fn validate(&self) -> Result<()> {
        if text::normalize_key(&self.customer_name).is_empty() {
            return Err(FisError::EmptyName);
        }
        if self.weight_kg.is_nan() || self.weight_kg <= 0.0 {
            return Err(FisError::InvalidAmount {
                field: "weight",
                value: self.weight_kg,
            });
        }
        if self.unit_price.is_nan() || self.unit_price <= 0.0 {
            return Err(FisError::InvalidAmount {
                field: "unit price",
                value: self.unit_price,
            });
        }
        Ok(())
    }
}
