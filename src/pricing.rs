//! Price math: lenient amount parsing and VAT-inclusive totals.

use serde::Serialize;

/// Monetary breakdown of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// Net amount before VAT.
    pub net: f64,
    /// VAT amount on the net.
    pub vat_amount: f64,
    /// VAT-inclusive grand total.
    pub total: f64,
}

/// Parse an operator-typed amount.
///
/// Accepts `,` as a decimal separator alongside `.`. Empty or malformed
/// input parses to 0.0 rather than an error; the positivity gate at submit
/// time does the real validation.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.replace(',', ".").parse().unwrap_or(0.0)
}

/// Compute net, VAT and grand total for a weighed sale.
pub fn compute_totals(weight_kg: f64, unit_price: f64, vat_rate: f64) -> Totals {
    let net = weight_kg * unit_price;
    let vat_amount = net * vat_rate;
    Totals {
        net,
        vat_amount,
        total: net + vat_amount,
    }
}
