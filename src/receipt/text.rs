//! Receipt text rendering in the stall's fixed layout.

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::model::{Customer, SaleEntry};
use crate::pricing::Totals;

/// Render the receipt body.
///
/// Field order and labels are fixed. Monetary values and the weight print
/// with 2 fraction digits, the VAT rate as an integer percent. The timestamp
/// is injected so rendering stays deterministic.
pub fn render_receipt(
    customer: &Customer,
    sale: &SaleEntry,
    totals: &Totals,
    issued_at: DateTime<Local>,
) -> String {
    let mut out = String::new();
    writeln!(out, "=== SEBZE-MEYVE FİŞİ ===").unwrap();
    writeln!(out, "Tarih: {}", issued_at.format("%Y-%m-%d %H:%M:%S")).unwrap();
    writeln!(out, "Müşteri Türü: {}", sale.role).unwrap();
    writeln!(out, "Müşteri Adı: {}", customer.name).unwrap();
    writeln!(out, "Malın Cinsi: {}", sale.item_type).unwrap();
    writeln!(out, "Parça Adedi: {}", sale.piece_count).unwrap();
    writeln!(out, "Kilo: {:.2} kg", sale.weight_kg).unwrap();
    writeln!(out, "Birim Fiyat: {:.2}", sale.unit_price).unwrap();
    writeln!(out, "Net Tutar: {:.2}", totals.net).unwrap();
    writeln!(
        out,
        "KDV (%{:.0}): {:.2}",
        sale.role.vat_rate() * 100.0,
        totals.vat_amount
    )
    .unwrap();
    writeln!(out, "Toplam: {:.2}", totals.total).unwrap();
    out
}

/// Timestamped default file name for a saved receipt.
pub fn suggested_filename(now: DateTime<Local>) -> String {
    format!("fis_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Role;
    use crate::pricing;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    }

    fn sample_sale() -> SaleEntry {
        SaleEntry {
            customer_name: "ibrahim yılmaz".to_string(),
            item_type: "ŞEFTALİ".to_string(),
            piece_count: "3".to_string(),
            weight_kg: 12.5,
            unit_price: 30.0,
            role: Role::PazarciEsnafi,
        }
    }

    #[test]
    fn test_receipt_layout() {
        let sale = sample_sale();
        let customer = Customer::new("İbrahim Yılmaz");
        let totals = pricing::compute_totals(sale.weight_kg, sale.unit_price, sale.role.vat_rate());

        let text = render_receipt(&customer, &sale, &totals, fixed_time());
        let expected = "\
=== SEBZE-MEYVE FİŞİ ===
Tarih: 2024-03-05 14:30:00
Müşteri Türü: Pazarcı Esnafı
Müşteri Adı: İbrahim Yılmaz
Malın Cinsi: ŞEFTALİ
Parça Adedi: 3
Kilo: 12.50 kg
Birim Fiyat: 30.00
Net Tutar: 375.00
KDV (%2): 7.50
Toplam: 382.50
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_receipt_middleman_rate() {
        let mut sale = sample_sale();
        sale.role = Role::HalIciOrtaci;
        sale.weight_kg = 20.0;
        sale.unit_price = 10.0;
        let customer = Customer::new("Ayşe Kaya");
        let totals = pricing::compute_totals(sale.weight_kg, sale.unit_price, sale.role.vat_rate());

        let text = render_receipt(&customer, &sale, &totals, fixed_time());
        insta::assert_snapshot!(text.trim_end(), @r###"
        === SEBZE-MEYVE FİŞİ ===
        Tarih: 2024-03-05 14:30:00
        Müşteri Türü: Hal İçi / Ortacı
        Müşteri Adı: Ayşe Kaya
        Malın Cinsi: ŞEFTALİ
        Parça Adedi: 3
        Kilo: 20.00 kg
        Birim Fiyat: 10.00
        Net Tutar: 200.00
        KDV (%1): 2.00
        Toplam: 202.00
        "###);
    }

    #[test]
    fn test_receipt_prints_pieces_verbatim() {
        let mut sale = sample_sale();
        sale.piece_count = "3 kasa".to_string();
        let customer = Customer::new("Ali");
        let totals = pricing::compute_totals(sale.weight_kg, sale.unit_price, sale.role.vat_rate());

        let text = render_receipt(&customer, &sale, &totals, fixed_time());
        assert!(text.contains("Parça Adedi: 3 kasa\n"));
    }

    #[test]
    fn test_receipt_empty_pieces_line_stays() {
        let mut sale = sample_sale();
        sale.piece_count = String::new();
        let customer = Customer::new("Ali");
        let totals = pricing::compute_totals(sale.weight_kg, sale.unit_price, sale.role.vat_rate());

        let text = render_receipt(&customer, &sale, &totals, fixed_time());
        assert!(text.contains("Parça Adedi: \n"));
    }

    #[test]
    fn test_suggested_filename_format() {
        assert_eq!(suggested_filename(fixed_time()), "fis_20240305_143000.txt");
    }
}
