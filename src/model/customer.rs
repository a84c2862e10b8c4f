//! Customer record stored in the directory.

use serde::{Deserialize, Serialize};

/// A customer known to the stall.
///
/// Identity is the normalized form of `name`; contact fields are free text
/// and default to empty when absent from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display-cased customer name.
    #[serde(default)]
    pub name: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Stall or delivery address.
    #[serde(default)]
    pub address: String,
}

impl Customer {
    /// Create a customer with empty contact fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: String::new(),
            address: String::new(),
        }
    }

    /// Create a customer with contact details.
    pub fn with_contact(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Normalized identity key for this customer.
    pub fn key(&self) -> String {
        crate::text::normalize_key(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_case_and_spacing() {
        let a = Customer::new("İbrahim Yılmaz");
        let b = Customer::new("  ibrahim   YILMAZ ");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let customer: Customer = serde_json::from_str(r#"{"name": "Ali"}"#).unwrap();
        assert_eq!(customer.name, "Ali");
        assert_eq!(customer.phone, "");
        assert_eq!(customer.address, "");
    }

    #[test]
    fn test_serializes_all_fields() {
        let customer = Customer::with_contact("Ali", "0500", "Hal 3");
        let json = serde_json::to_string(&customer).unwrap();
        assert_eq!(json, r#"{"name":"Ali","phone":"0500","address":"Hal 3"}"#);
    }
}
