//! Configuration constants and operator roles.

use serde::{Deserialize, Serialize};

/// Similarity cutoff for resolving a typed name to a single customer.
pub const NAME_MATCH_CUTOFF: f64 = 0.7;

/// Similarity cutoff for the live-filter candidate list.
pub const FILTER_CUTOFF: f64 = 0.6;

/// Maximum number of fuzzy candidates added by the live filter.
pub const FILTER_LIMIT: usize = 10;

/// Bounded wait for the print subprocess, in seconds.
pub const PRINT_TIMEOUT_SECS: u64 = 15;

/// Default customer store file name.
pub const DEFAULT_STORE_FILE: &str = "customers.json";

/// Default diagnostic log file name.
pub const DEFAULT_LOG_FILE: &str = "uygulama.log";

/// Customer type selected for a sale; picks the VAT rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Market stallholder ("Pazarcı Esnafı"), 2% VAT.
    #[default]
    PazarciEsnafi,
    /// Wholesale-hall middleman ("Hal İçi / Ortacı"), 1% VAT.
    HalIciOrtaci,
}

/// All selectable roles, in display order.
pub const ROLES: [Role; 2] = [Role::PazarciEsnafi, Role::HalIciOrtaci];

impl Role {
    /// Parse a role from its Turkish label or a short ASCII alias.
    pub fn from_label(s: &str) -> Option<Self> {
        match crate::text::normalize_key(s).as_str() {
            "pazarcı esnafı" | "pazarci esnafi" | "pazarcı" | "pazarci" | "esnaf" => {
                Some(Role::PazarciEsnafi)
            }
            "hal içi / ortacı" | "hal ici / ortaci" | "hal içi" | "hal ici" | "ortacı"
            | "ortaci" | "halıcı" | "halici" => Some(Role::HalIciOrtaci),
            _ => None,
        }
    }

    /// VAT rate applied to the net amount for this role.
    pub fn vat_rate(&self) -> f64 {
        match self {
            Role::PazarciEsnafi => 0.02,
            Role::HalIciOrtaci => 0.01,
        }
    }

    /// Label printed on the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            Role::PazarciEsnafi => "Pazarcı Esnafı",
            Role::HalIciOrtaci => "Hal İçi / Ortacı",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
