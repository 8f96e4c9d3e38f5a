//! Sensitive-column detection
//!
//! Scans column names against a keyword lexicon to suggest columns for
//! masking. Detection is advisory only: the caller may add or remove
//! columns freely before masking.
//!
//! The lexicon is an owned, immutable table rather than a global so it is
//! testable and replaceable.

use std::collections::BTreeSet;

/// Built-in lexicon: national-ID, email, phone, bank-account, credential,
/// payment-card, and postal-address terms, in Turkish and English.
const DEFAULT_LEXICON: &[&str] = &[
    "tc", "kimlik", "tckn", // national ID
    "email", "eposta", "mail", // email
    "telefon", "phone", "tel", "gsm", // phone
    "iban", "hesap", // bank account
    "password", "şifre", "parola", // credentials
    "kredi", "kart", "card", // payment card
    "adres", "address", // postal address
];

/// Heuristic detector for columns likely to hold PII
///
/// A column matches if its lowercased name contains any lexicon entry as a
/// substring; names are not tokenized, so `telefon_numarasi` matches
/// `telefon`.
///
/// # Examples
///
/// ```
/// use tabmask::detect::SensitiveColumnDetector;
///
/// let detector = SensitiveColumnDetector::default();
/// let columns = vec!["id".to_string(), "email_adresi".to_string()];
/// let suggested = detector.suggest(&columns);
///
/// assert!(suggested.contains("email_adresi"));
/// assert!(!suggested.contains("id"));
/// ```
#[derive(Debug, Clone)]
pub struct SensitiveColumnDetector {
    lexicon: Vec<String>,
}

impl SensitiveColumnDetector {
    /// Create a detector with the built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(DEFAULT_LEXICON.iter().map(|s| (*s).to_string()))
    }

    /// Create a detector with a custom lexicon
    ///
    /// Entries are lowercased; matching is case-insensitive containment.
    pub fn with_lexicon(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            lexicon: entries.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Suggest columns for masking
    ///
    /// Returns the set of column names whose lowercased form contains any
    /// lexicon entry. An empty set is valid; no suggestion is forced.
    pub fn suggest(&self, columns: &[String]) -> BTreeSet<String> {
        columns
            .iter()
            .filter(|column| {
                let lowered = column.to_lowercase();
                self.lexicon.iter().any(|entry| lowered.contains(entry))
            })
            .cloned()
            .collect()
    }
}

impl Default for SensitiveColumnDetector {
    fn default() -> Self {
        Self::new()
    }
}
