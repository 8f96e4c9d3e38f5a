//! Masking strategies
//!
//! The strategy set is fixed by design, so it is a closed enumeration with
//! one handler each rather than open-ended plugin dispatch. All length
//! arithmetic is in characters, not bytes, so multi-byte input keeps its
//! visible shape.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Replacement emitted by the redact strategy
pub const REDACTED: &str = "[GIZLI]";

/// One of the four fixed masking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingStrategy {
    /// Shape-aware partial masking (email/IBAN/phone patterns)
    Mask,
    /// Salted one-way SHA-256 digest, lowercase hex
    Hash,
    /// Type-preserving randomization, character by character
    Random,
    /// Constant `[GIZLI]` replacement
    Redact,
}

impl MaskingStrategy {
    /// Short human description, shown by the CLI
    pub fn description(&self) -> &'static str {
        match self {
            MaskingStrategy::Mask => "keeps the first and last characters, stars the middle",
            MaskingStrategy::Hash => "deterministic salted SHA-256 digest",
            MaskingStrategy::Random => "random replacement preserving character classes",
            MaskingStrategy::Redact => "replaces the whole value with [GIZLI]",
        }
    }
}

impl Default for MaskingStrategy {
    fn default() -> Self {
        Self::Mask
    }
}

impl fmt::Display for MaskingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskingStrategy::Mask => write!(f, "mask"),
            MaskingStrategy::Hash => write!(f, "hash"),
            MaskingStrategy::Random => write!(f, "random"),
            MaskingStrategy::Redact => write!(f, "redact"),
        }
    }
}

impl FromStr for MaskingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mask" => Ok(MaskingStrategy::Mask),
            "hash" => Ok(MaskingStrategy::Hash),
            "random" => Ok(MaskingStrategy::Random),
            "redact" => Ok(MaskingStrategy::Redact),
            other => Err(format!(
                "unknown strategy \"{other}\" (expected mask, hash, random, or redact)"
            )),
        }
    }
}

/// Transform a single cell value under the given strategy
///
/// The salt is consumed only by the hash strategy. The random strategy is
/// intentionally non-deterministic; everything else is a pure function of
/// its inputs.
pub fn transform(value: &str, strategy: MaskingStrategy, salt: &str) -> String {
    match strategy {
        MaskingStrategy::Mask => partial_mask(value),
        MaskingStrategy::Hash => hash_value(value, salt),
        MaskingStrategy::Random => randomize(value),
        MaskingStrategy::Redact => REDACTED.to_string(),
    }
}

/// Shape-aware partial masking, dispatched by pattern on the trimmed value
///
/// `ahmet@example.com` → `ah***@ex*****.com`,
/// `TR18…2315` (26 chars) → `TR18` + 18 asterisks + `2315`,
/// `05321234567` → `0532***4567`,
/// anything else keeps the first and last two characters.
fn partial_mask(value: &str) -> String {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len <= 4 {
        return "*".repeat(len);
    }

    if trimmed.contains('@') {
        return mask_email(trimmed);
    }

    // Turkish IBAN shape: TR + 24 characters
    if trimmed.starts_with("TR") && len == 26 {
        return mask_edges(trimmed, len, 4, len - 8);
    }

    // Phone shape: leading 0, 11 digits; middle width is fixed at 3 so the
    // output stays 4+3+4 = 11 characters
    if trimmed.starts_with('0') && len == 11 {
        return mask_edges(trimmed, len, 4, 3);
    }

    mask_edges(trimmed, len, 2, len.saturating_sub(4).max(1))
}

/// Keep `keep` characters on each edge, put `middle` asterisks between
fn mask_edges(value: &str, len: usize, keep: usize, middle: usize) -> String {
    let first: String = value.chars().take(keep).collect();
    let last: String = value.chars().skip(len - keep).collect();
    format!("{first}{}{last}", "*".repeat(middle))
}

/// Mask an email, preserving the `@` and the dot-separated domain suffix
fn mask_email(email: &str) -> String {
    let (local, domain) = email.split_once('@').unwrap_or((email, ""));
    let masked_local = mask_label(local);

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return format!("{masked_local}@{domain}");
    }

    let masked_domain = mask_label(parts[0]);
    let suffix = parts[1..].join(".");
    format!("{masked_local}@{masked_domain}.{suffix}")
}

/// Keep the first two characters of a label, star the rest; labels of two
/// characters or fewer are fully starred
fn mask_label(label: &str) -> String {
    let len = label.chars().count();
    if len > 2 {
        let first: String = label.chars().take(2).collect();
        format!("{first}{}", "*".repeat(len - 2))
    } else {
        "*".repeat(len)
    }
}

/// SHA-256 over the UTF-8 bytes of `value` + `salt`, rendered as lowercase
/// hex
fn hash_value(value: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}

/// Replace each character with a random one from its own class; characters
/// outside uppercase/lowercase/digit pass through unchanged
fn randomize(value: &str) -> String {
    let mut rng = rand::thread_rng();
    value
        .chars()
        .map(|ch| match ch {
            'A'..='Z' => rng.gen_range(b'A'..=b'Z') as char,
            'a'..='z' => rng.gen_range(b'a'..=b'z') as char,
            '0'..='9' => rng.gen_range(b'0'..=b'9') as char,
            other => other,
        })
        .collect()
}
