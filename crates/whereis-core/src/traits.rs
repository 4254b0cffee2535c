// crates/whereis-core/src/traits.rs
use crate::model::Building;
use crate::text::normalize;

/// Name-based matching helpers for types that expose a display name and aliases.
///
/// Implementors provide the raw names; the exact-name stage of the matcher
/// compares them against an already-normalized query key.
///
/// # Examples
/// ```rust
/// use whereis_core::normalize;
/// use whereis_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Lambton  Tower").is_named_key(&normalize("lambton tower!")));
/// assert!(!Place("Erie Hall").is_named_key("erie"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Alternative names that should match exactly like the display name.
    fn alias_strs(&self) -> &[String] {
        &[]
    }

    /// Exact match against a key that is already the output of [`normalize`].
    fn is_named_key(&self, key: &str) -> bool {
        normalize(self.name_str()) == key || self.alias_strs().iter().any(|a| normalize(a) == key)
    }
}

impl NameMatch for Building {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alias_strs(&self) -> &[String] {
        &self.aliases
    }

    // Uses the keys folded at load time.
    fn is_named_key(&self, key: &str) -> bool {
        self.match_keys().any(|k| k == key)
    }
}
