// crates/whereis-core/src/model/domain.rs
use crate::common::DirectoryStats;
use crate::text::normalize;
use std::collections::BTreeMap;

/// A single building record.
///
/// Owned exclusively by a [`Directory`]; handed out only by shared reference.
/// The normalized comparison keys are computed once at load time so the
/// matcher never re-folds the dataset per query.
#[derive(Clone, Debug)]
pub struct Building {
    /// Canonical (trimmed, upper-cased) code, e.g. `"ERIE"`.
    pub code: String,
    /// Display name exactly as given by the dataset.
    pub name: String,
    pub aliases: Vec<String>,

    pub(crate) code_key: String,
    pub(crate) name_key: String,
    pub(crate) alias_keys: Vec<String>,
}

impl Building {
    pub(crate) fn new(code: String, name: String, aliases: Vec<String>) -> Self {
        let code_key = normalize(&code);
        let name_key = normalize(&name);
        let alias_keys = aliases.iter().map(|a| normalize(a)).collect();
        Self {
            code,
            name,
            aliases,
            code_key,
            name_key,
            alias_keys,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Normalized full name followed by normalized aliases.
    pub(crate) fn match_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name_key.as_str()).chain(self.alias_keys.iter().map(String::as_str))
    }
}

/// The immutable building directory.
///
/// Keyed by canonical code; the `BTreeMap` gives every scan and listing a
/// stable code-lexicographic order independent of dataset order.
/// Built once through [`Directory::from_records`] (or a loader), never mutated
/// afterwards, so `&Directory` can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    pub(crate) buildings: BTreeMap<String, Building>,
}

impl Directory {
    /// Number of buildings in the directory.
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// All buildings, ordered by code.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Look up a building by code, case-insensitive (e.g. `"erie"`, `" ERIE "`).
    pub fn get(&self, code: &str) -> Option<&Building> {
        self.buildings.get(&canonical_code(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            buildings: self.buildings.len(),
            aliases: self.buildings.values().map(|b| b.aliases.len()).sum(),
        }
    }
}

/// Canonical storage form of a building code.
pub(crate) fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}
