// crates/whereis-core/src/resolver.rs

//! # Directory Resolver
//!
//! The facade the command layer talks to. Borrows an immutable [`Directory`],
//! so any number of resolvers (one per request, per thread, ...) can share a
//! single directory without locking.

use crate::error::{DirectoryError, Result};
use crate::model::Directory;
use crate::search::{match_query, MatchConfig, MatchResult};
use crate::text::normalize;

/// Building codes and display names, aligned by index and ordered by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingList<'a> {
    pub codes: Vec<&'a str>,
    pub full_names: Vec<&'a str>,
}

impl<'a> BuildingList<'a> {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(code, full_name)` pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.codes.iter().copied().zip(self.full_names.iter().copied())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'d> {
    directory: &'d Directory,
    config: MatchConfig,
}

impl<'d> Resolver<'d> {
    /// Resolver with the default fuzzy configuration.
    pub fn new(directory: &'d Directory) -> Self {
        Self {
            directory,
            config: MatchConfig::default(),
        }
    }

    /// Resolver with a custom fuzzy configuration.
    pub fn with_config(directory: &'d Directory, config: MatchConfig) -> Self {
        Self { directory, config }
    }

    pub fn directory(&self) -> &'d Directory {
        self.directory
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Normalize `raw_text` and resolve it to a building code.
    ///
    /// Empty or whitespace-only input is always `NotFound`.
    ///
    /// ```rust
    /// use whereis_core::{Directory, MatchResult, Resolver};
    ///
    /// let dir = Directory::from_records([("ERIE", "Erie Hall"), ("LT", "Lambton Tower")]).unwrap();
    /// let resolver = Resolver::new(&dir);
    ///
    /// assert_eq!(resolver.resolve_by_text("  erie HALL "), MatchResult::Resolved("ERIE".into()));
    /// assert_eq!(resolver.resolve_by_text("   "), MatchResult::NotFound);
    /// ```
    pub fn resolve_by_text(&self, raw_text: &str) -> MatchResult {
        let query = normalize(raw_text);
        match_query(&query, self.directory, &self.config)
    }

    /// Display name for a code previously returned as [`MatchResult::Resolved`].
    ///
    /// An unknown code is a caller bug and yields [`DirectoryError::UnknownCode`].
    pub fn display_name(&self, code: &str) -> Result<&'d str> {
        self.directory
            .get(code)
            .map(|b| b.name())
            .ok_or_else(|| DirectoryError::UnknownCode(code.to_owned()))
    }

    /// Every building, ordered by code, as two index-aligned sequences.
    pub fn list_all(&self) -> BuildingList<'d> {
        let (codes, full_names) = self
            .directory
            .buildings()
            .map(|b| (b.code(), b.name()))
            .unzip();
        BuildingList { codes, full_names }
    }
}
