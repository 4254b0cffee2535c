// crates/whereis-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns a JSON dataset (plain or gzipped) into a validated [`Directory`].
//! The bundled campus dataset is compiled into the binary and parsed once per
//! process on first use.

use crate::error::Result;
use crate::model::Directory;
use crate::raw::BuildingsRaw;
use once_cell::sync::OnceCell;

#[cfg(feature = "json")]
mod common_io;

#[cfg(feature = "json")]
use std::io::Read;
#[cfg(feature = "json")]
use std::path::Path;

/// The dataset shipped with the crate.
pub const BUNDLED_DATASET: &str = include_str!("../../data/buildings.json");

static BUNDLED_DIRECTORY: OnceCell<Directory> = OnceCell::new();

impl Directory {
    /// Parse a JSON array of `{ "code", "name", "aliases"? }` rows.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BuildingsRaw = serde_json::from_str(json)?;
        Self::from_records(raw)
    }

    /// The bundled directory, built on first call and shared for the rest of
    /// the process.
    ///
    /// Prefer constructing your own [`Directory`] in tests so they stay isolated.
    pub fn bundled() -> Result<&'static Directory> {
        BUNDLED_DIRECTORY.get_or_try_init(|| Self::from_json_str(BUNDLED_DATASET))
    }

    /// Parse a JSON dataset from any reader.
    #[cfg(feature = "json")]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BuildingsRaw = serde_json::from_reader(reader)?;
        Self::from_records(raw)
    }

    /// Load a dataset file; `.gz` files are decompressed transparently when
    /// the `compact` feature is enabled.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading building dataset");
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }
}
