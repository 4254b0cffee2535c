// crates/whereis-core/src/lib.rs

//! # whereis-core
//!
//! Resolve free-form, possibly misspelled building references ("erie haull",
//! "LT", "leddy library") to a canonical building code from a fixed directory.
//!
//! ```rust
//! use whereis_core::{Directory, MatchResult, Resolver};
//!
//! let dir = Directory::from_records([
//!     ("ERIE", "Erie Hall"),
//!     ("BABC", "Biological and Agricultural Building Complex"),
//! ])?;
//! let resolver = Resolver::new(&dir);
//!
//! match resolver.resolve_by_text("erie haull") {
//!     MatchResult::Resolved(code) => assert_eq!(resolver.display_name(&code)?, "Erie Hall"),
//!     MatchResult::NotFound => unreachable!(),
//! }
//! # Ok::<(), whereis_core::DirectoryError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod search;
pub mod text;
pub mod traits;
// Raw dataset rows (input to the loaders)
pub mod raw;

// Re-exports
pub use crate::common::DirectoryStats;
pub use crate::error::{DirectoryError, Result};
pub use crate::model::{Building, Directory};
pub use crate::raw::BuildingRaw;
pub use crate::resolver::{BuildingList, Resolver};
pub use crate::search::{MatchConfig, MatchResult, SimilarityMetric};
pub use crate::text::normalize;
