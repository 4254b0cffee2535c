// crates/whereis-core/src/common.rs
use serde::Serialize;

/// Simple aggregate statistics for the directory.
///
/// Returned by [`crate::Directory::stats`]; counts reflect the validated
/// in-memory directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub buildings: usize,
    pub aliases: usize,
}
