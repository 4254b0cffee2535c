//! Workspace umbrella crate: re-exports `whereis-core` for the demos and
//! benchmarks hosted at the repository root.

pub use whereis_core::*;
