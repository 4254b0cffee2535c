//! whereis-cli
//! ===========
//!
//! Command-line front end for the `whereis-core` building directory resolver.
//!
//! The binary (`whereis-cli`) is the primary deliverable. This library target
//! holds the reply formatting and the `~command` dispatcher so they can be
//! tested without a terminal.
//!
//! Basic usage:
//!
//! ```text
//! whereis-cli whereis erie hall
//! whereis-cli list
//! whereis-cli --image-url https://maps.example/img whereis LT
//! echo "~whereis leddy libary" | whereis-cli chat
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dispatch;
pub mod reply;

pub use dispatch::{parse_message, Command, Dispatcher};
pub use reply::{Reply, ReplyField};
