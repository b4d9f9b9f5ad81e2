//! # Roster Core
//!
//! Core types, errors, codec and traits for the roster service.
//!
//! This crate provides the foundational building blocks used by all other
//! roster crates:
//!
//! - **Types**: the `Entry` record, version tokens, remote documents
//! - **Codec**: the `###`-marked line format of the durable file
//! - **Errors**: comprehensive error types with context
//! - **Traits**: interfaces for the remote store, cache mirror and notifier
//!
//! ## Example
//!
//! ```rust
//! use roster_core::{codec, Entry};
//!
//! let entry = Entry::new("alpha", "2099-01-01", "10.0.0.1");
//! let line = codec::format_line(&entry);
//! assert_eq!(codec::parse_line(&line), Some(entry));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod codec;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, RosterError};
pub use traits::*;
pub use types::*;
