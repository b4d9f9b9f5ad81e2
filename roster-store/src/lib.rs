//! # Roster Store
//!
//! Remote text store client: reads and conditionally replaces one file in
//! a GitHub repository through the contents API. The file's blob `sha` is
//! the opaque version token; a write with a stale token is rejected by
//! GitHub and surfaces as `Conflict`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod github;

pub use github::{GithubStore, StoreConfig};
