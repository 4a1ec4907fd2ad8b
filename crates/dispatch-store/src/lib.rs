#![deny(unsafe_code)]

//! Flat-file tabular record store.
//!
//! One [`Table`] per comma-delimited file, loaded whole, mutated in memory,
//! and rewritten whole after every mutation.

pub mod error;
pub mod table;

pub use error::StoreError;
pub use table::{Table, ensure_seeded, require_non_empty};
