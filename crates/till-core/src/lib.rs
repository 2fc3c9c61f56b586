//! Core types and trait definitions for the Till sales ledger.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod catalog;
pub mod error;
pub mod report;
pub mod sale;
pub mod store;

pub use error::{Error, Result};
