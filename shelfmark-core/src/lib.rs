//! Shelfmark Core Library
//!
//! This crate provides the in-memory book catalog for the Shelfmark library system.
//! A [`Catalog`] owns a bounded, ordered collection of [`Record`]s and exposes
//! lookup, borrow/return and ordering operations over them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod record;

pub use catalog::{Catalog, SortKey};
pub use config::{CatalogConfig, DEFAULT_CAPACITY};
pub use error::{CatalogError, ConfigError, RecordError, Result, ShelfError};
pub use record::{Record, MAX_PUBLICATION_YEAR};
