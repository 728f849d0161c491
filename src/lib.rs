//! Bookworm - command-line browser for the Gutendex book catalog.
//!
//! This library provides functionality for:
//! - Fetching catalog pages over HTTP and decoding them into typed records
//! - Searching, listing and ranking the books on a page
//! - Driving all of the above from an interactive numbered menu

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod fetcher;
pub mod menu;
pub mod model;
pub mod query;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use console::Console;
pub use error::{CatalogError, ConfigError, DecodeError, FetchError, InputError, MenuError};
pub use fetcher::{Fetcher, HttpFetcher};
pub use menu::{Action, Menu, MenuChoice};
pub use model::{AuthorRecord, BookRecord, SearchResult, Year};
