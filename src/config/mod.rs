//! Configuration types and options for the application.
//!
//! This module contains the configuration structures used throughout the
//! application: the persistent configuration file plus the resolved filtering
//! and validation options.

pub mod file;
pub mod filter;
pub mod validation;

pub use file::{FileConfig, expand_tilde};
pub use filter::{FilterOptions, SortCriteria};
pub use validation::ValidationOptions;
