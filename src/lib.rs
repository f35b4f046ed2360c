//! # side-projects
//!
//! A small library and CLI for describing side-project entries: a title, a
//! description, a URL and a lifecycle status that is always one of
//! `"in progress 🔨"`, `"launched 🚀"` or `"discontinued 🔐"`.
//!
//! This library provides the record type, loading of TOML/JSON listings,
//! optional value-level validation, and the filtering and reporting used by
//! the `side-projects` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod output;
pub mod project;
pub mod validation;

pub use error::{Error, Result};
