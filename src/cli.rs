//! Command-line interface definition.
//!
//! Arguments are grouped the same way as the config file sections and are
//! resolved against a [`FileConfig`]: a CLI value wins over the config file,
//! which wins over the hardcoded default.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing::warn;

use crate::config::{FileConfig, FilterOptions, SortCriteria, ValidationOptions, expand_tilde};
use crate::project::Status;

/// Listing file used when neither the CLI nor the config file names one.
pub const DEFAULT_LISTING: &str = "projects.toml";

#[derive(Args, Debug)]
struct FilteringArgs {
    /// Only show projects with this status
    #[arg(short = 's', long, value_enum)]
    status: Option<Status>,

    /// Order in which projects are listed
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the listing order
    #[arg(short = 'r', long)]
    reverse: bool,
}

#[derive(Args, Debug)]
struct ValidationArgs {
    /// Validate titles and URLs; exit with an error if any project has issues
    #[arg(short = 'c', long)]
    check: bool,

    /// Also require non-empty descriptions (implies --check)
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Emit a single JSON document on stdout
    #[arg(long)]
    json: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "side-projects")]
#[command(about = "List, filter and validate side-project entries")]
#[command(version)]
pub struct Cli {
    /// The listing file to read (.toml or .json)
    file: Option<PathBuf>,

    /// Filtering options
    #[command(flatten)]
    filtering: FilteringArgs,

    /// Validation options
    #[command(flatten)]
    validation: ValidationArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    #[must_use]
    pub fn json(&self) -> bool {
        self.output.json
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.output.verbose
    }

    /// Whether validation was requested, from the CLI only.
    #[must_use]
    pub fn check(&self) -> bool {
        self.validation.check || self.validation.strict
    }

    /// Resolve the listing file: CLI, then config file, then [`DEFAULT_LISTING`].
    #[must_use]
    pub fn listing_file(&self, config: &FileConfig) -> PathBuf {
        self.file
            .clone()
            .or_else(|| config.file.clone())
            .map_or_else(|| PathBuf::from(DEFAULT_LISTING), |p| expand_tilde(&p))
    }

    /// Resolve the filtering options.
    ///
    /// Unrecognized values in the config file are logged and ignored.
    #[must_use]
    pub fn filter_options(&self, config: &FileConfig) -> FilterOptions {
        let status = self.filtering.status.or_else(|| {
            config
                .filtering
                .status
                .as_deref()
                .and_then(|name| match Status::from_short_name(name) {
                    Ok(status) => Some(status),
                    Err(e) => {
                        warn!("ignoring filtering.status from config file: {e}");
                        None
                    }
                })
        });

        let sort = self.filtering.sort.unwrap_or_else(|| {
            config
                .filtering
                .sort
                .as_deref()
                .and_then(|name| {
                    let sort = SortCriteria::from_name(name);
                    if sort.is_none() {
                        warn!("ignoring unknown filtering.sort '{name}' from config file");
                    }
                    sort
                })
                .unwrap_or_default()
        });

        FilterOptions {
            status,
            sort,
            reverse: self.filtering.reverse || config.filtering.reverse.unwrap_or(false),
        }
    }

    #[must_use]
    pub fn validation_options(&self, config: &FileConfig) -> ValidationOptions {
        ValidationOptions {
            strict: self.validation.strict || config.validation.strict.unwrap_or(false),
        }
    }
}
