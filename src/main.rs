//! # side-projects
//!
//! List, filter and validate a side-project listing.
//!
//! ## Usage
//!
//! ```bash
//! # List every project in ./projects.toml
//! side-projects
//!
//! # Only launched projects, alphabetically, from a JSON listing
//! side-projects site/projects.json --status launched --sort title
//!
//! # Validate titles, URLs and descriptions; exit 1 on any issue
//! side-projects --strict
//! ```

use std::process::exit;

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use side_projects::{cli::Cli, config::FileConfig, loader::load_projects, logging, output::JsonOutput};
use tracing::{debug, warn};

/// Entry point for the side-projects application.
///
/// Errors from [`inner_main`] are printed to stderr before exiting with a
/// non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and sets up logging
/// 2. Loads the persistent configuration file (if present)
/// 3. Loads the listing file
/// 4. Filters and sorts the projects
/// 5. Optionally validates them
/// 6. Prints the list and summary, or a single JSON document with `--json`
///
/// # Errors
///
/// Fails when the listing cannot be read or parsed, when JSON serialization
/// fails, or when validation was requested and at least one project has issues.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose());

    let json_mode = args.json();

    let file_config = FileConfig::load().unwrap_or_else(|e| {
        if json_mode {
            warn!("failed to load config file: {e}");
        } else {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        }
        FileConfig::default()
    });

    let listing = args.listing_file(&file_config);
    let filter_options = args.filter_options(&file_config);
    let validation_options = args.validation_options(&file_config);
    let check = args.check();

    debug!(listing = %listing.display(), check, "resolved options");

    let projects = load_projects(&listing)?.filter(&filter_options);

    let report = check.then(|| projects.validate(&validation_options));

    if json_mode {
        let mut output = JsonOutput::from_projects(&projects);
        if let Some(report) = &report {
            output = output.with_issues(report);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if projects.is_empty() {
        println!("{}", "✨ No projects match the specified criteria!".green());
    } else {
        println!("{}", "📚 Side projects:".bold());
        projects.print_list();
        println!();
        projects.print_summary();
    }

    let Some(report) = report else {
        return Ok(());
    };

    if report.is_empty() {
        if !json_mode {
            println!("\n{}", "✅ All projects passed validation".green());
        }
        return Ok(());
    }

    if !json_mode {
        println!("\n{}", "⚠️  Validation issues:".yellow().bold());
        for entry in &report {
            let title = if entry.title.trim().is_empty() {
                format!("#{}", entry.index + 1)
            } else {
                entry.title.clone()
            };
            println!("  {}", title.bright_white().bold());
            for issue in &entry.issues {
                println!("    {} {issue}", "•".red());
            }
        }
    }

    bail!("{} project(s) failed validation", report.len());
}
