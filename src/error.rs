//! Error types for the library.
//!
//! Every fallible library operation returns [`Result`]. The binary wraps
//! these with `anyhow` for context before printing them.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Issue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML listing {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON listing {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported listing format for {}: expected a .toml or .json file", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(
        "unknown status '{0}': expected one of \"in progress 🔨\", \"launched 🚀\", \"discontinued 🔐\""
    )]
    UnknownStatus(String),

    #[error("project '{title}' is invalid: {}", join_issues(.issues))]
    Invalid { title: String, issues: Vec<Issue> },
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_message_lists_literals() {
        let err = Error::UnknownStatus("archived".to_string());
        let message = err.to_string();

        assert!(message.contains("'archived'"));
        assert!(message.contains("launched 🚀"));
    }

    #[test]
    fn test_invalid_joins_issues() {
        let err = Error::Invalid {
            title: "Weather App".to_string(),
            issues: vec![Issue::EmptyTitle, Issue::EmptyUrl],
        };

        assert_eq!(
            err.to_string(),
            "project 'Weather App' is invalid: title is empty; url is empty"
        );
    }

    #[test]
    fn test_unsupported_format_mentions_path() {
        let err = Error::UnsupportedFormat(PathBuf::from("projects.yaml"));
        assert!(err.to_string().contains("projects.yaml"));
    }
}
