//! Value-level checks for side-project records.
//!
//! The record type only constrains shape: four text fields and a closed status.
//! This module checks what the type cannot express, such as a non-empty title
//! or a well-formed URL. Checks never fail; they report [`Issue`]s and leave
//! the decision to the caller.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::ValidationOptions;
use crate::project::SideProject;

/// Schemes a project URL may use.
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A single problem found in a record.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    #[error("title is empty")]
    EmptyTitle,

    /// Only reported in strict mode
    #[error("description is empty")]
    EmptyDescription,

    #[error("url is empty")]
    EmptyUrl,

    #[error("url '{url}' is not valid: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("url '{url}' uses unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
}

/// Check a record, returning its issues in field order (title, description, url).
///
/// An empty vector means the record passed every check.
#[must_use]
pub fn validate_project(project: &SideProject, options: &ValidationOptions) -> Vec<Issue> {
    let mut issues = Vec::new();

    if project.title.trim().is_empty() {
        issues.push(Issue::EmptyTitle);
    }

    if options.strict && project.description.trim().is_empty() {
        issues.push(Issue::EmptyDescription);
    }

    if let Some(issue) = check_url(&project.url) {
        issues.push(issue);
    }

    issues
}

fn check_url(raw: &str) -> Option<Issue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Issue::EmptyUrl);
    }

    match Url::parse(trimmed) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => None,
        Ok(url) => Some(Issue::UnsupportedScheme {
            url: raw.to_string(),
            scheme: url.scheme().to_string(),
        }),
        Err(e) => Some(Issue::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Status;

    fn weather_app() -> SideProject {
        SideProject::new(
            "Weather App",
            "A simple weather dashboard",
            "https://example.com/weather",
            Status::Launched,
        )
    }

    #[test]
    fn test_conforming_record_has_no_issues() {
        let project = weather_app();

        assert!(validate_project(&project, &ValidationOptions::default()).is_empty());
        assert!(validate_project(&project, &ValidationOptions { strict: true }).is_empty());
    }

    #[test]
    fn test_blank_title() {
        let mut project = weather_app();
        project.title = "   ".to_string();

        assert_eq!(
            validate_project(&project, &ValidationOptions::default()),
            vec![Issue::EmptyTitle]
        );
    }

    #[test]
    fn test_empty_description_only_flagged_when_strict() {
        let mut project = weather_app();
        project.description = String::new();

        assert!(validate_project(&project, &ValidationOptions::default()).is_empty());
        assert_eq!(
            validate_project(&project, &ValidationOptions { strict: true }),
            vec![Issue::EmptyDescription]
        );
    }

    #[test]
    fn test_empty_url() {
        let mut project = weather_app();
        project.url = String::new();

        assert_eq!(
            validate_project(&project, &ValidationOptions::default()),
            vec![Issue::EmptyUrl]
        );
    }

    #[test]
    fn test_relative_url_is_invalid() {
        let mut project = weather_app();
        project.url = "example.com/weather".to_string();

        let issues = validate_project(&project, &ValidationOptions::default());
        assert_eq!(issues.len(), 1);
        assert!(matches!(&issues[0], Issue::InvalidUrl { url, .. } if url == "example.com/weather"));
    }

    #[test]
    fn test_non_http_scheme() {
        let mut project = weather_app();
        project.url = "ftp://example.com/weather".to_string();

        assert_eq!(
            validate_project(&project, &ValidationOptions::default()),
            vec![Issue::UnsupportedScheme {
                url: "ftp://example.com/weather".to_string(),
                scheme: "ftp".to_string(),
            }]
        );
    }

    #[test]
    fn test_issues_reported_in_field_order() {
        let project = SideProject::new("", "", "not a url", Status::InProgress);

        let issues = validate_project(&project, &ValidationOptions { strict: true });
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0], Issue::EmptyTitle);
        assert_eq!(issues[1], Issue::EmptyDescription);
        assert!(matches!(issues[2], Issue::InvalidUrl { .. }));
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let json = serde_json::to_value(Issue::EmptyTitle).unwrap();
        assert_eq!(json["kind"], "empty_title");
    }
}
