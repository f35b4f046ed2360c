//! JSON output for `--json` mode.
//!
//! The whole result of a run is emitted as a single JSON document on stdout
//! so it can be piped into other tools.

use serde::Serialize;

use crate::project::{ProjectIssues, Projects, SideProject, StatusCounts};

/// Per-status counts plus the total.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub total: usize,

    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// Issues of one record, rendered as messages.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    pub index: usize,
    pub title: String,
    pub messages: Vec<String>,
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub projects: Vec<SideProject>,
    pub summary: JsonSummary,

    /// Only present when validation was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<JsonIssue>>,
}

impl JsonOutput {
    #[must_use]
    pub fn from_projects(projects: &Projects) -> Self {
        let counts = projects.status_counts();

        Self {
            projects: projects.as_slice().to_vec(),
            summary: JsonSummary {
                total: counts.total(),
                counts,
            },
            issues: None,
        }
    }

    /// Attach a validation report. An empty report still yields an empty array.
    #[must_use]
    pub fn with_issues(mut self, report: &[ProjectIssues]) -> Self {
        self.issues = Some(
            report
                .iter()
                .map(|entry| JsonIssue {
                    index: entry.index,
                    title: entry.title.clone(),
                    messages: entry.issues.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        );
        self
    }
}
