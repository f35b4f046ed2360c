//! The side-project configuration record.
//!
//! This module defines the single data shape of a listing: a project's title,
//! description, URL and lifecycle status.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::config::ValidationOptions;
use crate::error::{Error, Result};
use crate::validation::{Issue, validate_project};

use super::Status;

/// A side-project entry as it appears in a listing file.
///
/// All four fields are required and unknown fields are rejected when
/// deserializing. `status` only accepts the three literal tags of [`Status`].
/// Nothing else is enforced by the type; see [`SideProject::validate`] for
/// value-level checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideProject {
    /// Human-readable name of the project
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Where the project lives. Not checked unless validated.
    pub url: String,

    /// Lifecycle stage
    pub status: Status,
}

impl SideProject {
    /// Create a new record.
    ///
    /// # Examples
    ///
    /// ```
    /// # use side_projects::project::{SideProject, Status};
    /// let project = SideProject::new(
    ///     "Weather App",
    ///     "A simple weather dashboard",
    ///     "https://example.com/weather",
    ///     Status::Launched,
    /// );
    /// assert_eq!(project.to_string(), "🚀 Weather App (https://example.com/weather)");
    /// ```
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            status,
        }
    }

    /// Whether the project is still alive (in progress or launched).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != Status::Discontinued
    }

    /// Run the value-level checks, returning every issue found.
    #[must_use]
    pub fn validate(&self, options: &ValidationOptions) -> Vec<Issue> {
        validate_project(self, options)
    }

    /// Like [`SideProject::validate`], but turns any issue into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] carrying every issue if at least one check fails.
    pub fn ensure_valid(&self, options: &ValidationOptions) -> Result<()> {
        let issues = self.validate(options);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Invalid {
                title: self.title.clone(),
                issues,
            })
        }
    }
}

impl Display for SideProject {
    /// Format the project as `{symbol} {title} ({url})`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} ({})", self.status.symbol(), self.title, self.url)
    }
}
