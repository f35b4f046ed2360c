//! Collection management and operations for side-project listings.
//!
//! This module provides the `Projects` struct which wraps the records of a
//! listing and provides filtering, sorting, validation and summary reporting.

use std::cmp::Ordering;

use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::config::{FilterOptions, SortCriteria, ValidationOptions};
use crate::validation::Issue;

use super::{SideProject, Status};

/// A listing of side projects, in file order unless sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projects(Vec<SideProject>);

/// Number of projects per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub in_progress: usize,
    pub launched: usize,
    pub discontinued: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.in_progress + self.launched + self.discontinued
    }

    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::InProgress => self.in_progress,
            Status::Launched => self.launched,
            Status::Discontinued => self.discontinued,
        }
    }
}

/// Issues found in one record of a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectIssues {
    /// Position of the record in the (filtered) listing
    pub index: usize,

    pub title: String,

    pub issues: Vec<Issue>,
}

impl From<Vec<SideProject>> for Projects {
    fn from(projects: Vec<SideProject>) -> Self {
        Self(projects)
    }
}

impl FromIterator<SideProject> for Projects {
    fn from_iter<I: IntoIterator<Item = SideProject>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Projects {
    type Item = SideProject;
    type IntoIter = std::vec::IntoIter<SideProject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a SideProject;
    type IntoIter = std::slice::Iter<'a, SideProject>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Projects {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SideProject> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SideProject] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<SideProject> {
        self.0
    }

    /// Keep only the projects with the given status, preserving order.
    #[must_use]
    pub fn with_status(self, status: Status) -> Self {
        self.0.into_iter().filter(|p| p.status == status).collect()
    }

    /// Apply the status filter, then the sort criterion, then the optional reversal.
    ///
    /// Sorting is stable: projects that compare equal keep their listing order.
    #[must_use]
    pub fn filter(self, options: &FilterOptions) -> Self {
        let before = self.len();

        let mut projects = match options.status {
            Some(status) => self.with_status(status),
            None => self,
        };

        match options.sort {
            SortCriteria::Input => {}
            SortCriteria::Title => projects.0.sort_by(compare_titles),
            SortCriteria::Status => projects
                .0
                .sort_by(|a, b| a.status.cmp(&b.status).then_with(|| compare_titles(a, b))),
        }

        if options.reverse {
            projects.0.reverse();
        }

        debug!(
            before,
            after = projects.len(),
            status = ?options.status,
            sort = ?options.sort,
            reverse = options.reverse,
            "filtered listing"
        );

        projects
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.0
            .iter()
            .fold(StatusCounts::default(), |mut counts, project| {
                match project.status {
                    Status::InProgress => counts.in_progress += 1,
                    Status::Launched => counts.launched += 1,
                    Status::Discontinued => counts.discontinued += 1,
                }
                counts
            })
    }

    /// Validate every record, returning only the records that have issues.
    #[must_use]
    pub fn validate(&self, options: &ValidationOptions) -> Vec<ProjectIssues> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, project)| {
                let issues = project.validate(options);
                (!issues.is_empty()).then(|| ProjectIssues {
                    index,
                    title: project.title.clone(),
                    issues,
                })
            })
            .collect()
    }

    /// Print every project on its own line, with its description underneath.
    pub fn print_list(&self) {
        for project in &self.0 {
            let title = match project.status {
                Status::InProgress => project.title.yellow().bold(),
                Status::Launched => project.title.bright_green().bold(),
                Status::Discontinued => project.title.dimmed().bold(),
            };

            println!(
                "  {} {title} {}",
                project.status.symbol(),
                project.url.bright_blue().underline()
            );

            if !project.description.trim().is_empty() {
                println!("     {}", project.description.bright_white());
            }
        }
    }

    /// Print per-status counts and the total.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🔨 2 in progress
    ///   🚀 3 launched
    ///   📋 Total: 5 projects
    /// ```
    pub fn print_summary(&self) {
        let counts = self.status_counts();

        for status in Status::ALL {
            let count = counts.get(status);
            if count > 0 {
                println!(
                    "  {} {} {}",
                    status.symbol(),
                    count.to_string().bright_white(),
                    status.label()
                );
            }
        }

        println!(
            "  📋 Total: {} projects",
            counts.total().to_string().bright_green().bold()
        );
    }
}

fn compare_titles(a: &SideProject, b: &SideProject) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}
