//! Filtering configuration for listing output.
//!
//! This module defines the options that decide which projects are shown and
//! in what order.

use clap::ValueEnum;

use crate::project::Status;

/// Order in which projects are listed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum SortCriteria {
    /// Keep the order of the listing file
    #[default]
    Input,

    /// Alphabetical by title, ignoring case
    Title,

    /// Lifecycle order (in progress, launched, discontinued), then by title
    Status,
}

impl SortCriteria {
    /// Parse a sort criterion name, ignoring case.
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}

/// Configuration for which projects to show and how to order them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Only show projects with this status
    pub status: Option<Status>,

    pub sort: SortCriteria,

    /// Reverse the final order
    pub reverse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_criteria_default() {
        assert_eq!(SortCriteria::default(), SortCriteria::Input);
    }

    #[test]
    fn test_sort_criteria_from_name() {
        assert_eq!(SortCriteria::from_name("title"), Some(SortCriteria::Title));
        assert_eq!(SortCriteria::from_name("STATUS"), Some(SortCriteria::Status));
        assert_eq!(SortCriteria::from_name("input"), Some(SortCriteria::Input));
        assert_eq!(SortCriteria::from_name("size"), None);
    }

    #[test]
    fn test_filter_options_default() {
        let options = FilterOptions::default();

        assert!(options.status.is_none());
        assert_eq!(options.sort, SortCriteria::Input);
        assert!(!options.reverse);
    }

    #[test]
    fn test_filter_options_clone() {
        let original = FilterOptions {
            status: Some(Status::Launched),
            sort: SortCriteria::Title,
            reverse: true,
        };
        let cloned = original.clone();

        assert_eq!(original, cloned);
    }
}
