//! Reading side-project listings from disk.
//!
//! A listing is either a TOML document with a `[[projects]]` array of tables,
//! or a JSON document that is a bare array of records or an object with a
//! `projects` array. The format is chosen from the file extension.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    path::Path,
};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::project::{Projects, SideProject};

/// Supported listing formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Detect the format from a file extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any extension other than
    /// `.toml` or `.json`, or when there is no extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Toml => f.write_str("toml"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ListingDocument {
    #[serde(default)]
    projects: Vec<SideProject>,
}

/// Parse listing content in the given format.
///
/// `origin` is only used to label errors.
///
/// # Errors
///
/// Returns [`Error::Toml`] or [`Error::Json`] when the content does not match
/// the listing shape: malformed syntax, a missing or unknown field, or a
/// status outside the three literal tags.
pub fn parse_projects(content: &str, format: Format, origin: &Path) -> Result<Projects> {
    let projects = match format {
        Format::Toml => {
            let document: ListingDocument =
                toml::from_str(content).map_err(|source| Error::Toml {
                    path: origin.to_path_buf(),
                    source,
                })?;
            document.projects
        }
        Format::Json => {
            let json_error = |source| Error::Json {
                path: origin.to_path_buf(),
                source,
            };

            // A bare array and a `{ "projects": [...] }` object are both accepted.
            let value: serde_json::Value = serde_json::from_str(content).map_err(json_error)?;
            if value.is_array() {
                serde_json::from_value(value).map_err(json_error)?
            } else {
                serde_json::from_value::<ListingDocument>(value)
                    .map_err(json_error)?
                    .projects
            }
        }
    };

    Ok(projects.into())
}

/// Read and parse a listing file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown extension,
/// [`Error::Io`] when the file cannot be read, and the errors of
/// [`parse_projects`] when its content is not a valid listing.
pub fn load_projects(path: &Path) -> Result<Projects> {
    let format = Format::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let projects = parse_projects(&content, format, path)?;

    debug!(
        path = %path.display(),
        %format,
        count = projects.len(),
        "loaded listing"
    );

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::project::Status;

    fn origin() -> PathBuf {
        PathBuf::from("projects")
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("projects.toml")).unwrap(),
            Format::Toml
        );
        assert_eq!(
            Format::from_path(Path::new("dir/Projects.JSON")).unwrap(),
            Format::Json
        );
        assert!(matches!(
            Format::from_path(Path::new("projects.yaml")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("projects")).is_err());
    }

    #[test]
    fn test_parse_toml_listing() {
        let content = r#"
[[projects]]
title = "Weather App"
description = "A simple weather dashboard"
url = "https://example.com/weather"
status = "launched 🚀"

[[projects]]
title = "Chess Engine"
description = ""
url = "https://example.com/chess"
status = "in progress 🔨"
"#;

        let projects = parse_projects(content, Format::Toml, &origin()).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects.as_slice()[0].title, "Weather App");
        assert_eq!(projects.as_slice()[0].status, Status::Launched);
        assert_eq!(projects.as_slice()[1].status, Status::InProgress);
    }

    #[test]
    fn test_parse_toml_without_projects_is_empty() {
        let projects = parse_projects("", Format::Toml, &origin()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_parse_toml_rejects_unknown_status() {
        let content = r#"
[[projects]]
title = "Weather App"
description = "A simple weather dashboard"
url = "https://example.com/weather"
status = "archived"
"#;

        let err = parse_projects(content, Format::Toml, &origin()).unwrap_err();
        assert!(matches!(err, Error::Toml { .. }));
    }

    #[test]
    fn test_parse_toml_rejects_status_without_symbol() {
        let content = r#"
[[projects]]
title = "Weather App"
description = "A simple weather dashboard"
url = "https://example.com/weather"
status = "launched"
"#;

        assert!(parse_projects(content, Format::Toml, &origin()).is_err());
    }

    #[test]
    fn test_parse_json_bare_array() {
        let content = r#"[
  {
    "title": "Weather App",
    "description": "A simple weather dashboard",
    "url": "https://example.com/weather",
    "status": "discontinued 🔐"
  }
]"#;

        let projects = parse_projects(content, Format::Json, &origin()).unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects.as_slice()[0].status, Status::Discontinued);
    }

    #[test]
    fn test_parse_json_document() {
        let content = r#"{
  "projects": [
    {
      "title": "Weather App",
      "description": "A simple weather dashboard",
      "url": "https://example.com/weather",
      "status": "launched 🚀"
    }
  ]
}"#;

        let projects = parse_projects(content, Format::Json, &origin()).unwrap();
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_parse_json_rejects_unknown_status() {
        let content = r#"[
  {
    "title": "Weather App",
    "description": "A simple weather dashboard",
    "url": "https://example.com/weather",
    "status": "archived"
  }
]"#;

        let err = parse_projects(content, Format::Json, &origin()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        match load_projects(&path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
