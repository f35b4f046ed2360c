//! Lifecycle status of a side project.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle stage of a side project.
///
/// On the wire (TOML, JSON) a status is always one of the three literal tags,
/// symbol included. On the command line and in the config file the short
/// kebab-case names (`in-progress`, `launched`, `discontinued`) are used instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    /// Still being built
    #[serde(rename = "in progress 🔨")]
    InProgress,

    /// Live and available
    #[serde(rename = "launched 🚀")]
    Launched,

    /// No longer maintained or reachable
    #[serde(rename = "discontinued 🔐")]
    Discontinued,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::InProgress, Self::Launched, Self::Discontinued];

    /// The literal tag, exactly as it appears in a listing file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in progress 🔨",
            Self::Launched => "launched 🚀",
            Self::Discontinued => "discontinued 🔐",
        }
    }

    /// The tag without its decorative symbol.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Launched => "launched",
            Self::Discontinued => "discontinued",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::InProgress => "🔨",
            Self::Launched => "🚀",
            Self::Discontinued => "🔐",
        }
    }

    /// Parse a short name (`in-progress`, `launched`, `discontinued`), ignoring case.
    ///
    /// This is the form used by the CLI and the config file, never by records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStatus`] if `name` is not one of the short names.
    pub fn from_short_name(name: &str) -> Result<Self, Error> {
        <Self as ValueEnum>::from_str(name.trim(), true)
            .map_err(|_| Error::UnknownStatus(name.to_string()))
    }
}

impl FromStr for Status {
    type Err = Error;

    /// Accepts exactly one of the three literal tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
