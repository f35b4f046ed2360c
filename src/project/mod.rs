//! Side-project records and collections.
//!
//! ## Main Parts
//!
//! - [`SideProject`] - A single configuration record
//! - [`Status`] - The closed, three-valued lifecycle status
//! - [`Projects`] - A listing of records with filtering, sorting and reporting

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;
pub mod status;

pub use project::SideProject;
pub use projects::{ProjectIssues, Projects, StatusCounts};
pub use status::Status;
