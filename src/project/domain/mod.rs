//! Domain model for project tracking.

mod color;
mod error;
mod ids;
mod project;

pub use color::ProjectColor;
pub use error::{ParseProjectColorError, ParseProjectStatusError, ProjectDomainError};
pub use ids::{ProjectId, ProjectName};
pub use project::{NewProjectParams, Project, ProjectStatus};
