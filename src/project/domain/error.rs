//! Error types for project domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name cannot be empty")]
    EmptyProjectName,

    /// The end date precedes the start date.
    #[error("project end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}

/// Error returned while parsing project statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing project colours.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project colour: {0}")]
pub struct ParseProjectColorError(pub String);
