//! Project entity and lifecycle status.

use super::{ParseProjectStatusError, ProjectColor, ProjectDomainError, ProjectId, ProjectName};
use crate::text::non_blank;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Scoping, not started.
    #[default]
    Planning,
    /// Underway.
    InProgress,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl ProjectStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::InProgress,
        Self::OnHold,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in-progress",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseProjectStatusError(value.to_owned()))
    }
}

/// Validated values for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectParams {
    /// Project name.
    pub name: ProjectName,
    /// Optional description.
    pub description: Option<String>,
    /// Palette colour.
    pub color: ProjectColor,
    /// Optional client name.
    pub client: Option<String>,
    /// Initial status.
    pub status: ProjectStatus,
    /// Optional start date.
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Optional short summary.
    pub summary: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// Named container of project metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    color: ProjectColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client: Option<String>,
    status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates a project with a fresh identifier and creation timestamp.
    ///
    /// Blank optional text fields are stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when both dates are
    /// set and the end date precedes the start date.
    pub fn new(params: NewProjectParams, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let NewProjectParams {
            name,
            description,
            color,
            client,
            status,
            start_date,
            end_date,
            summary,
            notes,
        } = params;

        if let (Some(start), Some(end)) = (start_date, end_date)
            && end < start
        {
            return Err(ProjectDomainError::EndBeforeStart { start, end });
        }

        Ok(Self {
            id: ProjectId::new(),
            name,
            description: non_blank(description),
            color,
            client: non_blank(client),
            status,
            start_date,
            end_date,
            summary: non_blank(summary),
            notes: non_blank(notes),
            created_at: clock.utc(),
            updated_at: None,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the palette colour.
    #[must_use]
    pub const fn color(&self) -> ProjectColor {
        self.color
    }

    /// Returns the client, if any.
    #[must_use]
    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp, absent until the first update.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Moves the project to `status`. Every transition is allowed.
    pub fn set_status(&mut self, status: ProjectStatus, clock: &impl Clock) {
        self.status = status;
        self.updated_at = Some(clock.utc().max(self.created_at));
    }
}
