//! Project store: owns the project collection and mirrors it to storage.

use crate::config::TaskflowConfig;
use crate::project::domain::{
    NewProjectParams, Project, ProjectColor, ProjectDomainError, ProjectId, ProjectName,
    ProjectStatus,
};
use crate::storage::{
    CollectionSlot, Committed, PersistenceAdapter, PersistenceWarning, snapshot::SnapshotRecord,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
    color: ProjectColor,
    client: Option<String>,
    status: ProjectStatus,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    summary: Option<String>,
    notes: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required name. Colour defaults to blue and
    /// status to `planning`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: ProjectColor::default(),
            client: None,
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            summary: None,
            notes: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the palette colour.
    #[must_use]
    pub const fn with_color(mut self, color: ProjectColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the client.
    #[must_use]
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub const fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Service-level errors for project store operations.
#[derive(Debug, Error)]
pub enum ProjectStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
}

/// Result type for project store operations.
pub type ProjectStoreResult<T> = Result<T, ProjectStoreError>;

/// In-memory owner of the project collection.
pub struct ProjectStore<P, C>
where
    P: PersistenceAdapter,
    C: Clock + Send + Sync,
{
    projects: Vec<Project>,
    slot: CollectionSlot<P>,
    clock: Arc<C>,
    load_warning: Option<PersistenceWarning>,
}

impl<P, C> ProjectStore<P, C>
where
    P: PersistenceAdapter,
    C: Clock + Send + Sync,
{
    /// Opens the store, loading any previously saved projects.
    ///
    /// Unreadable stored data never fails the call: the store starts empty
    /// and the problem is available from [`Self::load_warning`].
    pub async fn open(adapter: Arc<P>, clock: Arc<C>, config: &TaskflowConfig) -> Self {
        let mut slot = CollectionSlot::new(adapter, config.projects_key().clone());
        let loaded = slot.load::<Project>().await;
        info!(key = %slot.key(), projects = loaded.records.len(), "project store opened");

        Self {
            projects: loaded.records,
            slot,
            clock,
            load_warning: loaded.warning,
        }
    }

    /// Returns the warning raised while loading, if stored data was unusable.
    #[must_use]
    pub const fn load_warning(&self) -> Option<&PersistenceWarning> {
        self.load_warning.as_ref()
    }

    /// Reads the stored projects again.
    ///
    /// After a failed read the store keeps working in memory, but every
    /// mutation reports [`PersistenceWarning::WriteSuspended`] instead of
    /// overwriting projects it never saw. Once the adapter can be read, the
    /// stored projects replace the in-memory ones, unsaved changes included,
    /// and writes resume. If the read fails again, the in-memory projects
    /// are kept.
    ///
    /// Returns the new load warning, if any.
    pub async fn reload(&mut self) -> Option<&PersistenceWarning> {
        let loaded = self.slot.load::<Project>().await;
        if !self.slot.writes_suspended() {
            self.projects = loaded.records;
        }
        info!(
            key = %self.slot.key(),
            projects = self.projects.len(),
            writes_suspended = self.slot.writes_suspended(),
            "project store reloaded"
        );
        self.load_warning = loaded.warning;
        self.load_warning.as_ref()
    }

    /// Creates a project and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Domain`] when the name is blank or the
    /// end date precedes the start date. Nothing is stored or written.
    pub async fn create(
        &mut self,
        request: CreateProjectRequest,
    ) -> ProjectStoreResult<Committed<Project>> {
        let CreateProjectRequest {
            name,
            description,
            color,
            client,
            status,
            start_date,
            end_date,
            summary,
            notes,
        } = request;

        let params = NewProjectParams {
            name: ProjectName::new(name)?,
            description,
            color,
            client,
            status,
            start_date,
            end_date,
            summary,
            notes,
        };
        let project = Project::new(params, &*self.clock)?;
        self.projects.push(project.clone());
        Ok(self.commit(project).await)
    }

    /// Lists every project in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Returns the project with `id`, if present.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Sets the status of the project with `id`.
    ///
    /// Returns `None`, writing nothing, when no such project exists.
    pub async fn update_status(
        &mut self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> Option<Committed<Project>> {
        let project = self.projects.iter_mut().find(|project| project.id() == id)?;
        project.set_status(status, &*self.clock);
        let updated = project.clone();
        Some(self.commit(updated).await)
    }

    /// Removes the project with `id`.
    ///
    /// Returns `None` when it was already absent.
    pub async fn delete(&mut self, id: ProjectId) -> Option<Committed<Project>> {
        let index = self.projects.iter().position(|project| project.id() == id)?;
        let removed = self.projects.remove(index);
        Some(self.commit(removed).await)
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when the store holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    async fn commit(&self, project: Project) -> Committed<Project> {
        let committed = self.slot.save(&self.projects, project).await;
        debug!(
            key = %self.slot.key(),
            projects = self.projects.len(),
            "project collection updated"
        );
        committed
    }
}

impl SnapshotRecord for Project {
    type Id = ProjectId;

    fn record_id(&self) -> ProjectId {
        self.id()
    }
}
