//! Data sources backing the store
//!
//! A `DataSource` answers one request per call. The store never retries and
//! never joins calls; each result stands alone.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::error::{Result, StoreError};
use super::models::{Collaborator, Issue, NewProject, NewUser, Project, User};

/// Backend for the dashboard actions
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_user(&self) -> Result<User>;
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn fetch_all_users(&self) -> Result<Vec<Collaborator>>;
    async fn fetch_issues(&self) -> Result<Vec<Issue>>;
    async fn create_project(&self, project: NewProject) -> Result<Project>;
    async fn create_user(&self, user: NewUser) -> Result<Collaborator>;
    async fn logout(&self) -> Result<()>;
}

/// Offline snapshot file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSnapshot {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub all_users: Option<Vec<Collaborator>>,
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
}

/// Serves a JSON snapshot instead of a live server.
///
/// Absent sections behave like failed requests. Created records are kept in
/// memory for the lifetime of the source.
#[derive(Debug, Default)]
pub struct FixtureSource {
    snapshot: Mutex<FixtureSnapshot>,
}

impl FixtureSource {
    pub fn new(snapshot: FixtureSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: FixtureSnapshot = serde_json::from_str(&content)?;
        info!(path = %path.display(), "Loaded dashboard fixtures");
        Ok(Self::new(snapshot))
    }

    fn generate_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch_user(&self) -> Result<User> {
        self.snapshot.lock().user.clone().ok_or(StoreError::Missing("user"))
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.snapshot.lock().projects.clone().ok_or(StoreError::Missing("projects"))
    }

    async fn fetch_all_users(&self) -> Result<Vec<Collaborator>> {
        self.snapshot.lock().all_users.clone().ok_or(StoreError::Missing("allUsers"))
    }

    async fn fetch_issues(&self) -> Result<Vec<Issue>> {
        self.snapshot.lock().issues.clone().ok_or(StoreError::Missing("issues"))
    }

    async fn create_project(&self, project: NewProject) -> Result<Project> {
        let created = Project {
            id: Self::generate_id(),
            title: project.title,
            created: Some(Utc::now()),
        };
        self.snapshot
            .lock()
            .projects
            .get_or_insert_with(Vec::new)
            .push(created.clone());
        Ok(created)
    }

    async fn create_user(&self, user: NewUser) -> Result<Collaborator> {
        let created = Collaborator {
            id: Self::generate_id(),
            first_name: user.first_name,
            last_name: user.last_name,
        };
        self.snapshot
            .lock()
            .all_users
            .get_or_insert_with(Vec::new)
            .push(created.clone());
        Ok(created)
    }

    async fn logout(&self) -> Result<()> {
        Ok(())
    }
}
