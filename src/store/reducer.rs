//! Dashboard slice and the events that change it

use super::models::{Collaborator, Issue, Project, User};

/// The `dashboard` slice of application state.
///
/// Every field stays `None` until its fetch completes. A failed fetch leaves
/// the field untouched, so the view cannot tell failed from not-yet-loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSlice {
    pub user: Option<User>,
    pub projects: Option<Vec<Project>>,
    pub all_users: Option<Vec<Collaborator>>,
    pub issues: Option<Vec<Issue>>,
}

/// Result of a completed action, delivered back to the store
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    UserLoaded(User),
    ProjectsLoaded(Vec<Project>),
    AllUsersLoaded(Vec<Collaborator>),
    IssuesLoaded(Vec<Issue>),
    ProjectCreated(Project),
    UserCreated(Collaborator),
    LoggedOut,
}

/// Fold one event into the slice
pub fn reduce(slice: &mut DashboardSlice, event: DashboardEvent) {
    match event {
        DashboardEvent::UserLoaded(user) => slice.user = Some(user),
        DashboardEvent::ProjectsLoaded(projects) => slice.projects = Some(projects),
        DashboardEvent::AllUsersLoaded(users) => slice.all_users = Some(users),
        DashboardEvent::IssuesLoaded(issues) => slice.issues = Some(issues),
        DashboardEvent::ProjectCreated(project) => {
            slice.projects.get_or_insert_with(Vec::new).push(project);
        }
        DashboardEvent::UserCreated(user) => {
            slice.all_users.get_or_insert_with(Vec::new).push(user);
        }
        DashboardEvent::LoggedOut => *slice = DashboardSlice::default(),
    }
}
