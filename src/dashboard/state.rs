//! Dashboard view state management

use crate::dashboard::routes::Route;
use crate::store::{NewProject, NewUser};

/// UI state owned by the dashboard view. Never holds store data.
#[derive(Debug)]
pub struct DashboardState {
    /// Side menu selection
    pub current_route: Route,
    /// Link clicked this frame, handled after drawing
    pub pending_navigation: Option<Route>,
    /// Last link followed, shown in the side menu footer
    pub last_navigation: Option<Route>,
    /// "New project" modal
    pub project_modal: ProjectModalState,
    /// "Create user" modal
    pub user_modal: UserModalState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            current_route: Route::Dashboard,
            pending_navigation: None,
            last_navigation: None,
            project_modal: ProjectModalState::default(),
            user_modal: UserModalState::default(),
        }
    }
}

impl DashboardState {
    /// Queue a navigation for the end of the frame
    pub fn navigate(&mut self, route: Route) {
        self.pending_navigation = Some(route);
    }

    /// Take the queued navigation and remember it as the last one
    pub fn take_navigation(&mut self) -> Option<Route> {
        let route = self.pending_navigation.take()?;
        self.last_navigation = Some(route.clone());
        Some(route)
    }
}

/// Form behind the projects empty-state prompt
#[derive(Debug, Default)]
pub struct ProjectModalState {
    pub open: bool,
    pub title: String,
}

impl ProjectModalState {
    pub fn open(&mut self) {
        self.open = true;
        self.title.clear();
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Build the request and close the form. `None` while the form is incomplete.
    pub fn submit(&mut self) -> Option<NewProject> {
        if !self.can_submit() {
            return None;
        }
        let project = NewProject {
            title: self.title.trim().to_string(),
        };
        self.cancel();
        Some(project)
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.title.clear();
    }
}

/// Form behind the collaborators empty-state prompt
#[derive(Debug, Default)]
pub struct UserModalState {
    pub open: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl UserModalState {
    pub fn open(&mut self) {
        self.cancel();
        self.open = true;
    }

    pub fn can_submit(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Build the request and close the form. `None` while the form is incomplete.
    pub fn submit(&mut self) -> Option<NewUser> {
        if !self.can_submit() {
            return None;
        }
        let user = NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: std::mem::take(&mut self.password),
            is_admin: self.is_admin,
        };
        self.cancel();
        Some(user)
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}
