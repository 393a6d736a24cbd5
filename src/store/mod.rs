//! Application Store
//!
//! Holds the `dashboard` slice and runs actions against a data source.
//! Views read snapshots through [`Store::dashboard_state`] and send requests
//! through [`Store::dispatch`]; they never see how requests are served.

pub mod error;
pub mod http;
pub mod models;
pub mod reducer;
pub mod source;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, warn};

pub use models::{Collaborator, Issue, NewProject, NewUser, Project, User};
pub use reducer::{reduce, DashboardEvent, DashboardSlice};
pub use source::DataSource;

/// A named request sent to the store
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    FetchUser,
    FetchProjects,
    FetchAllUsers,
    FetchIssues,
    CreateProject(NewProject),
    CreateUser(NewUser),
    Logout,
}

impl DashboardAction {
    /// Action creator name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::FetchUser => "fetchUser",
            DashboardAction::FetchProjects => "fetchProjects",
            DashboardAction::FetchAllUsers => "fetchAllUsers",
            DashboardAction::FetchIssues => "fetchIssues",
            DashboardAction::CreateProject(_) => "createProject",
            DashboardAction::CreateUser(_) => "createUser",
            DashboardAction::Logout => "logout",
        }
    }
}

/// Store access handed to views
pub trait Store {
    /// Current snapshot of the dashboard slice
    fn dashboard_state(&self) -> DashboardSlice;
    /// Fire-and-forget: returns before the action completes
    fn dispatch(&self, action: DashboardAction);
    /// Whether any dispatched action is still running
    fn is_syncing(&self) -> bool {
        false
    }
}

type RepaintFn = Arc<dyn Fn() + Send + Sync>;

/// Store backed by a background runtime and a [`DataSource`]
pub struct SharedStore {
    slice: RwLock<DashboardSlice>,
    events_tx: Sender<DashboardEvent>,
    events_rx: Receiver<DashboardEvent>,
    source: Arc<dyn DataSource>,
    runtime: Runtime,
    in_flight: Arc<AtomicUsize>,
    repaint: RwLock<Option<RepaintFn>>,
}

impl SharedStore {
    /// Create a store serving actions from `source`
    pub fn new(source: Arc<dyn DataSource>) -> error::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("store-worker")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = unbounded();

        Ok(Self {
            slice: RwLock::new(DashboardSlice::default()),
            events_tx,
            events_rx,
            source,
            runtime,
            in_flight: Arc::new(AtomicUsize::new(0)),
            repaint: RwLock::new(None),
        })
    }

    /// Register a callback run after each action completes
    pub fn set_repaint_notifier(&self, notify: impl Fn() + Send + Sync + 'static) {
        *self.repaint.write() = Some(Arc::new(notify));
    }

    /// Number of dispatched actions that have not finished yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Fold every pending event into the slice
    fn drain_events(&self) {
        if self.events_rx.is_empty() {
            return;
        }
        let mut slice = self.slice.write();
        for event in self.events_rx.try_iter() {
            debug!(event = ?event, "Applying event");
            reduce(&mut slice, event);
        }
    }
}

impl Store for SharedStore {
    fn dashboard_state(&self) -> DashboardSlice {
        self.drain_events();
        self.slice.read().clone()
    }

    fn is_syncing(&self) -> bool {
        self.in_flight() > 0
    }

    fn dispatch(&self, action: DashboardAction) {
        debug!(action = action.name(), "Dispatching");

        let source = self.source.clone();
        let events_tx = self.events_tx.clone();
        let in_flight = self.in_flight.clone();
        let repaint = self.repaint.read().clone();

        in_flight.fetch_add(1, Ordering::SeqCst);
        self.runtime.spawn(async move {
            let name = action.name();
            match perform(source.as_ref(), action).await {
                Ok(event) => {
                    debug!(action = name, "Action completed");
                    // Receiver lives as long as the store; a failed send means shutdown.
                    let _ = events_tx.send(event);
                }
                Err(e) => warn!(action = name, error = %e, "Action failed"),
            }
            if let Some(repaint) = repaint {
                repaint();
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }
}

/// Run one action against the source
async fn perform(source: &dyn DataSource, action: DashboardAction) -> error::Result<DashboardEvent> {
    let event = match action {
        DashboardAction::FetchUser => DashboardEvent::UserLoaded(source.fetch_user().await?),
        DashboardAction::FetchProjects => {
            DashboardEvent::ProjectsLoaded(source.fetch_projects().await?)
        }
        DashboardAction::FetchAllUsers => {
            DashboardEvent::AllUsersLoaded(source.fetch_all_users().await?)
        }
        DashboardAction::FetchIssues => DashboardEvent::IssuesLoaded(source.fetch_issues().await?),
        DashboardAction::CreateProject(project) => {
            DashboardEvent::ProjectCreated(source.create_project(project).await?)
        }
        DashboardAction::CreateUser(user) => {
            DashboardEvent::UserCreated(source.create_user(user).await?)
        }
        DashboardAction::Logout => {
            source.logout().await?;
            DashboardEvent::LoggedOut
        }
    };
    Ok(event)
}
