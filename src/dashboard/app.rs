//! Dashboard application entry point

use chrono::Local;
use eframe::egui;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::{AppConfig, DashboardSettings, NavigationSettings};
use crate::dashboard::components::{render_project_modal, render_sidebar, render_user_modal, CardLayout};
use crate::dashboard::reveal::RevealTimer;
use crate::dashboard::routes::Route;
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::{compose_home, render_home_view, HomeScreen};
use crate::store::{DashboardAction, SharedStore, Store};

/// Requests issued once when the view mounts
const MOUNT_ACTIONS: [DashboardAction; 4] = [
    DashboardAction::FetchUser,
    DashboardAction::FetchProjects,
    DashboardAction::FetchAllUsers,
    DashboardAction::FetchIssues,
];

/// The dashboard window
pub struct DashboardApp {
    /// Store access
    store: Arc<dyn Store>,
    /// View settings
    settings: DashboardSettings,
    /// Link handling
    navigation: NavigationSettings,
    /// View-local UI state
    state: DashboardState,
    /// Entrance animation timer
    reveal: RevealTimer,
    /// Whether the mount requests were sent
    mounted: bool,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(store: Arc<dyn Store>, config: &AppConfig) -> Self {
        Self {
            store,
            settings: config.dashboard.clone(),
            navigation: config.navigation.clone(),
            state: DashboardState::default(),
            reveal: RevealTimer::new(Duration::from_millis(config.dashboard.reveal_delay_ms)),
            mounted: false,
            theme_applied: false,
        }
    }

    /// Send the four fetches and schedule the reveal. Runs once.
    fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        info!("Dashboard mounted, requesting data");
        for action in MOUNT_ACTIONS {
            self.store.dispatch(action);
        }
        self.reveal.start(now);
    }

    /// Advance the reveal timer; returns how long until it next needs a frame
    fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.reveal.poll(now) {
            debug!("Revealing dashboard cards");
        }
        self.reveal.remaining(now)
    }

    fn card_layout(&self) -> CardLayout {
        CardLayout {
            height: self.settings.card_height,
            list_height: self.settings.list_height,
            transition_secs: self.settings.transition_ms as f32 / 1000.0,
        }
    }

    /// Hand a route to the router
    fn follow(&self, ctx: &egui::Context, route: &Route) {
        match &self.navigation.web_base_url {
            Some(base) => {
                let url = route.url(base);
                info!(url = %url, "Opening link");
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            None => info!(path = %route.path(), "Navigating"),
        }
    }

    /// Create eframe options for the dashboard window
    pub fn options(config: &AppConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.window.width, config.window.height])
                .with_min_inner_size([800.0, 500.0])
                .with_title("Tracker Dashboard"),
            ..Default::default()
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();
        self.mount(now);
        if let Some(remaining) = self.tick(now) {
            ctx.request_repaint_after(remaining);
        }

        let slice = self.store.dashboard_state();
        let screen = compose_home(&slice, self.settings.project_list, &Local);
        let layout = self.card_layout();

        if matches!(screen, HomeScreen::Loading) {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_home_view(ui, &screen, false, &layout, &mut self.state);
            });
            return;
        }

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(self.settings.sidebar_width)
            .frame(egui::Frame::none().fill(ThemeColors::BG_MENU))
            .show(ctx, |ui| {
                render_sidebar(ui, &mut self.state, self.store.as_ref());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(16.0).show(ui, |ui| {
                render_home_view(ui, &screen, self.reveal.is_visible(), &layout, &mut self.state);
            });
        });

        render_project_modal(ctx, &mut self.state.project_modal, self.store.as_ref());
        render_user_modal(ctx, &mut self.state.user_modal, self.store.as_ref());

        if let Some(route) = self.state.take_navigation() {
            self.follow(ctx, &route);
        }
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        self.reveal.cancel();
    }
}

/// Run the dashboard application
pub fn run_dashboard(store: Arc<SharedStore>, config: AppConfig) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Tracker Dashboard",
        DashboardApp::options(&config),
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            store.set_repaint_notifier(move || ctx.request_repaint());
            Ok(Box::new(DashboardApp::new(store, &config)))
        }),
    )
}
