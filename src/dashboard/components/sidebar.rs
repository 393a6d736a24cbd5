//! Side menu component

use egui::{Color32, RichText, Rounding, Sense, Vec2};

use crate::dashboard::routes::Route;
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::store::{DashboardAction, Store};

/// Menu entries, in display order
const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Projects, "Projects"),
    (Route::Users, "Users"),
    (Route::Issues, "Issues"),
];

/// Render the side menu
pub fn render_sidebar(ui: &mut egui::Ui, state: &mut DashboardState, store: &dyn Store) {
    ui.vertical(|ui| {
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("Tracker")
                    .size(22.0)
                    .color(ThemeColors::TEXT_ON_MENU)
                    .strong(),
            );
        });

        ui.add_space(24.0);

        for (route, label) in NAV_ITEMS {
            let is_selected = state.current_route == route;
            if nav_button(ui, label, is_selected) {
                state.current_route = route.clone();
                state.navigate(route);
            }
            ui.add_space(4.0);
        }

        ui.add_space(16.0);
        if nav_button(ui, "Log out", false) {
            store.dispatch(DashboardAction::Logout);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(12.0);
            if let Some(route) = &state.last_navigation {
                ui.horizontal(|ui| {
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(format!("/{}", route.path()))
                            .size(11.0)
                            .color(ThemeColors::TEXT_MUTED),
                    );
                });
            }
            if store.is_syncing() {
                ui.horizontal(|ui| {
                    ui.add_space(12.0);
                    ui.label(RichText::new("Syncing...").size(11.0).color(ThemeColors::TEXT_MUTED));
                });
            }
        });
    });
}

/// Render a menu entry
fn nav_button(ui: &mut egui::Ui, label: &str, is_selected: bool) -> bool {
    let desired_size = Vec2::new(ui.available_width() - 16.0, 36.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if is_selected {
            color_with_alpha(ThemeColors::ACCENT_PRIMARY, 90)
        } else if response.hovered() {
            ThemeColors::BG_MENU_HOVER
        } else {
            Color32::TRANSPARENT
        };

        ui.painter().rect_filled(
            rect.shrink2(Vec2::new(8.0, 0.0)),
            Rounding::same(4.0),
            bg_color,
        );

        ui.painter().text(
            rect.left_center() + Vec2::new(24.0, 0.0),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(14.0),
            ThemeColors::TEXT_ON_MENU,
        );
    }

    response.clicked()
}
