//! Creation modals opened from the empty-state prompts

use egui::RichText;
use tracing::info;

use crate::dashboard::state::{ProjectModalState, UserModalState};
use crate::dashboard::theme::ThemeColors;
use crate::store::{DashboardAction, Store};

/// Render the "New Project" dialog if it is open
pub fn render_project_modal(ctx: &egui::Context, modal: &mut ProjectModalState, store: &dyn Store) {
    if !modal.open {
        return;
    }

    egui::Window::new("New Project")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Project title");
            ui.add(
                egui::TextEdit::singleline(&mut modal.title)
                    .hint_text("e.g. Website redesign")
                    .desired_width(280.0),
            );

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    modal.cancel();
                }

                ui.add_space(8.0);

                ui.add_enabled_ui(modal.can_submit(), |ui| {
                    if create_button(ui).clicked() {
                        if let Some(project) = modal.submit() {
                            info!(title = %project.title, "Creating project");
                            store.dispatch(DashboardAction::CreateProject(project));
                        }
                    }
                });
            });
        });
}

/// Render the "Create User" dialog if it is open
pub fn render_user_modal(ctx: &egui::Context, modal: &mut UserModalState, store: &dyn Store) {
    if !modal.open {
        return;
    }

    egui::Window::new("Create User")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Grid::new("create_user_form")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("First name").color(ThemeColors::TEXT_SECONDARY));
                    ui.text_edit_singleline(&mut modal.first_name);
                    ui.end_row();

                    ui.label(RichText::new("Last name").color(ThemeColors::TEXT_SECONDARY));
                    ui.text_edit_singleline(&mut modal.last_name);
                    ui.end_row();

                    ui.label(RichText::new("Email").color(ThemeColors::TEXT_SECONDARY));
                    ui.text_edit_singleline(&mut modal.email);
                    ui.end_row();

                    ui.label(RichText::new("Password").color(ThemeColors::TEXT_SECONDARY));
                    ui.add(egui::TextEdit::singleline(&mut modal.password).password(true));
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.checkbox(&mut modal.is_admin, "Administrator");

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    modal.cancel();
                }

                ui.add_space(8.0);

                ui.add_enabled_ui(modal.can_submit(), |ui| {
                    if create_button(ui).clicked() {
                        if let Some(user) = modal.submit() {
                            info!(email = %user.email, "Creating user");
                            store.dispatch(DashboardAction::CreateUser(user));
                        }
                    }
                });
            });
        });
}

fn create_button(ui: &mut egui::Ui) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new("Create").color(egui::Color32::WHITE))
            .fill(ThemeColors::ACCENT_PRIMARY),
    )
}
