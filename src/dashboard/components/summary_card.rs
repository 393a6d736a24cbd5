//! Summary card: a titled panel with one scrollable list

use egui::{RichText, Rounding, Stroke};

use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{faded, ThemeColors};
use crate::dashboard::views::lists::{CreationPrompt, ListBody, ListItem};

/// Card content for one data category
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub id: &'static str,
    pub title: String,
    pub meta: &'static str,
    pub description: &'static str,
    pub body: ListBody,
    /// Play the entrance even when the card is first drawn already visible
    pub animate_on_mount: bool,
}

/// Card dimensions
#[derive(Debug, Clone, Copy)]
pub struct CardLayout {
    pub height: f32,
    pub list_height: f32,
    /// Scale transition length in seconds
    pub transition_secs: f32,
}

impl SummaryCard {
    pub fn new(
        id: &'static str,
        title: impl Into<String>,
        meta: &'static str,
        description: &'static str,
        body: ListBody,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            meta,
            description,
            body,
            animate_on_mount: false,
        }
    }

    pub fn animate_on_mount(mut self) -> Self {
        self.animate_on_mount = true;
        self
    }

    /// Draw the card inside a transition driven by `visible`
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        visible: bool,
        layout: &CardLayout,
        state: &mut DashboardState,
    ) {
        let transition_id = egui::Id::new(("card_transition", self.id));
        if self.animate_on_mount {
            let mounted_id = transition_id.with("mounted");
            let first_frame = ui.ctx().data_mut(|data| {
                let first = data.get_temp::<bool>(mounted_id).is_none();
                data.insert_temp(mounted_id, true);
                first
            });
            if first_frame {
                // Start from hidden so the next call animates in
                ui.ctx().animate_bool_with_time(transition_id, false, layout.transition_secs);
            }
        }
        let progress = ui
            .ctx()
            .animate_bool_with_time(transition_id, visible, layout.transition_secs);

        if progress <= 0.0 {
            // Hold the grid cell while hidden
            ui.allocate_space(egui::vec2(ui.available_width(), layout.height));
            return;
        }

        // Scale in from the center of the cell
        let inset = (1.0 - progress) * 0.5;
        let margin_x = ui.available_width() * inset * 0.5;
        let margin_y = layout.height * inset * 0.5;

        ui.add_space(margin_y);
        egui::Frame::none()
            .outer_margin(egui::Margin::symmetric(margin_x, 0.0))
            .fill(faded(ThemeColors::BG_CARD, progress))
            .stroke(Stroke::new(1.0, faded(ThemeColors::BORDER, progress)))
            .rounding(Rounding::same(6.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_height(layout.height * (1.0 - inset) - 32.0);

                ui.label(
                    RichText::new(&self.title)
                        .size(22.0 * (1.0 - inset))
                        .color(faded(ThemeColors::TEXT_PRIMARY, progress))
                        .strong(),
                );
                ui.label(RichText::new(self.meta).size(12.0).color(faded(ThemeColors::TEXT_MUTED, progress)));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(self.description).color(faded(ThemeColors::TEXT_SECONDARY, progress)),
                );
                ui.add_space(8.0);

                egui::ScrollArea::vertical()
                    .id_salt(("card_list", self.id))
                    .max_height(layout.list_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        render_list_body(ui, &self.body, progress, state);
                    });
            });
        ui.add_space(margin_y);
    }
}

fn render_list_body(ui: &mut egui::Ui, body: &ListBody, progress: f32, state: &mut DashboardState) {
    match body {
        ListBody::Items(items) => {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    ui.separator();
                }
                render_list_item(ui, item, progress, state);
            }
        }
        ListBody::Prompt(gated) => {
            if !gated.is_visible() {
                return;
            }
            let label = match gated.element {
                CreationPrompt::Project => "+ New Project",
                CreationPrompt::User => "+ Create User",
            };
            if ui
                .add(
                    egui::Button::new(RichText::new(label).color(egui::Color32::WHITE))
                        .fill(faded(ThemeColors::ACCENT_PRIMARY, progress)),
                )
                .clicked()
            {
                match gated.element {
                    CreationPrompt::Project => state.project_modal.open(),
                    CreationPrompt::User => state.user_modal.open(),
                }
            }
        }
        ListBody::Message(message) => {
            ui.label(
                RichText::new(*message)
                    .size(16.0)
                    .color(faded(ThemeColors::TEXT_PRIMARY, progress))
                    .strong(),
            );
        }
        ListBody::Empty => {}
    }
}

fn render_list_item(ui: &mut egui::Ui, item: &ListItem, progress: f32, state: &mut DashboardState) {
    ui.push_id(&item.key, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("✔")
                    .size(18.0)
                    .color(faded(ThemeColors::ACCENT_SUCCESS, progress)),
            );
            ui.vertical(|ui| {
                let link = ui.link(
                    RichText::new(&item.header)
                        .strong()
                        .color(faded(ThemeColors::ACCENT_PRIMARY, progress)),
                );
                if link.clicked() {
                    state.navigate(item.route.clone());
                }
                if !item.description.is_empty() {
                    ui.label(
                        RichText::new(&item.description)
                            .size(12.0)
                            .color(faded(ThemeColors::TEXT_SECONDARY, progress)),
                    );
                }
            });
        });
    });
}
