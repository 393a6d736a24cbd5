//! Dashboard theme and styling
//!
//! Light card-based theme for the tracker dashboard.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Tracker color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_PAGE: Color32 = Color32::from_rgb(243, 244, 245);
    pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BG_MENU: Color32 = Color32::from_rgb(27, 28, 29);
    pub const BG_MENU_HOVER: Color32 = Color32::from_rgb(52, 53, 55);

    // Accent colors
    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(33, 133, 208);
    pub const ACCENT_SUCCESS: Color32 = Color32::from_rgb(33, 186, 69);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 33, 33);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 96);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 150);
    pub const TEXT_ON_MENU: Color32 = Color32::from_rgb(230, 230, 230);

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(212, 212, 213);
    pub const DIVIDER: Color32 = Color32::from_rgb(232, 232, 233);
}

/// Apply the tracker theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::light();

    visuals.window_fill = ThemeColors::BG_CARD;
    visuals.panel_fill = ThemeColors::BG_PAGE;
    visuals.faint_bg_color = ThemeColors::DIVIDER;
    visuals.extreme_bg_color = ThemeColors::BG_CARD;

    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, ThemeColors::DIVIDER);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = color_with_alpha(ThemeColors::ACCENT_PRIMARY, 64);
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::ACCENT_PRIMARY);
    visuals.hyperlink_color = ThemeColors::ACCENT_PRIMARY;

    visuals.window_rounding = Rounding::same(6.0);
    visuals.window_stroke = Stroke::new(1.0, ThemeColors::BORDER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(16.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Helper to create a color with modified alpha
pub fn color_with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Fade a color by an animation progress in `0.0..=1.0`
pub fn faded(color: Color32, progress: f32) -> Color32 {
    color.gamma_multiply(progress.clamp(0.0, 1.0))
}
