//! Flat dark theme for the plot window

use egui::Color32;

pub mod colors {
    use super::Color32;

    pub const BG_PRIMARY: Color32 = Color32::from_rgb(16, 16, 18);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 230);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 110);
    pub const BORDER: Color32 = Color32::from_rgb(44, 44, 48);

    /// Scatter markers
    pub const POINTS: Color32 = Color32::from_rgb(92, 156, 255);
    /// Hull polygon stroke
    pub const HULL: Color32 = Color32::from_rgb(235, 87, 87);
}

/// Dark flat visuals: no shadows, muted chrome, high-contrast data colors.
pub fn plot_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
