//! Colors and shared chrome for both screens.

use eframe::egui;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x66, 0x50, 0xa4);
pub const ON_PRIMARY: egui::Color32 = egui::Color32::WHITE;
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(0xff, 0xfb, 0xfe);
pub const ON_SURFACE: egui::Color32 = egui::Color32::BLACK;
pub const ROW_HOVER: egui::Color32 = egui::Color32::from_rgb(0xee, 0xe8, 0xf4);

pub const TOP_BAR_HEIGHT: f32 = 56.0;
pub const TITLE_FONT_SIZE: f32 = 22.0;

pub fn light_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = SURFACE;
    visuals.window_fill = SURFACE;
    visuals.override_text_color = Some(ON_SURFACE);
    visuals
}

/// Primary-colored title bar; `leading` draws widgets left of the title.
pub fn top_bar(
    ctx: &egui::Context,
    id: &'static str,
    title: &str,
    leading: impl FnOnce(&mut egui::Ui),
) {
    egui::TopBottomPanel::top(id)
        .exact_height(TOP_BAR_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(PRIMARY)
                .inner_margin(egui::Margin::symmetric(16, 0)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                leading(ui);
                ui.label(
                    egui::RichText::new(title)
                        .size(TITLE_FONT_SIZE)
                        .color(ON_PRIMARY),
                );
            });
        });
}
