use crossbeam_channel::Sender;
use demo_core::{
    details_screen::{CONTENT_PADDING, DESCRIPTION_FONT_SIZE, ILLUSTRATION_HEIGHT},
    DetailsScreen,
};
use eframe::egui;
use egui::load::SizedTexture;

use crate::controller::{
    events::{BackSource, UiEvent},
    orchestration::dispatch_ui_event,
};
use crate::media::TextureCache;
use crate::ui::theme;

pub fn show_details_screen(
    ctx: &egui::Context,
    screen: &DetailsScreen,
    textures: &mut TextureCache,
    event_tx: &Sender<UiEvent>,
    status: &mut String,
) {
    theme::top_bar(ctx, "details_top_bar", screen.title(), |ui| {
        let back = ui
            .add(
                egui::Button::new(
                    egui::RichText::new("⬅")
                        .size(theme::TITLE_FONT_SIZE)
                        .color(theme::ON_PRIMARY),
                )
                .frame(false),
            )
            .on_hover_text("Back");
        if back.clicked() {
            dispatch_ui_event(
                event_tx,
                UiEvent::BackRequested {
                    source: BackSource::TopBarButton,
                },
                status,
            );
        }
        ui.add_space(16.0);
    });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::SURFACE)
                .inner_margin(egui::Margin::same(CONTENT_PADDING as i8)),
        )
        .show(ctx, |ui| {
            let illustration = textures.get_or_load(ui.ctx(), screen.image());
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Image::from_texture(SizedTexture::from_handle(&illustration))
                        .fit_to_exact_size(egui::vec2(ui.available_width(), ILLUSTRATION_HEIGHT))
                        .maintain_aspect_ratio(true),
                );
            });
            ui.add_space(16.0);
            ui.label(egui::RichText::new(screen.description()).size(DESCRIPTION_FONT_SIZE));
        });
}
