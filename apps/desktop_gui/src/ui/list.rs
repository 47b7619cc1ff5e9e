//! User list screen: title bar plus a lazily materialized scrolling list.

use std::ops::Range;

use crossbeam_channel::Sender;
use demo_core::{
    list_screen::{AVATAR_SIZE, AVATAR_SPACING, NAME_FONT_SIZE, ROW_PADDING},
    LazyListWindow, ListScreen,
};
use eframe::egui;
use egui::{load::SizedTexture, TextureHandle};
use shared::domain::User;

use crate::controller::{events::UiEvent, orchestration::dispatch_ui_event};
use crate::media::TextureCache;
use crate::ui::{layout::ui_in_rect, theme};

/// Returns the row indices built this frame.
pub fn show_list_screen(
    ctx: &egui::Context,
    screen: &mut ListScreen,
    window: LazyListWindow,
    textures: &mut TextureCache,
    event_tx: &Sender<UiEvent>,
    status: &mut String,
) -> Range<usize> {
    theme::top_bar(ctx, "list_top_bar", screen.title(), |_| {});

    let mut rendered = 0..0;
    egui::CentralPanel::default().show(ctx, |ui| {
        let users = screen.users();
        let total = users.len();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                ui.set_height(window.content_height(total));
                let content = ui.max_rect();

                rendered = window.visible_range(viewport.min.y, viewport.height(), total);
                for index in rendered.clone() {
                    let user = &users[index];
                    let avatar = textures.get_or_load(ui.ctx(), user.image);
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(content.left(), content.top() + window.row_top(index)),
                        egui::vec2(content.width(), window.row_height()),
                    );
                    if user_row(ui, rect, index, user, &avatar).clicked() {
                        tracing::debug!(row = index, name = %user.name, "row clicked");
                        dispatch_ui_event(
                            event_tx,
                            UiEvent::RowClicked {
                                name: user.name.clone(),
                            },
                            status,
                        );
                    }
                }
            });
    });
    rendered
}

fn user_row(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    index: usize,
    user: &User,
    avatar: &TextureHandle,
) -> egui::Response {
    let background = ui.painter().add(egui::Shape::Noop);

    ui_in_rect(ui, rect.shrink(ROW_PADDING), |ui| {
        ui.add(
            egui::Image::from_texture(SizedTexture::from_handle(avatar))
                .fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE))
                .corner_radius(egui::CornerRadius::same((AVATAR_SIZE / 2.0) as u8)),
        );
        ui.add_space(AVATAR_SPACING);
        ui.add(
            egui::Label::new(
                egui::RichText::new(&user.name)
                    .size(NAME_FONT_SIZE)
                    .strong()
                    .color(theme::ON_SURFACE),
            )
            .selectable(false),
        );
    });

    // Registered after the row contents so it wins hit-testing.
    let response = ui.interact(rect, ui.id().with(("user_row", index)), egui::Sense::click());
    if response.hovered() {
        ui.painter().set(
            background,
            egui::Shape::rect_filled(rect, egui::CornerRadius::ZERO, theme::ROW_HOVER),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use demo_core::{LazyListWindow, ListScreen, NameFaker};
    use eframe::egui;

    use super::show_list_screen;
    use crate::media::TextureCache;

    const SCREEN_HEIGHT: f32 = 640.0;

    fn frame_input() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(400.0, SCREEN_HEIGHT),
            )),
            ..Default::default()
        }
    }

    #[test]
    fn only_rows_inside_the_viewport_are_built() {
        let ctx = egui::Context::default();
        let mut screen = ListScreen::new(Box::new(NameFaker::seeded(7)), 10_000);
        let window = LazyListWindow::new(64.0, 2);
        let mut textures = TextureCache::new(None);
        let (event_tx, _event_rx) = bounded(4);
        let mut status = String::new();

        let mut rendered = 0..0;
        let _ = ctx.run(frame_input(), |ctx| {
            rendered = show_list_screen(
                ctx,
                &mut screen,
                window,
                &mut textures,
                &event_tx,
                &mut status,
            );
        });

        assert_eq!(rendered.start, 0);
        assert!(!rendered.is_empty());
        assert!(rendered.len() <= window.max_materialized_rows(SCREEN_HEIGHT));
        assert!(!rendered.contains(&9_999));
        assert_eq!(textures.loaded(), 1);
        assert!(screen.is_populated());
    }
}
