use crossbeam_channel::{bounded, Receiver, Sender};
use demo_core::{
    DetailsScreen, EntryId, LazyListWindow, ListScreen, Navigator, Settings, UserGenerator,
};
use eframe::egui;
use shared::routes::Route;

use crate::controller::{
    events::{BackSource, UiEvent},
    orchestration::dispatch_ui_event,
    reducer::{reduce, Transition},
};
use crate::media::TextureCache;
use crate::ui::{details::show_details_screen, list::show_list_screen, theme};

const UI_EVENT_QUEUE_CAPACITY: usize = 64;

pub struct DemoApp {
    event_tx: Sender<UiEvent>,
    event_rx: Receiver<UiEvent>,

    navigator: Navigator,
    list: ListScreen,
    details: Option<(EntryId, DetailsScreen)>,
    window: LazyListWindow,

    textures: TextureCache,

    status: String,
    visuals_applied: bool,
}

impl DemoApp {
    pub fn new(settings: &Settings, generator: Box<dyn UserGenerator>) -> Self {
        let (event_tx, event_rx) = bounded(UI_EVENT_QUEUE_CAPACITY);
        Self {
            event_tx,
            event_rx,
            navigator: Navigator::new(),
            list: ListScreen::new(generator, settings.user_count),
            details: None,
            window: settings.list_window(),
            textures: TextureCache::new(settings.asset_dir.clone()),
            status: String::new(),
            visuals_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            let transition = reduce(&mut self.navigator, event);
            tracing::debug!(
                ?transition,
                route = %self.navigator.current_route(),
                depth = self.navigator.depth(),
                "ui event applied"
            );
            if transition != Transition::IgnoredAtRoot {
                self.status.clear();
            }
        }
    }

    /// Keyboard and mouse back affordances behave like the in-screen back button.
    fn poll_host_back(&mut self, ctx: &egui::Context) {
        let (keyboard, pointer) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape)
                    || (i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)),
                i.pointer.button_pressed(egui::PointerButton::Extra1),
            )
        });
        let source = if keyboard {
            BackSource::Keyboard
        } else if pointer {
            BackSource::PointerButton
        } else {
            return;
        };
        dispatch_ui_event(
            &self.event_tx,
            UiEvent::BackRequested { source },
            &mut self.status,
        );
    }

    /// Rebuilds the details model only when a different stack entry is on top.
    fn sync_details(&mut self, entry_id: EntryId, user_name: Option<&str>) {
        let current = matches!(&self.details, Some((id, _)) if *id == entry_id);
        if !current {
            self.details = Some((entry_id, DetailsScreen::from_route_param(user_name)));
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).weak());
        });
    }

    fn show(&mut self, ctx: &egui::Context) {
        if !self.visuals_applied {
            ctx.set_visuals(theme::light_visuals());
            self.visuals_applied = true;
        }

        self.process_ui_events();
        self.poll_host_back(ctx);
        self.show_status_bar(ctx);

        let entry = self.navigator.current().clone();
        match entry.route {
            Route::List => {
                self.details = None;
                show_list_screen(
                    ctx,
                    &mut self.list,
                    self.window,
                    &mut self.textures,
                    &self.event_tx,
                    &mut self.status,
                );
            }
            Route::Details { user_name } => {
                self.sync_details(entry.id, user_name.as_deref());
                if let Some((_, screen)) = &self.details {
                    show_details_screen(
                        ctx,
                        screen,
                        &mut self.textures,
                        &self.event_tx,
                        &mut self.status,
                    );
                }
            }
        }

        if !self.event_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
