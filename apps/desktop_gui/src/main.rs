use std::path::PathBuf;

mod controller;
mod media;
mod ui;

use clap::Parser;
use demo_core::{load_settings, NameFaker, Settings};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::DemoApp;

const APP_TITLE: &str = "User Directory Demo";

#[derive(Parser, Debug)]
#[command(about = "Scrollable list of generated users with a details screen")]
struct Args {
    /// Settings file; defaults to ./demo_app.toml or the per-user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed seed for the name generator.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of users shown in the list.
    #[arg(long)]
    count: Option<usize>,
    /// Directory containing image assets.
    #[arg(long)]
    assets: Option<PathBuf>,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(count) = self.count {
            settings.user_count = count;
        }
        if let Some(assets) = &self.assets {
            settings.asset_dir = Some(assets.clone());
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let (mut settings, settings_error) = match load_settings(args.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    args.apply_to(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(err) = settings_error {
        tracing::warn!("using default settings: {err}");
    }
    tracing::info!(
        user_count = settings.user_count,
        seeded = settings.seed.is_some(),
        "starting user directory"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| {
            let generator = NameFaker::from_seed_option(settings.seed);
            Ok(Box::new(DemoApp::new(&settings, Box::new(generator))))
        }),
    )
}
