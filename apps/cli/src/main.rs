use std::{fmt::Write as _, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use demo_core::{load_settings, DetailsScreen, ListScreen, NameFaker, Navigator, Settings};
use serde::Serialize;
use shared::{domain::User, routes::Route};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "user-directory", about = "Headless front end for the user directory demo")]
struct Args {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated user list.
    List {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the details screen for NAME (empty name when omitted).
    Details { name: Option<String> },
    /// Open row ROW from the list, go back, and check the list was kept.
    Walk {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0)]
        row: usize,
    },
}

#[derive(Debug, Serialize)]
struct WalkReport {
    trace: Vec<String>,
    clicked: String,
    details: String,
    list_preserved: bool,
}

fn render_list(title: &str, users: &[User]) -> String {
    let mut out = format!("{title}\n");
    for (index, user) in users.iter().enumerate() {
        let _ = writeln!(out, "{:>3}  ◯ {}", index + 1, user.name);
    }
    out
}

fn render_details(screen: &DetailsScreen) -> String {
    format!("← {}\n{}\n", screen.title(), screen.description())
}

fn details_for_path(path: &str) -> Result<DetailsScreen> {
    let mut navigator = Navigator::new();
    let entry = navigator
        .navigate(path)
        .with_context(|| format!("failed to open '{path}'"))?;
    Ok(DetailsScreen::from_route_param(entry.route.user_name()))
}

fn walk(settings: &Settings, row: usize) -> Result<WalkReport> {
    let mut navigator = Navigator::new();
    let mut list = ListScreen::new(
        Box::new(NameFaker::from_seed_option(settings.seed)),
        settings.user_count,
    );
    let mut trace = vec![navigator.current_route().path()];

    let before = list.users().to_vec();
    let Some(clicked) = list.name_at(row).map(str::to_string) else {
        bail!("row {row} is out of range for {} users", before.len());
    };

    let entry = navigator.open_details(&clicked);
    trace.push(entry.route.path());
    let details = DetailsScreen::from_route_param(entry.route.user_name()).description();

    if !navigator.back() {
        bail!("navigator refused to pop the details route");
    }
    trace.push(navigator.current_route().path());

    Ok(WalkReport {
        trace,
        clicked,
        details,
        list_preserved: list.users() == before.as_slice(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::List { count, seed, json } => {
            if let Some(count) = count {
                settings.user_count = count;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            let mut list = ListScreen::new(
                Box::new(NameFaker::from_seed_option(settings.seed)),
                settings.user_count,
            );
            let title = list.title();
            let users = list.users();
            if json {
                println!("{}", serde_json::to_string_pretty(users)?);
            } else {
                print!("{}", render_list(title, users));
            }
        }
        Command::Details { name } => {
            let path = Route::Details { user_name: name }.path();
            print!("{}", render_details(&details_for_path(&path)?));
        }
        Command::Walk { seed, row } => {
            if seed.is_some() {
                settings.seed = seed;
            }
            let report = walk(&settings, row)?;
            tracing::info!(list_preserved = report.list_preserved, "walk finished");
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
