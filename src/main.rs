//! tugas - a terminal task planner
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use tugas_app::{config, AppState, SnapshotStore, TaskStore, TodoForm};

/// tugas - a terminal task planner with a repeating-row todo form
#[derive(Parser, Debug)]
#[command(name = "tugas")]
#[command(about = "A terminal task planner", long_about = None)]
struct Args {
    /// Directory holding todos.json and tasks.json
    /// (overrides the config file and the platform default)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    tugas_core::logging::init()?;

    let config_path = config::config_path();
    if let Err(e) = config::init_config_file(&config_path) {
        tracing::warn!("Could not write default config: {e}");
    }
    let settings = config::load_settings();

    let data_dir = args.data_dir.unwrap_or_else(|| settings.data_dir());
    tracing::info!("Data directory: {}", data_dir.display());

    let todo = TodoForm::load(SnapshotStore::new(&data_dir));
    let tasks = TaskStore::load(&data_dir);
    let state = AppState::new(todo, tasks, settings);

    tugas_tui::run(state)?;
    Ok(())
}
