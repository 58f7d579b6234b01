mod broadcaster;
mod config;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use engine::config::{load_yaml_config, save_yaml_config};
use engine::game::GameSettings;
use engine::logger::init_logger;

use config::ClientConfig;
use runner::run_arcade;
use state::SharedState;
use ui::ArcadeApp;

#[derive(Parser, Debug)]
#[command(name = "snake_arcade", about = "Grid snake arcade with power-ups")]
struct Args {
    /// Path to the client yaml config
    #[arg(long, default_value = "snake-arcade.yaml")]
    config: String,

    /// Fixed RNG seed for reproducible sessions (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config: ClientConfig = load_yaml_config(&args.config)?;
    if !std::path::Path::new(&args.config).exists() {
        save_yaml_config(&args.config, &config)?;
    }
    init_logger(config.log_prefix.clone());

    let seed = args.seed.or(config.seed);
    let settings = GameSettings::default();

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let canvas_px = settings.grid_extent as f32 * settings.cell_size_px;
    let settings_clone = settings.clone();
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Tokio runtime should start");
        rt.block_on(run_arcade(
            shared_state_clone,
            command_rx,
            settings_clone,
            seed,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_px + 40.0, canvas_px + 140.0])
            .with_resizable(false)
            .with_title("Snake Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(|_cc| Ok(Box::new(ArcadeApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
