mod app;
mod components;
mod config;
mod engine;
mod error;
mod fsm;
mod renderer;
mod scene;
mod systems;

use std::path::PathBuf;

use anyhow::Context;
use app::DemoApp;
use clap::Parser;
use config::DemoConfig;
use engine::window::GameWindow;
use error::DemoError;

#[derive(Parser)]
#[command(name = "boy-drill", about = "Sprite state machine drill")]
struct Args {
    /// TOML file overriding the built-in settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the sprite sheet and background are loaded from
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Exit after this many frames
    #[arg(long)]
    frames: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let sdl = sdl2::init().map_err(DemoError::sdl)?;
    let mut window = GameWindow::open(&sdl, &config.window).context("failed to open canvas")?;

    let mut app = DemoApp::new(&mut window, &config, &args.assets, args.frames)
        .with_context(|| format!("failed to set up scene from {}", args.assets.display()))?;
    app.run(&sdl, &mut window)?;

    log::info!("Shutting down");
    Ok(())
}
