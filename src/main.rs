//! Duo Pong entry point
//!
//! Headless host: loads settings, runs the frame driver at the configured
//! rate for a number of frames and prints the final state as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use duo_pong::driver::{FrameDriver, HostEvent};
use duo_pong::sim::{Command, Game, GameEvent, Outcome};
use duo_pong::{Settings, SettingsError};

#[derive(Parser)]
#[command(version, about = "Headless two-paddle Pong simulation")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to simulate before exiting
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Serve RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
}

fn load_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Duo Pong (headless) starting: {}x{} at {} Hz",
        settings.width,
        settings.height,
        settings.tick_rate
    );

    let mut game = match Game::from_settings(&settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut driver = FrameDriver::new(settings.tick_rate);
    let frame_time = settings.tick_dt();

    driver.dispatch(&mut game, HostEvent::Command(Command::Start));

    for frame in 0..cli.frames {
        for event in driver.advance(&mut game, frame_time) {
            match event {
                GameEvent::Goal { scorer } => {
                    log::info!("Frame {}: point to {}", frame, scorer.as_str())
                }
                GameEvent::PaddleHit(side) => {
                    log::debug!("Frame {}: {} returns", frame, side.as_str())
                }
                GameEvent::WallBounce => log::trace!("Frame {}: wall bounce", frame),
            }
        }
    }

    if driver.dispatch(&mut game, HostEvent::Command(Command::Exit)) == Outcome::Exit {
        log::info!("Stopped after {} ticks", driver.ticks());
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Could not encode final state: {}", e);
            ExitCode::FAILURE
        }
    }
}
