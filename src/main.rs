//! Hand gesture replay: runs recorded hand landmarks through the gesture
//! pipeline and logs the resulting pointer actions.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::app::{AppConfig, GestureApp, ReplayMode};
use hand_gesture_control::config::{Config, EXAMPLE_CONFIG};
use hand_gesture_control::constants::DEFAULT_POLL_HZ;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded landmark stream (YAML)
    #[arg(short, long, required_unless_present = "print_config")]
    recording: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Process frames synchronously instead of replaying in real time
    #[arg(long)]
    fast: bool,

    /// Consumer polling rate in Hz
    #[arg(long, default_value_t = DEFAULT_POLL_HZ)]
    poll_hz: u32,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control - replay");

    let pipeline = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let recording = args
        .recording
        .ok_or_else(|| anyhow::anyhow!("--recording is required"))?;

    let config = AppConfig {
        recording,
        mode: if args.fast { ReplayMode::Fast } else { ReplayMode::Realtime },
        poll_hz: args.poll_hz,
    };

    let mut app = GestureApp::new(config, pipeline)?;
    let summary = app.run()?;
    info!(
        "Done: {} left clicks, {} right clicks over {} frames",
        summary.left_clicks, summary.right_clicks, summary.frames
    );

    Ok(())
}
