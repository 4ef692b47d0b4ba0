use anyhow::Result;
use log::info;
use std::io;

use training_panel::backend::{initialize_backend, run_event_stream, PanelConfig};

/// Drive a panel session from JSON events, one per stdin line.
///
/// Usage: `training-panel [config.yaml]`
fn main() -> Result<()> {
    env_logger::init();
    info!("Starting training panel");

    let config = match std::env::args().nth(1) {
        Some(path) => PanelConfig::load(&path)?,
        None => PanelConfig::from_env()?,
    };
    let mut session = initialize_backend(&config)?;

    run_event_stream(&mut session, io::stdin().lock(), io::stdout().lock())?;
    info!("Session finished");
    Ok(())
}
