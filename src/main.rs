//! Dice Roll Wizard - dice roll and rules assistant for Advanced Squad Leader
//!
//! The wizard:
//! - Tracks the phase, action and rate of fire for the next roll
//! - Keeps the action legal for the phase (and the phase legal for the action)
//! - Rolls the coloured and white dice
//! - Lists the rules that may apply to the result
//!
//! Players are expected to know and apply the rules themselves.

mod application;
mod domain;
mod infrastructure;

use std::io;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::RandomPort;
use crate::application::services::DiceRollService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::console::Console;
use crate::infrastructure::random::{SeededRngAdapter, ThreadRngAdapter};
use crate::infrastructure::wizard::DiceRollWizard;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they stay out of the prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dice_roll_wizard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Dice Roll Wizard");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Phase: {}", config.phase);
    tracing::info!("  Rate of fire: {}", config.rate_of_fire);

    let rng: Arc<dyn RandomPort> = match config.dice_seed {
        Some(seed) => {
            tracing::info!("  Dice seed: {}", seed);
            Arc::new(SeededRngAdapter::new(seed))
        }
        None => Arc::new(ThreadRngAdapter),
    };

    let service = DiceRollService::new(config.initial_settings(), rng);
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut wizard = DiceRollWizard::new(console, service);
    wizard.run()?;

    tracing::info!(
        "Dice Roll Wizard stopped after {} roll(s)",
        wizard.service().roll_count()
    );
    Ok(())
}
