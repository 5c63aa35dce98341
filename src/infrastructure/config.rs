//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::entities::DiceRollSettings;
use crate::domain::value_objects::{Action, Phase, RateOfFire};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Phase the session starts in
    pub phase: Phase,
    /// Action the session starts with; the phase's first legal action if unset
    pub action: Option<Action>,
    /// Starting rate of fire
    pub rate_of_fire: RateOfFire,
    /// Seed for reproducible dice; unseeded when absent
    pub dice_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phase: Phase::Rally,
            action: None,
            rate_of_fire: RateOfFire::None,
            dice_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, treating blank values as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            phase: var("DRW_PHASE")
                .map(|value| value.parse())
                .transpose()
                .context("DRW_PHASE must name a phase (e.g. 'Prep Fire' or 2)")?
                .unwrap_or(defaults.phase),
            action: var("DRW_ACTION")
                .map(|value| value.parse())
                .transpose()
                .context("DRW_ACTION must name an action (e.g. 'IFT' or 2)")?,
            rate_of_fire: var("DRW_RATE_OF_FIRE")
                .map(|value| value.parse())
                .transpose()
                .context("DRW_RATE_OF_FIRE must be None, 1, 2 or 3")?
                .unwrap_or(defaults.rate_of_fire),
            dice_seed: var("DRW_DICE_SEED")
                .map(|value| value.trim().parse::<u64>())
                .transpose()
                .context("DRW_DICE_SEED must be an unsigned integer")?,
        })
    }

    /// Session settings built from the configured values through the
    /// settings state machine
    pub fn initial_settings(&self) -> DiceRollSettings {
        DiceRollSettings::with_values(self.phase, self.action, self.rate_of_fire)
    }
}
