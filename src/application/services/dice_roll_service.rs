//! Dice Roll Service - Session settings and simulated dice rolls
//!
//! Owns the settings for the current session and throws the dice through the
//! random port, producing a `DiceRollCheck` for whatever settings are in
//! force at the time of the roll.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::outbound::RandomPort;
use crate::domain::entities::{DiceRollCheck, DiceRollSettings};
use crate::domain::value_objects::{
    Action, DiceRoll, DieValueError, Phase, RateOfFire, DIE_MAX, DIE_MIN,
};

/// Errors that can occur while rolling
#[derive(Debug, thiserror::Error)]
pub enum DiceRollError {
    /// The random source produced a value no die can show
    #[error("Invalid die: {0}")]
    InvalidDie(#[from] DieValueError),
}

pub struct DiceRollService {
    settings: DiceRollSettings,
    rng: Arc<dyn RandomPort>,
    rolls: u32,
}

impl DiceRollService {
    pub fn new(settings: DiceRollSettings, rng: Arc<dyn RandomPort>) -> Self {
        Self {
            settings,
            rng,
            rolls: 0,
        }
    }

    pub fn settings(&self) -> &DiceRollSettings {
        &self.settings
    }

    /// Number of rolls made this session
    pub fn roll_count(&self) -> u32 {
        self.rolls
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.settings.set_phase(phase);
        debug!(phase = %self.settings.phase(), action = ?self.settings.action(), "Phase changed");
    }

    pub fn set_action(&mut self, action: Action) {
        self.settings.set_action(action);
        debug!(phase = %self.settings.phase(), action = %action, "Action changed");
    }

    pub fn set_rate_of_fire(&mut self, rate_of_fire: RateOfFire) {
        self.settings.set_rate_of_fire(rate_of_fire);
        debug!(rate_of_fire = %rate_of_fire, "Rate of fire changed");
    }

    /// Throw the coloured and white dice and look up the rules for the
    /// current settings.
    #[instrument(skip(self), fields(phase = %self.settings.phase()))]
    pub fn roll(&mut self) -> Result<DiceRollCheck, DiceRollError> {
        let colored = self.rng.gen_range(DIE_MIN, DIE_MAX);
        let white = self.rng.gen_range(DIE_MIN, DIE_MAX);
        let roll = DiceRoll::new(colored, white)?;
        self.rolls += 1;

        let check = DiceRollCheck::from_settings(roll, &self.settings);
        info!(
            colored = roll.colored(),
            white = roll.white(),
            total = roll.total(),
            rules = check.rules.len(),
            "Rolled dice"
        );
        Ok(check)
    }
}
