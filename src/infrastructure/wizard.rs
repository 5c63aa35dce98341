//! Interactive dice roll wizard
//!
//! Shows the current settings, lets the player change them, rolls the dice
//! and prints the rules that may apply. Repeats until the player stops or
//! input ends.

use std::io::{BufRead, Write};

use tracing::{info, instrument};

use crate::application::services::{DiceRollError, DiceRollService};
use crate::domain::value_objects::{Action, Phase, RateOfFire};
use crate::infrastructure::console::{Console, ConsoleError};

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    DiceRoll(#[from] DiceRollError),
}

pub struct DiceRollWizard<R, W> {
    console: Console<R, W>,
    service: DiceRollService,
}

impl<R: BufRead, W: Write> DiceRollWizard<R, W> {
    pub fn new(console: Console<R, W>, service: DiceRollService) -> Self {
        Self { console, service }
    }

    pub fn service(&self) -> &DiceRollService {
        &self.service
    }

    /// Run until the player declines to continue. End of input ends the
    /// session normally.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), WizardError> {
        match self.session() {
            Err(WizardError::Console(ConsoleError::InputClosed)) => {
                info!("Input closed, ending session");
                Ok(())
            }
            result => result,
        }?;
        info!(rolls = self.service.roll_count(), "Session finished");
        Ok(())
    }

    fn session(&mut self) -> Result<(), WizardError> {
        loop {
            self.console.say(self.service.settings())?;

            if self
                .console
                .yes_no("\nChange current settings (y/N): ", 'n', 'y')?
            {
                self.edit_settings()?;
            }

            let check = self.service.roll()?;
            self.console.say(format_args!("\n{}\n", check))?;

            if self.console.yes_no("Continue (Y/n): ", 'y', 'n')? {
                return Ok(());
            }
        }
    }

    fn edit_settings(&mut self) -> Result<(), WizardError> {
        loop {
            if self.console.yes_no("Change current phase (y/N): ", 'n', 'y')? {
                self.choose_phase()?;
            }

            if self.console.yes_no("Change current action (y/N): ", 'n', 'y')? {
                self.choose_action()?;
            }

            if self.service.settings().rate_of_fire_is_applicable()
                && self.console.yes_no("Change rate of fire (y/N): ", 'n', 'y')?
            {
                self.choose_rate_of_fire()?;
            }

            self.console
                .say(format_args!("\n{}\n", self.service.settings()))?;

            if !self
                .console
                .yes_no("Proceed with current settings (Y/n): ", 'y', 'n')?
            {
                return Ok(());
            }
        }
    }

    fn choose_phase(&mut self) -> Result<(), WizardError> {
        let entries: Vec<(u8, String)> = Phase::ALL
            .iter()
            .map(|phase| (phase.number(), phase.to_string()))
            .collect();
        let number = self.console.select(
            "\nSelect the number associated with the new phase.",
            &entries,
        )?;
        if let Some(phase) = Phase::from_number(number) {
            self.service.set_phase(phase);
        }
        Ok(())
    }

    fn choose_action(&mut self) -> Result<(), WizardError> {
        let legal = self.service.settings().actions();
        if legal.is_empty() {
            self.console.say(format_args!(
                "\nNo actions are available during the {} phase.",
                self.service.settings().phase()
            ))?;
            return Ok(());
        }

        let entries: Vec<(u8, String)> = legal
            .iter()
            .map(|action| (action.number(), action.to_string()))
            .collect();
        let number = self.console.select(
            "\nSelect the number associated with the new action.",
            &entries,
        )?;
        if let Some(action) = Action::from_number(number) {
            self.service.set_action(action);
        }
        Ok(())
    }

    fn choose_rate_of_fire(&mut self) -> Result<(), WizardError> {
        let entries: Vec<(u8, String)> = RateOfFire::ALL
            .iter()
            .map(|rof| (rof.value(), rof.to_string()))
            .collect();
        let number = self
            .console
            .select("\nSelect the new rate of fire.", &entries)?;
        if let Some(rate_of_fire) = RateOfFire::from_number(number) {
            self.service.set_rate_of_fire(rate_of_fire);
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_output()
    }
}
