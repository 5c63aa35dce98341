//! DiceRollSettings entity - the phase, action and rate of fire applied to a roll
//!
//! Only the state is held here; rolling the dice is an application concern.
//! Every setter keeps phase and action consistent: the action is always one
//! of the phase's legal actions, or absent when the phase has none.

use std::fmt;

use crate::domain::value_objects::{Action, Phase, RateOfFire};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRollSettings {
    phase: Phase,
    action: Option<Action>,
    rate_of_fire: RateOfFire,
}

impl Default for DiceRollSettings {
    fn default() -> Self {
        Self {
            phase: Phase::Rally,
            action: Some(Action::Rally),
            rate_of_fire: RateOfFire::None,
        }
    }
}

impl DiceRollSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults and apply each value through the setters, in
    /// phase, action, rate of fire order.
    pub fn with_values(
        phase: Phase,
        action: Option<Action>,
        rate_of_fire: RateOfFire,
    ) -> Self {
        let mut settings = Self::new();
        settings.set_phase(phase);
        if let Some(action) = action {
            settings.set_action(action);
        }
        settings.set_rate_of_fire(rate_of_fire);
        settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Change the phase. An action the new phase does not allow is replaced
    /// by the phase's first legal action (none for the Advance phase).
    pub fn set_phase(&mut self, phase: Phase) {
        if phase == self.phase {
            return;
        }

        let compatible = self.action.is_some_and(|action| phase.allows(action));
        if !compatible {
            self.action = phase.legal_actions().first().copied();
        }

        self.phase = phase;
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Actions available during the current phase
    pub fn actions(&self) -> &'static [Action] {
        self.phase.legal_actions()
    }

    /// Change the action. If the current phase does not allow it, the phase
    /// moves to the first phase in turn order that does.
    pub fn set_action(&mut self, action: Action) {
        if self.action == Some(action) {
            return;
        }

        if !self.phase.allows(action) {
            if let Some(phase) = Phase::ALL.into_iter().find(|phase| phase.allows(action)) {
                self.phase = phase;
            }
        }

        self.action = Some(action);
    }

    /// The stored rate of fire, or `RateOfFire::None` when it does not apply
    /// to the current action.
    pub fn rate_of_fire(&self) -> RateOfFire {
        if self.rate_of_fire_is_applicable() {
            self.rate_of_fire
        } else {
            RateOfFire::None
        }
    }

    pub fn set_rate_of_fire(&mut self, rate_of_fire: RateOfFire) {
        self.rate_of_fire = rate_of_fire;
    }

    /// Rate of fire only matters for Infantry Fire Table attacks
    pub fn rate_of_fire_is_applicable(&self) -> bool {
        self.action == Some(Action::Ift)
    }
}

impl fmt::Display for DiceRollSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Settings - \tphase: {}\taction: ", self.phase)?;
        match self.action {
            Some(action) => write!(f, "{}", action)?,
            None => f.write_str("None")?,
        }
        if self.rate_of_fire_is_applicable() {
            write!(f, "\trate of fire: {}", self.rate_of_fire())?;
        }
        Ok(())
    }
}
