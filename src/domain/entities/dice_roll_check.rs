//! DiceRollCheck entity - the outcome shown to the player after a roll
//!
//! A check freezes the settings in force when the dice were thrown, together
//! with the rules the lookup found for them.

use std::fmt;

use crate::domain::entities::DiceRollSettings;
use crate::domain::services::{applicable_rules, RuleReference};
use crate::domain::value_objects::{Action, DiceRoll, Phase, RateOfFire};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRollCheck {
    pub roll: DiceRoll,
    pub phase: Phase,
    pub action: Option<Action>,
    pub rate_of_fire: RateOfFire,
    pub rules: Vec<RuleReference>,
}

impl DiceRollCheck {
    pub fn new(
        roll: DiceRoll,
        phase: Phase,
        action: Option<Action>,
        rate_of_fire: RateOfFire,
    ) -> Self {
        let rules = applicable_rules(&roll, phase, action, rate_of_fire);
        Self {
            roll,
            phase,
            action,
            rate_of_fire,
            rules,
        }
    }

    pub fn from_settings(roll: DiceRoll, settings: &DiceRollSettings) -> Self {
        Self::new(
            roll,
            settings.phase(),
            settings.action(),
            settings.rate_of_fire(),
        )
    }

    pub fn has_rule(&self, rule: &str) -> bool {
        self.rules.iter().any(|r| r.rule == rule)
    }
}

impl fmt::Display for DiceRollCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dice: {}", self.roll)?;

        let Some(action) = self.action else {
            return write!(f, "No dice roll applies during the {} phase.", self.phase);
        };

        write!(f, "Phase: {}\tAction: {}", self.phase, action)?;
        if action == Action::Ift {
            write!(f, "\tRate of fire: {}", self.rate_of_fire)?;
        }
        writeln!(f)?;

        f.write_str("Rules that may apply:")?;
        for rule in &self.rules {
            write!(f, "\n  - {}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_uses_effective_rate_of_fire() {
        let mut settings = DiceRollSettings::new();
        settings.set_rate_of_fire(RateOfFire::Three);

        let check = DiceRollCheck::from_settings(DiceRoll::new(1, 5).unwrap(), &settings);
        assert_eq!(check.rate_of_fire, RateOfFire::None);
        assert!(!check.has_rule("A9.2"));

        settings.set_phase(Phase::DefensiveFire);
        let check = DiceRollCheck::from_settings(DiceRoll::new(1, 5).unwrap(), &settings);
        assert_eq!(check.rate_of_fire, RateOfFire::Three);
        assert!(check.has_rule("A9.2"));
    }

    #[test]
    fn test_display_lists_rules() {
        let check = DiceRollCheck::new(
            DiceRoll::new(6, 6).unwrap(),
            Phase::Rally,
            Some(Action::Rally),
            RateOfFire::None,
        );
        let text = check.to_string();
        assert!(text.starts_with("Dice: colored 6, white 6 (DR 12)\n"));
        assert!(text.contains("Phase: Rally\tAction: Rally\n"));
        assert!(text.contains("\n  - A10.61 Casualty Reduction:"));
        assert!(!text.contains("Rate of fire"));
    }

    #[test]
    fn test_display_without_action() {
        let check = DiceRollCheck::new(
            DiceRoll::new(2, 3).unwrap(),
            Phase::Advance,
            None,
            RateOfFire::None,
        );
        assert_eq!(
            check.to_string(),
            "Dice: colored 2, white 3 (DR 5)\nNo dice roll applies during the Advance phase."
        );
    }
}
