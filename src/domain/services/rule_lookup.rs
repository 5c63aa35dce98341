//! Rule lookup - which rules may bear on a roll
//!
//! The lookup lists rules that can apply given the dice and the settings. It
//! does not resolve them; modifiers and unit state are for the players.

use std::fmt;

use crate::domain::value_objects::{Action, DiceRoll, Phase, RateOfFire};

/// A rulebook section that may apply to a roll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReference {
    /// Rulebook section, e.g. "A7.9"
    pub rule: &'static str,
    pub title: &'static str,
    pub text: String,
}

impl RuleReference {
    fn new(rule: &'static str, title: &'static str, text: impl Into<String>) -> Self {
        Self {
            rule,
            title,
            text: text.into(),
        }
    }
}

impl fmt::Display for RuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.rule, self.title, self.text)
    }
}

/// Rules that may apply to `roll` made for `action` during `phase`.
///
/// Returns an empty list when there is no action to roll for.
pub fn applicable_rules(
    roll: &DiceRoll,
    phase: Phase,
    action: Option<Action>,
    rate_of_fire: RateOfFire,
) -> Vec<RuleReference> {
    match action {
        None => Vec::new(),
        Some(Action::Rally) => rally_rules(roll),
        Some(Action::Ift) => fire_rules(roll, phase, rate_of_fire),
        Some(Action::MoraleCheck) => morale_check_rules(roll, phase),
        Some(Action::Cct) => close_combat_rules(roll),
    }
}

fn sniper_check(roll: &DiceRoll) -> RuleReference {
    RuleReference::new(
        "A14.2",
        "Sniper Activation",
        format!(
            "if the Original DR of {} equals the opposing SAN, the opponent makes a Sniper attack",
            roll.total()
        ),
    )
}

fn rally_rules(roll: &DiceRoll) -> Vec<RuleReference> {
    let mut rules = vec![RuleReference::new(
        "A10.6",
        "Rally",
        "the unit rallies if the Final DR is less than or equal to its Morale Level",
    )];

    if roll.is_original(12) {
        rules.push(RuleReference::new(
            "A10.61",
            "Casualty Reduction",
            "an Original 12 Rally DR fails and the unit suffers Casualty Reduction",
        ));
    }

    rules.push(sniper_check(roll));
    rules
}

fn fire_rules(roll: &DiceRoll, phase: Phase, rate_of_fire: RateOfFire) -> Vec<RuleReference> {
    let mut rules = vec![RuleReference::new(
        "A7.3",
        "Infantry Fire Table",
        "cross-index the Final DR with the firepower column to find the result",
    )];

    match phase {
        Phase::Movement => rules.push(RuleReference::new(
            "A8.1",
            "Defensive First Fire",
            "the moving unit is attacked in the Location it currently occupies",
        )),
        Phase::AdvancingFire => rules.push(RuleReference::new(
            "A7.36",
            "Advancing Fire",
            "firepower of units that moved or are marked with a Prep Fire counter is halved",
        )),
        _ => {}
    }

    if roll.is_doubles() {
        rules.push(RuleReference::new(
            "A7.9",
            "Cowering",
            "doubles shift fire one column to the left (two for Inexperienced units) unless \
             the firer is leader-directed, elite or a vehicle",
        ));
    }

    if rate_of_fire.retained_by(roll.colored()) {
        rules.push(RuleReference::new(
            "A9.2",
            "Multiple ROF",
            format!(
                "colored die {} is within ROF {}; the weapon may fire again",
                roll.colored(),
                rate_of_fire
            ),
        ));
    }

    if roll.is_original(12) {
        rules.push(RuleReference::new(
            "A9.7",
            "Malfunction",
            "an Original 12 (or a DR at or above the weapon's B#) malfunctions a firing Support Weapon",
        ));
    }

    rules.push(sniper_check(roll));
    rules
}

fn morale_check_rules(roll: &DiceRoll, phase: Phase) -> Vec<RuleReference> {
    let mut rules = vec![RuleReference::new(
        "A10.1",
        "Morale Check",
        "the unit passes if the Final DR is less than or equal to its Morale Level",
    )];

    if phase == Phase::Rout {
        rules.push(RuleReference::new(
            "A10.53",
            "Interdiction",
            "a routing unit that fails an Interdiction MC suffers Casualty Reduction",
        ));
    }

    if roll.is_original(2) {
        rules.push(RuleReference::new(
            "A15.1",
            "Heat of Battle",
            "an Original 2 MC DR calls for a Heat of Battle DR",
        ));
    }

    if roll.is_original(12) {
        rules.push(RuleReference::new(
            "A10.31",
            "Casualty Reduction",
            "an Original 12 MC DR fails and the unit suffers Casualty Reduction",
        ));
    }

    rules
}

fn close_combat_rules(roll: &DiceRoll) -> Vec<RuleReference> {
    let mut rules = vec![RuleReference::new(
        "A11.1",
        "Close Combat",
        "the attack eliminates the defender if the Final DR is less than or equal to the CC odds kill number",
    )];

    if roll.is_original(2) {
        rules.push(RuleReference::new(
            "A15.1",
            "Heat of Battle",
            "an Original 2 CC DR may create a Hero for the attacker",
        ));
    }

    rules
}
