//! Turn phases and the actions each one permits

use std::fmt;
use std::str::FromStr;

use super::action::Action;
use super::parse::{normalize_label, ParseValueError};

/// A phase of the player turn, in sequence order
///
/// The discriminant is the menu number shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Rally = 1,
    PrepFire = 2,
    Movement = 3,
    DefensiveFire = 4,
    AdvancingFire = 5,
    Rout = 6,
    Advance = 7,
    CloseCombat = 8,
}

const FIRE_ACTIONS: &[Action] = &[Action::Ift, Action::MoraleCheck];

impl Phase {
    pub const ALL: [Phase; 8] = [
        Self::Rally,
        Self::PrepFire,
        Self::Movement,
        Self::DefensiveFire,
        Self::AdvancingFire,
        Self::Rout,
        Self::Advance,
        Self::CloseCombat,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rally => "Rally",
            Self::PrepFire => "Prep Fire",
            Self::Movement => "Movement",
            Self::DefensiveFire => "Defensive Fire",
            Self::AdvancingFire => "Advancing Fire",
            Self::Rout => "Rout",
            Self::Advance => "Advance",
            Self::CloseCombat => "Close Combat",
        }
    }

    /// Actions that may be rolled for during this phase, in menu order.
    ///
    /// The Advance phase has none.
    pub fn legal_actions(self) -> &'static [Action] {
        match self {
            Self::Rally => &[Action::Rally],
            Self::PrepFire
            | Self::Movement
            | Self::DefensiveFire
            | Self::AdvancingFire
            | Self::Rout => FIRE_ACTIONS,
            Self::Advance => &[],
            Self::CloseCombat => &[Action::Cct],
        }
    }

    pub fn allows(self, action: Action) -> bool {
        self.legal_actions().contains(&action)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number).ok_or_else(|| ParseValueError::new("phase", s));
        }

        let wanted = normalize_label(trimmed);
        Self::ALL
            .into_iter()
            .find(|phase| normalize_label(phase.label()) == wanted)
            .ok_or_else(|| ParseValueError::new("phase", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_matches_numbers() {
        for (index, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.number() as usize, index + 1);
        }
        assert_eq!(Phase::from_number(0), None);
        assert_eq!(Phase::from_number(9), None);
    }

    #[test]
    fn test_legal_actions() {
        assert_eq!(Phase::Rally.legal_actions(), &[Action::Rally]);
        assert_eq!(Phase::Rout.legal_actions(), &[Action::Ift, Action::MoraleCheck]);
        assert!(Phase::Advance.legal_actions().is_empty());
        assert_eq!(Phase::CloseCombat.legal_actions(), &[Action::Cct]);

        assert!(Phase::Movement.allows(Action::MoraleCheck));
        assert!(!Phase::Movement.allows(Action::Rally));
        assert!(!Phase::Advance.allows(Action::Ift));
    }

    #[test]
    fn test_every_action_has_a_phase() {
        for action in Action::ALL {
            assert!(Phase::ALL.iter().any(|phase| phase.allows(action)));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("prep fire".parse::<Phase>(), Ok(Phase::PrepFire));
        assert_eq!("CLOSE_COMBAT".parse::<Phase>(), Ok(Phase::CloseCombat));
        assert_eq!(" 4 ".parse::<Phase>(), Ok(Phase::DefensiveFire));
        assert!("12".parse::<Phase>().is_err());
        assert!("Lunch".parse::<Phase>().is_err());
    }
}
