//! Actions a dice roll can resolve

use std::fmt;
use std::str::FromStr;

use super::parse::{normalize_label, ParseValueError};

/// The kind of dice roll being made
///
/// The discriminant is the menu number shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Close Combat Table attack
    Cct = 1,
    /// Infantry Fire Table attack
    Ift = 2,
    /// Morale Check
    MoraleCheck = 3,
    /// Rally attempt
    Rally = 4,
}

impl Action {
    pub const ALL: [Action; 4] = [Self::Cct, Self::Ift, Self::MoraleCheck, Self::Rally];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cct => "CCT",
            Self::Ift => "IFT",
            Self::MoraleCheck => "Morale Check",
            Self::Rally => "Rally",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = ParseValueError;

    /// Accepts the menu number, the label, or the common "MC" shorthand
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number).ok_or_else(|| ParseValueError::new("action", s));
        }

        let wanted = normalize_label(trimmed);
        if wanted == "mc" {
            return Ok(Self::MoraleCheck);
        }
        Self::ALL
            .into_iter()
            .find(|action| normalize_label(action.label()) == wanted)
            .ok_or_else(|| ParseValueError::new("action", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_number(action.number()), Some(action));
        }
        assert_eq!(Action::from_number(0), None);
        assert_eq!(Action::from_number(5), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("ift".parse::<Action>(), Ok(Action::Ift));
        assert_eq!("morale_check".parse::<Action>(), Ok(Action::MoraleCheck));
        assert_eq!("MC".parse::<Action>(), Ok(Action::MoraleCheck));
        assert_eq!("1".parse::<Action>(), Ok(Action::Cct));
        assert!("fire".parse::<Action>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::MoraleCheck.to_string(), "Morale Check");
        assert_eq!(Action::Cct.to_string(), "CCT");
    }
}
