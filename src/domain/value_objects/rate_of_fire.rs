//! Rate of fire

use std::fmt;
use std::str::FromStr;

use super::parse::{normalize_label, ParseValueError};

/// Rate of fire printed on a weapon counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RateOfFire {
    #[default]
    None = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl RateOfFire {
    pub const ALL: [RateOfFire; 4] = [Self::None, Self::One, Self::Two, Self::Three];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rof| rof.value() == number)
    }

    /// Counter-style label ("1" rather than "One")
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    /// Whether a coloured die of `colored` keeps the weapon firing
    pub fn retained_by(self, colored: u8) -> bool {
        self != Self::None && colored <= self.value()
    }
}

impl fmt::Display for RateOfFire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RateOfFire {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number)
                .ok_or_else(|| ParseValueError::new("rate of fire", s));
        }

        match normalize_label(trimmed).as_str() {
            "none" => Ok(Self::None),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "three" => Ok(Self::Three),
            _ => Err(ParseValueError::new("rate of fire", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(RateOfFire::None.to_string(), "None");
        assert_eq!(RateOfFire::Two.to_string(), "2");
    }

    #[test]
    fn test_retained_by() {
        assert!(!RateOfFire::None.retained_by(1));
        assert!(RateOfFire::One.retained_by(1));
        assert!(!RateOfFire::One.retained_by(2));
        assert!(RateOfFire::Three.retained_by(3));
        assert!(!RateOfFire::Three.retained_by(4));
    }

    #[test]
    fn test_parse() {
        assert_eq!("0".parse::<RateOfFire>(), Ok(RateOfFire::None));
        assert_eq!("three".parse::<RateOfFire>(), Ok(RateOfFire::Three));
        assert_eq!("None".parse::<RateOfFire>(), Ok(RateOfFire::None));
        assert!("4".parse::<RateOfFire>().is_err());
    }
}
