//! A roll of the coloured and white dice

use std::fmt;

pub const DIE_MIN: u8 = 1;
pub const DIE_MAX: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Die value {0} is outside 1..=6")]
pub struct DieValueError(pub u8);

/// Two six-sided dice thrown together
///
/// The coloured die is read on its own for several rules (rate of fire,
/// for example), so the two dice are kept apart rather than summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    colored: u8,
    white: u8,
}

impl DiceRoll {
    pub fn new(colored: u8, white: u8) -> Result<Self, DieValueError> {
        for die in [colored, white] {
            if !(DIE_MIN..=DIE_MAX).contains(&die) {
                return Err(DieValueError(die));
            }
        }
        Ok(Self { colored, white })
    }

    pub fn colored(&self) -> u8 {
        self.colored
    }

    pub fn white(&self) -> u8 {
        self.white
    }

    /// The Original DR: both dice, before any modifier
    pub fn total(&self) -> u8 {
        self.colored + self.white
    }

    pub fn is_doubles(&self) -> bool {
        self.colored == self.white
    }

    pub fn is_original(&self, total: u8) -> bool {
        self.total() == total
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "colored {}, white {} (DR {})",
            self.colored,
            self.white,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(DiceRoll::new(0, 3), Err(DieValueError(0)));
        assert_eq!(DiceRoll::new(3, 7), Err(DieValueError(7)));
        assert!(DiceRoll::new(1, 6).is_ok());
    }

    #[test]
    fn test_totals_and_doubles() {
        let roll = DiceRoll::new(6, 6).unwrap();
        assert_eq!(roll.total(), 12);
        assert!(roll.is_doubles());
        assert!(roll.is_original(12));

        let roll = DiceRoll::new(2, 5).unwrap();
        assert!(!roll.is_doubles());
        assert_eq!(roll.to_string(), "colored 2, white 5 (DR 7)");
    }
}
