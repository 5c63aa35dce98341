//! Domain entities

mod dice_roll_check;
mod dice_roll_settings;

pub use dice_roll_check::DiceRollCheck;
pub use dice_roll_settings::DiceRollSettings;
