//! Application services - Use case implementations

pub mod dice_roll_service;

pub use dice_roll_service::{DiceRollError, DiceRollService};
