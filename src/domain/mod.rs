//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: DiceRollSettings, DiceRollCheck
//! - Value Objects: Phase, Action, RateOfFire, DiceRoll
//! - Domain Services: rule lookup for a finished roll

pub mod entities;
pub mod services;
pub mod value_objects;
