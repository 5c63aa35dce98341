//! Value objects - Immutable objects defined by their attributes

mod action;
mod dice;
mod parse;
mod phase;
mod rate_of_fire;

pub use action::Action;
pub use dice::{DiceRoll, DieValueError, DIE_MAX, DIE_MIN};
pub use parse::ParseValueError;
pub use phase::Phase;
pub use rate_of_fire::RateOfFire;
