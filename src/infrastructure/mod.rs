//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Random: `rand` adapters for the random port
//! - Console: Prompted line input and output
//! - Wizard: The interactive dice roll session

pub mod config;
pub mod console;
pub mod random;
pub mod wizard;
