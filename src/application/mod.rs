//! Application layer - Use cases built on the domain model

pub mod ports;
pub mod services;
