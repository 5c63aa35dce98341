//! Outbound ports - Interfaces that the application requires from external systems

mod random_port;

pub use random_port::RandomPort;
