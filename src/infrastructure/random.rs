//! `rand`-backed implementations of the random port

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::ports::outbound::RandomPort;

/// Uses the thread-local generator; a fresh sequence every session
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngAdapter;

impl RandomPort for ThreadRngAdapter {
    fn gen_range(&self, min: u8, max: u8) -> u8 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded generator for reproducible sessions
pub struct SeededRngAdapter {
    rng: Mutex<StdRng>,
}

impl SeededRngAdapter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRngAdapter {
    fn gen_range(&self, min: u8, max: u8) -> u8 {
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values, wrapping around when exhausted
#[cfg(test)]
pub struct FixedRandomPort {
    values: Mutex<std::collections::VecDeque<u8>>,
}

#[cfg(test)]
impl FixedRandomPort {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl RandomPort for FixedRandomPort {
    fn gen_range(&self, min: u8, _max: u8) -> u8 {
        let mut values = self.values.lock().unwrap();
        match values.pop_front() {
            Some(value) => {
                values.push_back(value);
                value
            }
            None => min,
        }
    }
}
