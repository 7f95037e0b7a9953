//! Alert Identifier Generation

use alert_model::{ID_ALPHABET, ID_LENGTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh identifiers for created alerts
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Random lowercase-alphanumeric identifiers of [`ID_LENGTH`] characters.
///
/// Each generator owns its RNG, so generators can be handed to separate
/// threads without sharing state.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    rng: StdRng,
    length: usize,
}

impl RandomIdGenerator {
    /// Generator seeded from the wall clock
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Generator with a fixed seed, for reproducible plans
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            length: ID_LENGTH,
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        (0..self.length)
            .map(|_| ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}

/// Generator backed by a closure
pub struct FnIdGenerator<F> {
    f: F,
}

impl<F> IdGenerator for FnIdGenerator<F>
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        (self.f)()
    }
}

/// Wrap a closure as an [`IdGenerator`]
pub fn from_fn<F>(f: F) -> FnIdGenerator<F>
where
    F: FnMut() -> String,
{
    FnIdGenerator { f }
}

/// Whether `id` has the shape of a generated identifier
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| ID_ALPHABET.contains(&b))
}
