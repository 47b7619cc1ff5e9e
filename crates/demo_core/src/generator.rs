//! Random display-name generation.
//!
//! Names are an animal followed by a color, each normalized to
//! capitalized-lowercase and joined without a separator ("OtterTeal").
//! The generator is an explicit dependency of the list screen so tests can
//! substitute a seeded instance.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shared::domain::User;

use crate::vocabulary::{ANIMALS, COLORS};

/// Source of users for the list screen.
pub trait UserGenerator {
    fn generate(&mut self) -> User;

    fn generate_many(&mut self, count: usize) -> Vec<User> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// Vocabulary-backed generator driven by a ChaCha RNG.
#[derive(Debug, Clone)]
pub struct NameFaker {
    rng: ChaCha8Rng,
}

impl NameFaker {
    /// Seeds from the thread-local entropy source; output differs per run.
    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Same seed, same sequence of names.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words[self.rng.random_range(0..words.len())]
    }
}

impl Default for NameFaker {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl UserGenerator for NameFaker {
    fn generate(&mut self) -> User {
        let animal = capitalize(self.pick(ANIMALS));
        let color = capitalize(self.pick(COLORS));
        User::new(format!("{animal}{color}"))
    }
}

/// Lowercases `word`, then uppercases its first character.
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
