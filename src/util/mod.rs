/// Seeded Lehmer generator that every sketch draws from.
pub mod lehmer;

pub use lehmer::{random_seed, RandomGenerator};
