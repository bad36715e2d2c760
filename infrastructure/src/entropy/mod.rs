//! `rand`-backed entropy adapters

pub mod os;
pub mod seeded;

pub use os::OsEntropy;
pub use seeded::SeededEntropy;
