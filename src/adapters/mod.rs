//! Adapters implementing domain ports.
//!
//! Random sources for the playout estimator: a seeded `StdRng` wrapper for
//! real play and a scripted sequence for exact, reproducible tests.

pub mod scripted_random;
pub mod std_random;

pub use scripted_random::ScriptedRandom;
pub use std_random::StdRandom;
