//! Ports (trait boundaries) between the decision core and its drivers.
//!
//! The engines depend only on these traits. Concrete random sources live in
//! `adapters`, stock observers in `pipeline::observers`.

pub mod engine;
pub mod observer;
pub mod random;

pub use engine::MoveEngine;
pub use observer::GameObserver;
pub use random::RandomSource;
