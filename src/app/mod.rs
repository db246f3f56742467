//! Application layer: engine configuration and the container that builds
//! engines from it.
//!
//! ```text
//! EngineConfig ──► App::create_engine ──► Box<dyn MoveEngine>
//!                       │
//!                       └─ random source factory (StdRandom by default,
//!                          injectable for tests)
//! ```
//!
//! # Usage
//!
//! ```
//! use oxo::app::{App, EngineConfig, EngineKind};
//!
//! let app = App::new();
//! let config = EngineConfig::new(EngineKind::Playout).with_trials(200).with_seed(42);
//! let engine = app.create_engine(&config)?;
//! assert_eq!(engine.name(), "playout");
//! # Ok::<(), oxo::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{EngineConfig, EngineKind};
pub use container::{App, AppBuilder};
