//! Shared types for the koyomi calendar layout engine: the event model,
//! clock abstraction, configuration, and error taxonomy.

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod types;
