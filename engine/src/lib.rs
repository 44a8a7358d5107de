//! Conway's Game of Life on a bounded grid, stepped at a fixed rate by a
//! variable-rate frame clock.

pub mod config;
pub mod genesis;
pub mod grid;
pub mod scheduler;
pub mod simulation;

pub use config::{Config, ConfigError, USAGE};
pub use grid::GridState;
pub use scheduler::FixedStepScheduler;
pub use simulation::Simulation;
