//! Lumines simulation (workspace facade crate).
//!
//! Re-exports the simulation core and shared types under `lumines::{core,types}`
//! and carries the pieces only the headless runner needs: environment
//! configuration and a stand-in merge collaborator.

pub mod config;
pub mod stacker;

pub use lumines_core as core;
pub use lumines_types as types;

pub use config::SimConfig;
pub use stacker::{Landing, Stacker};
