//! Core types and definitions for the VOIDFLEET grid combat engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! coordinates, cells, ships, rosters, configuration, events, errors,
//! and snapshot views. It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod score;
pub mod ships;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
