//! Grid construction and fleet placement.
//!
//! This crate owns the board representation shared by both sides and the
//! placement rules: bounds, overlap, randomized auto-placement. It knows
//! nothing about turns, weapons, or win conditions.

pub mod grid;
pub mod placement;

pub use grid::Grid;

#[cfg(test)]
mod tests;
