//! Thistlethwaite Cube Solver Library
//!
//! Solves a scrambled 3x3x3 Rubik's cube with Thistlethwaite's four-phase
//! group reduction: each phase restricts the legal moves to a subgroup
//! generator set and uses a bidirectional breadth-first search over
//! projected coset identifiers to drive the state into the next subgroup,
//! until only the solved state remains.

pub mod cube;
pub mod moves;
pub mod phase;
pub mod scramble;
pub mod solver;

pub use cube::Cube;
pub use moves::Move;
pub use phase::Phase;
pub use solver::{solve, solve_full, SolveError};
