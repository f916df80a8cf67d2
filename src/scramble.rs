//! Random scramble generation.

use fastrand::Rng;

use crate::cube::Cube;
use crate::moves::Move;

/// Draws `length` moves uniformly from the full 18-move set.
///
/// Takes the RNG by reference so callers control seeding; the CLI and the
/// tests use fixed seeds for reproducible scrambles.
pub fn random_moves(length: usize, rng: &mut Rng) -> Vec<Move> {
    (0..length)
        .map(|_| Move::ALL[rng.usize(..Move::ALL.len())])
        .collect()
}

/// Scrambles a solved cube, returning the scramble and the resulting state.
pub fn scrambled_cube(length: usize, rng: &mut Rng) -> (Vec<Move>, Cube) {
    let moves = random_moves(length, rng);
    let state = Cube::solved().apply_all(&moves);
    (moves, state)
}
