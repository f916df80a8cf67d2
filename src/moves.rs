//! Face turns and their effect on cube state.
//!
//! The 18 moves are indexed 0-17: 0-5 are clockwise quarter turns of
//! R, L, F, B, U, D; 6-11 the half turns; 12-17 the counter-clockwise
//! quarter turns. Every move is realized by applying a single table-driven
//! quarter-turn transform one, two or three times, so there is exactly one
//! permutation/orientation rule to get right instead of eighteen.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cube::Cube;

/// The six turnable faces, in move-index order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Face {
    R = 0,
    L = 1,
    F = 2,
    B = 3,
    U = 4,
    D = 5,
}

impl Face {
    const ALL: [Face; 6] = [Face::R, Face::L, Face::F, Face::B, Face::U, Face::D];

    /// Letter used in move notation.
    fn letter(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::F => 'F',
            Face::B => 'B',
            Face::U => 'U',
            Face::D => 'D',
        }
    }

    /// Quarter turns of F and B flip the orientation of every cycled edge.
    fn flips_edges(self) -> bool {
        matches!(self, Face::F | Face::B)
    }

    /// Quarter turns of U and D leave corner twists untouched; every other
    /// face twists the cycled corners.
    fn twists_corners(self) -> bool {
        !matches!(self, Face::U | Face::D)
    }
}

/// The cubie locations a clockwise quarter turn of one face cycles.
///
/// Both lists are in cycle order: the cubie at `edges[i]` moves to
/// `edges[(i + 1) % 4]`, and likewise for corners.
struct FaceCycle {
    edges: [usize; 4],
    corners: [usize; 4],
}

/// Per-face affected-cubie table, indexed by `Face as usize`.
const CYCLES: [FaceCycle; 6] = [
    FaceCycle { edges: [1, 6, 9, 4], corners: [0, 1, 5, 4] },   // R
    FaceCycle { edges: [3, 5, 11, 7], corners: [2, 3, 7, 6] },  // L
    FaceCycle { edges: [0, 4, 8, 5], corners: [3, 0, 4, 7] },   // F
    FaceCycle { edges: [2, 7, 10, 6], corners: [1, 2, 6, 5] },  // B
    FaceCycle { edges: [0, 3, 2, 1], corners: [0, 3, 2, 1] },   // U
    FaceCycle { edges: [8, 9, 10, 11], corners: [4, 5, 6, 7] }, // D
];

/// Error produced when parsing move notation.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized move {0:?} (expected e.g. R, R2 or R')")]
pub struct ParseMoveError(String);

/// One of the 18 face turns, stored as its move index 0-17.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move(u8);

impl Move {
    pub const R: Move = Move(0);
    pub const L: Move = Move(1);
    pub const F: Move = Move(2);
    pub const B: Move = Move(3);
    pub const U: Move = Move(4);
    pub const D: Move = Move(5);
    pub const R2: Move = Move(6);
    pub const L2: Move = Move(7);
    pub const F2: Move = Move(8);
    pub const B2: Move = Move(9);
    pub const U2: Move = Move(10);
    pub const D2: Move = Move(11);
    pub const R3: Move = Move(12);
    pub const L3: Move = Move(13);
    pub const F3: Move = Move(14);
    pub const B3: Move = Move(15);
    pub const U3: Move = Move(16);
    pub const D3: Move = Move(17);

    /// All 18 moves in index order.
    pub const ALL: [Move; 18] = {
        let mut all = [Move(0); 18];
        let mut i = 0;
        while i < 18 {
            all[i] = Move(i as u8);
            i += 1;
        }
        all
    };

    /// Builds a move from a raw index, rejecting anything outside 0-17.
    pub fn from_index(index: usize) -> Option<Move> {
        if index < 18 {
            Some(Move(index as u8))
        } else {
            None
        }
    }

    /// The raw move index 0-17.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The face this move turns.
    pub fn face(self) -> Face {
        Face::ALL[(self.0 % 6) as usize]
    }

    /// Number of clockwise quarter turns this move performs (1, 2 or 3).
    pub fn turns(self) -> u8 {
        self.0 / 6 + 1
    }

    /// The move undoing this one: quarter and three-quarter turns swap,
    /// half turns are self-inverse.
    pub fn inverse(self) -> Move {
        match self.0 {
            0..=5 => Move(self.0 + 12),
            12..=17 => Move(self.0 - 12),
            _ => self,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face().letter())?;
        match self.turns() {
            2 => write!(f, "2"),
            3 => write!(f, "'"),
            _ => Ok(()),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars.next().and_then(|c| {
            Face::ALL.iter().copied().find(|face| face.letter() == c)
        });
        let offset = match chars.next() {
            None => Some(0u8),
            Some('2') => Some(6),
            Some('\'') | Some('3') => Some(12),
            Some(_) => None,
        };
        match (face, offset, chars.next()) {
            (Some(face), Some(offset), None) => Ok(Move(face as u8 + offset)),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// Parses a whitespace-separated move sequence like `"R U2 F' D L2"`.
pub fn parse_sequence(notation: &str) -> Result<Vec<Move>, ParseMoveError> {
    notation.split_whitespace().map(Move::from_str).collect()
}

/// Formats a move sequence as whitespace-separated notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Cube {
    /// Applies one move, returning the resulting state.
    ///
    /// Total over all 18 moves; half and counter-clockwise turns repeat the
    /// quarter-turn transform.
    pub fn apply(&self, mv: Move) -> Cube {
        let mut state = *self;
        for _ in 0..mv.turns() {
            state = state.quarter_turn(mv.face());
        }
        state
    }

    /// Applies a move sequence left to right.
    pub fn apply_all(&self, moves: &[Move]) -> Cube {
        moves.iter().fold(*self, |state, &mv| state.apply(mv))
    }

    /// One clockwise quarter turn of `face`.
    ///
    /// Cycles the four affected edge and corner locations, flipping edge
    /// orientations on F/B and twisting corner orientations by +2/+1
    /// alternating around the cycle on everything but U/D. The alternation
    /// keeps the total twist at 0 mod 3, and the 4-cycles keep corner and
    /// edge permutation parity in step, so the reachable-group invariants
    /// hold by construction.
    fn quarter_turn(&self, face: Face) -> Cube {
        let cycle = &CYCLES[face as usize];
        let mut next = *self;

        for i in 0..4 {
            let from = cycle.edges[i];
            let to = cycle.edges[(i + 1) % 4];
            next.edge_perm[to] = self.edge_perm[from];
            next.edge_orient[to] = if face.flips_edges() {
                self.edge_orient[from] ^ 1
            } else {
                self.edge_orient[from]
            };
        }

        for i in 0..4 {
            let from = cycle.corners[i];
            let to = cycle.corners[(i + 1) % 4];
            next.corner_perm[to] = self.corner_perm[from];
            let twist = if face.twists_corners() {
                if i % 2 == 0 {
                    2
                } else {
                    1
                }
            } else {
                0
            };
            next.corner_orient[to] = (self.corner_orient[from] + twist) % 3;
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{NUM_CORNERS, NUM_EDGES};

    /// A mid-solve state to exercise moves away from the identity.
    fn scrambled() -> Cube {
        let moves = parse_sequence("R U2 F' D L2 B U' R2 F L").unwrap();
        Cube::solved().apply_all(&moves)
    }

    fn is_permutation(slots: &[u8], len: usize) -> bool {
        let mut seen = vec![false; len];
        for &id in slots {
            if (id as usize) >= len || seen[id as usize] {
                return false;
            }
            seen[id as usize] = true;
        }
        true
    }

    fn inversion_parity(slots: &[u8]) -> u8 {
        let mut inversions = 0;
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                if slots[i] > slots[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2
    }

    /// The reachable-group invariants of a physical cube.
    fn assert_well_formed(cube: &Cube) {
        assert!(is_permutation(&cube.edge_perm, NUM_EDGES));
        assert!(is_permutation(&cube.corner_perm, NUM_CORNERS));
        let flip_sum: u32 = cube.edge_orient.iter().map(|&o| o as u32).sum();
        let twist_sum: u32 = cube.corner_orient.iter().map(|&o| o as u32).sum();
        assert_eq!(flip_sum % 2, 0, "edge flip sum must be even");
        assert_eq!(twist_sum % 3, 0, "corner twist sum must be 0 mod 3");
        assert_eq!(
            inversion_parity(&cube.edge_perm),
            inversion_parity(&cube.corner_perm),
            "edge and corner permutation parity must match"
        );
    }

    #[test]
    fn test_move_inverse_round_trips() {
        let start = scrambled();
        for mv in Move::ALL {
            assert_eq!(
                start.apply(mv).apply(mv.inverse()),
                start,
                "{mv} then {} must restore the state",
                mv.inverse()
            );
            assert_eq!(Cube::solved().apply(mv).apply(mv.inverse()), Cube::solved());
        }
    }

    #[test]
    fn test_half_turn_equals_two_quarter_turns() {
        let start = scrambled();
        for face in 0..6 {
            let quarter = Move::from_index(face).unwrap();
            let half = Move::from_index(face + 6).unwrap();
            assert_eq!(start.apply(half), start.apply(quarter).apply(quarter));
            assert_eq!(start.apply(half).apply(half), start, "{half} is self-inverse");
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let start = scrambled();
        for face in 0..6 {
            let quarter = Move::from_index(face).unwrap();
            let mut state = start;
            for _ in 0..4 {
                state = state.apply(quarter);
            }
            assert_eq!(state, start);
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        // (R U R' U') six times is the identity; fewer than six is not
        let commutator = [Move::R, Move::U, Move::R3, Move::U3];
        let mut state = Cube::solved();
        for repeat in 1..=6 {
            state = state.apply_all(&commutator);
            assert_eq!(state.is_solved(), repeat == 6, "after {repeat} repetitions");
        }
    }

    #[test]
    fn test_invariants_hold_under_random_moves() {
        let mut rng = fastrand::Rng::with_seed(0x7415);
        let mut state = Cube::solved();
        for _ in 0..10_000 {
            let mv = Move::ALL[rng.usize(..Move::ALL.len())];
            state = state.apply(mv);
            assert_well_formed(&state);
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(Move::from_index(17), Some(Move::D3));
        assert_eq!(Move::from_index(18), None);
        assert_eq!(Move::from_index(usize::MAX), None);
    }

    #[test]
    fn test_notation() {
        assert_eq!(Move::R.to_string(), "R");
        assert_eq!(Move::F2.to_string(), "F2");
        assert_eq!(Move::U3.to_string(), "U'");
        assert_eq!("B'".parse(), Ok(Move::B3));
        assert_eq!("D2".parse(), Ok(Move::D2));
        assert!("R2'".parse::<Move>().is_err());
        assert!("X".parse::<Move>().is_err());
        assert_eq!(
            parse_sequence("R U2 F' D L2").unwrap(),
            [Move::R, Move::U2, Move::F3, Move::D, Move::L2]
        );
        assert_eq!(
            format_sequence(&[Move::R, Move::U2, Move::F3]),
            "R U2 F'"
        );
    }
}
