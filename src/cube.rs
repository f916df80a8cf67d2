//! Cube state representation.
//!
//! A cube is a 40-slot value: 12 edge locations, 8 corner locations, 12 edge
//! orientations (mod 2) and 8 corner orientations (mod 3). Permutation slots
//! store which cubie identity currently occupies that location; orientation
//! slots store the flip/twist of whatever sits there. The type is pure data:
//! all behavior lives in `moves` (turns) and `phase` (projections).

use std::fmt;

/// Edge cubie identities, named by the two faces they touch.
pub const UF: u8 = 0;
pub const UR: u8 = 1;
pub const UB: u8 = 2;
pub const UL: u8 = 3;
pub const FR: u8 = 4;
pub const FL: u8 = 5;
pub const BR: u8 = 6;
pub const BL: u8 = 7;
pub const DF: u8 = 8;
pub const DR: u8 = 9;
pub const DB: u8 = 10;
pub const DL: u8 = 11;

/// Corner cubie identities, named by the three faces they touch.
pub const UFR: u8 = 0;
pub const UBR: u8 = 1;
pub const UBL: u8 = 2;
pub const UFL: u8 = 3;
pub const DFR: u8 = 4;
pub const DBR: u8 = 5;
pub const DBL: u8 = 6;
pub const DFL: u8 = 7;

/// Number of edge locations on the cube.
pub const NUM_EDGES: usize = 12;

/// Number of corner locations on the cube.
pub const NUM_CORNERS: usize = 8;

/// Full cube state.
///
/// Slot `i` of a permutation array holds the identity of the cubie currently
/// at location `i`; slot `i` of an orientation array holds that cubie's flip
/// (edges) or twist (corners). Equality and hashing are structural, which is
/// what the search uses for its visited keys (via phase projection).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    /// Which edge cubie occupies each of the 12 edge locations.
    pub edge_perm: [u8; NUM_EDGES],
    /// Which corner cubie occupies each of the 8 corner locations.
    pub corner_perm: [u8; NUM_CORNERS],
    /// Flip state (mod 2) of the edge at each location.
    pub edge_orient: [u8; NUM_EDGES],
    /// Twist state (mod 3) of the corner at each location.
    pub corner_orient: [u8; NUM_CORNERS],
}

impl Cube {
    /// The canonical solved state: identity permutations, zero orientations.
    pub const fn solved() -> Self {
        Cube {
            edge_perm: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            corner_perm: [0, 1, 2, 3, 4, 5, 6, 7],
            edge_orient: [0; NUM_EDGES],
            corner_orient: [0; NUM_CORNERS],
        }
    }

    /// Whether this state equals the solved configuration.
    pub fn is_solved(&self) -> bool {
        *self == Cube::solved()
    }

    /// Number of out-of-order corner pairs (slots `i < j` with a larger
    /// identity at `i`).
    ///
    /// Used by the phase-3 projection: the tetrad-swap parity of the corner
    /// permutation is this count mod 2, and it must be even for a state to
    /// be solvable with half turns only.
    pub fn corner_inversions(&self) -> u8 {
        let mut inversions = 0;
        for i in 0..NUM_CORNERS {
            for j in (i + 1)..NUM_CORNERS {
                if self.corner_perm[i] > self.corner_perm[j] {
                    inversions += 1;
                }
            }
        }
        inversions
    }
}

impl fmt::Display for Cube {
    /// Renders as `< edges | corners | edge flips | corner twists >`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for v in self.edge_perm {
            write!(f, " {v}")?;
        }
        write!(f, " |")?;
        for v in self.corner_perm {
            write!(f, " {v}")?;
        }
        write!(f, " |")?;
        for v in self.edge_orient {
            write!(f, " {v}")?;
        }
        write!(f, " |")?;
        for v in self.corner_orient {
            write!(f, " {v}")?;
        }
        write!(f, " >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_state_layout() {
        let cube = Cube::solved();
        for (slot, &id) in cube.edge_perm.iter().enumerate() {
            assert_eq!(id as usize, slot);
        }
        for (slot, &id) in cube.corner_perm.iter().enumerate() {
            assert_eq!(id as usize, slot);
        }
        assert_eq!(cube.edge_orient, [0; NUM_EDGES]);
        assert_eq!(cube.corner_orient, [0; NUM_CORNERS]);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solved_has_no_corner_inversions() {
        assert_eq!(Cube::solved().corner_inversions(), 0);
    }

    #[test]
    fn test_inversions_count_swapped_pair() {
        let mut cube = Cube::solved();
        cube.corner_perm.swap(0, 1);
        assert_eq!(cube.corner_inversions(), 1);
        cube.corner_perm.swap(2, 3);
        assert_eq!(cube.corner_inversions(), 2);
    }

    #[test]
    fn test_display_solved() {
        let rendered = Cube::solved().to_string();
        assert_eq!(
            rendered,
            "< 0 1 2 3 4 5 6 7 8 9 10 11 | 0 1 2 3 4 5 6 7 \
             | 0 0 0 0 0 0 0 0 0 0 0 0 | 0 0 0 0 0 0 0 0 >"
        );
    }
}
