//! Thistlethwaite's four-phase group reduction.
//!
//! Each phase restricts the legal move set to a subgroup generator list and
//! searches for a path into the next subgroup's coset of the solved state:
//!
//! - phase 1 orients all 12 edges (reaches G1 = <R,L,F2,B2,U,D>),
//! - phase 2 orients all 8 corners and puts the M-slice edges into the
//!   M-slice (reaches G2 = <R,L,F2,B2,U2,D2>),
//! - phase 3 puts the E-slice edges into the E-slice and sorts the corners
//!   into their paired tetrads with even swap parity (reaches
//!   G3 = <R2,L2,F2,B2,U2,D2>),
//! - phase 4 finishes the cube with half turns only.
//!
//! `signature` projects a full state down to exactly the degrees of freedom
//! the current phase still has to fix, so the search runs over small coset
//! identifiers instead of raw states.

use std::fmt;

use crate::cube::{self, Cube};
use crate::moves::Move;

/// Edge cubies living in the M-slice (between the L and R faces).
const M_SLICE_EDGES: [u8; 4] = [cube::UF, cube::UB, cube::DF, cube::DB];

/// Edge cubies living in the E-slice (between the U and D faces).
const E_SLICE_EDGES: [u8; 4] = [cube::FR, cube::FL, cube::BR, cube::BL];

/// One corner tetrad: the orbit reachable with half turns from UFR.
const FIRST_TETRAD: [u8; 4] = [cube::UFR, cube::UBL, cube::DBR, cube::DFL];

/// The other corner tetrad.
const SECOND_TETRAD: [u8; 4] = [cube::UBR, cube::UFL, cube::DFR, cube::DBL];

const PHASE1_MOVES: [Move; 6] = [Move::R, Move::L, Move::F, Move::B, Move::U, Move::D];
const PHASE2_MOVES: [Move; 6] = [Move::R, Move::L, Move::F2, Move::B2, Move::U, Move::D];
const PHASE3_MOVES: [Move; 6] = [Move::R, Move::L, Move::F2, Move::B2, Move::U2, Move::D2];
const PHASE4_MOVES: [Move; 6] = [Move::R2, Move::L2, Move::F2, Move::B2, Move::U2, Move::D2];

/// Projected coset identifier of a state under some phase.
///
/// Opaque bytes; only equality and hashing matter. Always derived fresh from
/// a state via [`Phase::signature`], never updated in place.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// The projected bytes, mostly for tests and diagnostics.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// One of the four reduction stages. Always passed explicitly; there is no
/// ambient "current phase" state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    One,
    Two,
    Three,
    Four,
}

impl Phase {
    /// The four phases in solving order.
    pub const ALL: [Phase; 4] = [Phase::One, Phase::Two, Phase::Three, Phase::Four];

    /// 1-based phase number, for display.
    pub fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
            Phase::Three => 3,
            Phase::Four => 4,
        }
    }

    /// The moves this phase's search may apply.
    pub fn moves(self) -> &'static [Move] {
        match self {
            Phase::One => &PHASE1_MOVES,
            Phase::Two => &PHASE2_MOVES,
            Phase::Three => &PHASE3_MOVES,
            Phase::Four => &PHASE4_MOVES,
        }
    }

    /// Projects a state to its coset identifier for this phase.
    ///
    /// Two states with equal signatures are interchangeable for this phase's
    /// search: every tracked field evolves deterministically under the
    /// phase's moves, and everything untracked is either already fixed by
    /// earlier phases or irrelevant until a later one.
    pub fn signature(self, cube: &Cube) -> Signature {
        let mut sig = Vec::new();
        match self {
            // Edge orientations are the only thing phase 1 fixes.
            Phase::One => sig.extend_from_slice(&cube.edge_orient),

            // Corner orientations, plus where one tetrad's corners and the
            // M-slice edges sit. Forcing the first tetrad into its own slot
            // set (together with zero twist) is what puts L/R stickers on
            // the L/R faces; the second tetrad follows automatically.
            Phase::Two => {
                sig.extend_from_slice(&cube.corner_orient);
                push_slots_holding(&mut sig, &cube.corner_perm, &FIRST_TETRAD);
                push_slots_holding(&mut sig, &cube.edge_perm, &M_SLICE_EDGES);
            }

            // E-slice placement (the S-slice then falls into place), both
            // tetrads with their sibling pairs, and the tetrad-swap parity.
            // The parity bit flips on exactly the R/L quarter turns, so it
            // is well-defined on signatures; without it two states that
            // differ by a single pair swap would collapse into one.
            Phase::Three => {
                push_slots_holding(&mut sig, &cube.edge_perm, &E_SLICE_EDGES);
                push_slots_holding(&mut sig, &cube.corner_perm, &FIRST_TETRAD);
                push_slots_holding(&mut sig, &cube.corner_perm, &[cube::UFR, cube::UBL]);
                push_slots_holding(&mut sig, &cube.corner_perm, &[cube::DBR, cube::DFL]);
                push_slots_holding(&mut sig, &cube.corner_perm, &SECOND_TETRAD);
                push_slots_holding(&mut sig, &cube.corner_perm, &[cube::UBR, cube::UFL]);
                push_slots_holding(&mut sig, &cube.corner_perm, &[cube::DFR, cube::DBL]);
                sig.push(cube.corner_inversions() % 2);
            }

            // Phase 4 must reach the one fully solved state, not a coset.
            Phase::Four => {
                sig.extend_from_slice(&cube.edge_perm);
                sig.extend_from_slice(&cube.corner_perm);
                sig.extend_from_slice(&cube.edge_orient);
                sig.extend_from_slice(&cube.corner_orient);
            }
        }
        Signature(sig)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {}", self.number())
    }
}

/// Appends the slots (in ascending order) currently holding any of the
/// tracked cubie identities.
fn push_slots_holding(sig: &mut Vec<u8>, perm: &[u8], tracked: &[u8]) {
    for (slot, id) in perm.iter().enumerate() {
        if tracked.contains(id) {
            sig.push(slot as u8);
        }
    }
}
