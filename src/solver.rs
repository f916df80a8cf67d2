//! Bidirectional breadth-first search over projected coset identifiers.
//!
//! Both the start and the goal state expand in lock-step through one shared
//! FIFO frontier, each applying the phase's legal moves; visited bookkeeping
//! is keyed by [`Signature`] rather than full states, which collapses every
//! coset the phase does not care about into a single node. The first state
//! reached from both directions yields a shortest connecting path under the
//! phase's move metric.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cube::Cube;
use crate::moves::Move;
use crate::phase::{Phase, Signature};

/// Failure modes of a phase search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier emptied without the two searches meeting. This cannot
    /// happen for a well-formed cube state: it means the start state is not
    /// in the coset space this phase's moves generate, i.e. the state
    /// violates the cube group invariants.
    #[error("{phase} exhausted after expanding {expanded} states; start state is not solvable with this phase's moves")]
    Exhausted { phase: Phase, expanded: usize },
}

/// Which origin a visited signature was first reached from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    Forward,
    Backward,
}

/// Visited-table entry: where a signature was reached from, and by what.
/// The two origin signatures carry `came_from: None`.
struct Node {
    direction: Direction,
    came_from: Option<(Signature, Move)>,
}

/// Finds a move sequence taking `start` into the same phase coset as `goal`.
///
/// Returns an empty sequence when the two already project to the same
/// signature, and [`SolveError::Exhausted`] when no connection exists. The
/// inputs are not mutated; apply the returned path to `start` to obtain the
/// next phase's start state.
pub fn solve(start: &Cube, goal: &Cube, phase: Phase) -> Result<Vec<Move>, SolveError> {
    let start_sig = phase.signature(start);
    let goal_sig = phase.signature(goal);
    if start_sig == goal_sig {
        return Ok(Vec::new());
    }

    let mut visited: FxHashMap<Signature, Node> = FxHashMap::default();
    visited.insert(
        start_sig,
        Node { direction: Direction::Forward, came_from: None },
    );
    visited.insert(
        goal_sig,
        Node { direction: Direction::Backward, came_from: None },
    );

    // one shared queue: both frontiers expand breadth-first in lock-step
    let mut frontier: VecDeque<Cube> = VecDeque::new();
    frontier.push_back(*start);
    frontier.push_back(*goal);

    let mut expanded: usize = 0;

    while let Some(state) = frontier.pop_front() {
        let state_sig = phase.signature(&state);
        let state_dir = visited[&state_sig].direction;
        expanded += 1;

        for &mv in phase.moves() {
            let next = state.apply(mv);
            let next_sig = phase.signature(&next);

            match visited.get(&next_sig).map(|node| node.direction) {
                // reached from the opposite side: the frontiers met
                Some(dir) if dir != state_dir => {
                    let path = match state_dir {
                        Direction::Forward => {
                            assemble_path(&visited, &state_sig, &next_sig, mv)
                        }
                        // the meeting move was taken on the backward side,
                        // so it enters the path inverted
                        Direction::Backward => {
                            assemble_path(&visited, &next_sig, &state_sig, mv.inverse())
                        }
                    };
                    debug!(
                        "{phase}: met after expanding {expanded} states, path length {}",
                        path.len()
                    );
                    return Ok(path);
                }
                // already reached from our own side: nothing new
                Some(_) => {}
                None => {
                    visited.insert(
                        next_sig,
                        Node {
                            direction: state_dir,
                            came_from: Some((state_sig.clone(), mv)),
                        },
                    );
                    frontier.push_back(next);
                }
            }
        }
    }

    Err(SolveError::Exhausted { phase, expanded })
}

/// Runs all four phases in order against the solved goal, returning the
/// concatenated solution path for `start`.
pub fn solve_full(start: &Cube) -> Result<Vec<Move>, SolveError> {
    let goal = Cube::solved();
    let mut state = *start;
    let mut solution = Vec::new();

    for phase in Phase::ALL {
        let path = solve(&state, &goal, phase)?;
        debug!("{phase}: {} moves", path.len());
        state = state.apply_all(&path);
        solution.extend(path);
    }

    Ok(solution)
}

/// Stitches the two predecessor chains into one forward move sequence.
///
/// The forward chain is walked back to its origin and reversed; the
/// connecting move goes in the middle (already inverted by the caller when
/// the meeting happened on the backward side); the backward chain is walked
/// toward its origin with every move inverted, since its moves were recorded
/// leading away from the goal.
fn assemble_path(
    visited: &FxHashMap<Signature, Node>,
    forward_end: &Signature,
    backward_end: &Signature,
    connector: Move,
) -> Vec<Move> {
    let mut path = Vec::new();

    let mut cursor = forward_end;
    while let Some((predecessor, mv)) = &visited[cursor].came_from {
        path.push(*mv);
        cursor = predecessor;
    }
    path.reverse();

    path.push(connector);

    let mut cursor = backward_end;
    while let Some((predecessor, mv)) = &visited[cursor].came_from {
        path.push(mv.inverse());
        cursor = predecessor;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;
    use crate::scramble;

    #[test]
    fn test_solved_to_solved_is_empty_for_every_phase() {
        let solved = Cube::solved();
        for phase in Phase::ALL {
            assert_eq!(solve(&solved, &solved, phase), Ok(Vec::new()), "{phase}");
        }
    }

    #[test]
    fn test_single_turn_start_reaches_phase1_coset() {
        let start = Cube::solved().apply(Move::F);
        let path = solve(&start, &Cube::solved(), Phase::One).unwrap();
        assert!(!path.is_empty());
        let after = start.apply_all(&path);
        assert_eq!(
            Phase::One.signature(&after),
            Phase::One.signature(&Cube::solved())
        );
    }

    #[test]
    fn test_fixed_scramble_solves_end_to_end() {
        let scramble = parse_sequence("R U2 F' D L2").unwrap();
        let start = Cube::solved().apply_all(&scramble);
        let solution = solve_full(&start).unwrap();
        assert!(start.apply_all(&solution).is_solved());
    }

    #[test]
    fn test_each_phase_lands_in_its_target_coset() {
        let scramble = parse_sequence("R U2 F' D L2 B U' R2 F L D2 B' U F2 R'").unwrap();
        let mut state = Cube::solved().apply_all(&scramble);
        let goal = Cube::solved();
        for phase in Phase::ALL {
            let path = solve(&state, &goal, phase).unwrap();
            state = state.apply_all(&path);
            assert_eq!(
                phase.signature(&state),
                phase.signature(&goal),
                "{phase} did not reach its target coset"
            );
        }
        assert!(state.is_solved());
    }

    #[test]
    fn test_random_scramble_solves_end_to_end() {
        let mut rng = fastrand::Rng::with_seed(0xC0DE);
        let moves = scramble::random_moves(30, &mut rng);
        let start = Cube::solved().apply_all(&moves);
        let solution = solve_full(&start).unwrap();
        assert!(start.apply_all(&solution).is_solved());
    }

    #[test]
    fn test_malformed_state_exhausts_instead_of_lying() {
        // a single flipped edge is physically impossible (odd flip sum), so
        // phase 1 must report exhaustion rather than hand back some path
        let mut broken = Cube::solved();
        broken.edge_orient[0] = 1;
        match solve(&broken, &Cube::solved(), Phase::One) {
            Err(SolveError::Exhausted { phase, .. }) => assert_eq!(phase, Phase::One),
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
