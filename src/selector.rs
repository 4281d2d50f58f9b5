// Move selection policy
//
// Combines the immediate-safety filter with per-candidate reachability scores:
// - no safe move: fixed fallback (down)
// - nothing reaches the snake's own length: greedy, first highest score wins
// - otherwise: uniform random choice among the candidates with enough room

use log::{debug, info};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::SafetyConfig;
use crate::reachability::ReachabilitySearch;
use crate::safety::safe_directions;
use crate::types::{Battlesnake, Board, Direction};

/// Returned when every direction is certainly fatal
pub const FALLBACK_DIRECTION: Direction = Direction::Down;

/// Which tier of the policy produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// The candidate pool was empty
    NoSafeMoves,
    /// No candidate reached the threshold; took the highest score
    LongestAvailable,
    /// At least one candidate reached the threshold; picked randomly among those
    Roomy,
}

/// Reachability score of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    pub direction: Direction,
    pub score: u32,
}

/// Outcome of one move selection
#[derive(Debug, Clone)]
pub struct Decision {
    pub direction: Direction,
    pub kind: DecisionKind,
    pub candidates: Vec<CandidateScore>,
    /// Score a candidate needs to count as roomy: snake length minus one
    pub threshold: u32,
}

impl Decision {
    /// Every direction this policy could have returned for the same board
    pub fn acceptable(&self) -> Vec<Direction> {
        match self.kind {
            DecisionKind::Roomy => self
                .candidates
                .iter()
                .filter(|c| c.score >= self.threshold)
                .map(|c| c.direction)
                .collect(),
            DecisionKind::NoSafeMoves | DecisionKind::LongestAvailable => vec![self.direction],
        }
    }

    pub fn best_score(&self) -> u32 {
        self.candidates.iter().map(|c| c.score).max().unwrap_or(0)
    }
}

/// Budget for every candidate search: the snake's length minus one
pub fn search_budget(you: &Battlesnake) -> u32 {
    (you.body.len() as u32).saturating_sub(1)
}

/// Scores each candidate with its own fresh reachability search
pub fn score_candidates(
    board: &Board,
    you: &Battlesnake,
    candidates: &[Direction],
) -> Vec<CandidateScore> {
    let head = match you.body.first() {
        Some(head) => *head,
        None => return Vec::new(),
    };
    let budget = search_budget(you);

    candidates
        .iter()
        .map(|&direction| {
            let mut search = ReachabilitySearch::new(board);
            let score =
                search.estimate_open_path(direction.apply(&head), &direction.non_opposite(), budget);
            debug!(
                "Candidate {}: score {} (budget {}, {} cells expanded, {} memo hits)",
                direction,
                score,
                budget,
                search.nodes_expanded(),
                search.memo_hits()
            );
            CandidateScore { direction, score }
        })
        .collect()
}

/// Chooses the next move for `you` on `board`
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    you: &Battlesnake,
    turn: i32,
    rules: &SafetyConfig,
    rng: &mut R,
) -> Decision {
    log::trace!("Turn {} board:{}", turn, board);

    let threshold = search_budget(you);
    let pool = safe_directions(you, board, rules);

    if pool.is_empty() {
        info!(
            "MOVE {}: No safe moves detected! Moving {}",
            turn, FALLBACK_DIRECTION
        );
        return Decision {
            direction: FALLBACK_DIRECTION,
            kind: DecisionKind::NoSafeMoves,
            candidates: Vec::new(),
            threshold,
        };
    }

    let candidates = score_candidates(board, you, &pool);

    // Strictly greater keeps the first candidate on ties
    let mut longest = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.score > longest.score {
            longest = *candidate;
        }
    }

    let (direction, kind) = if longest.score < threshold {
        info!(
            "Turn {}: No move is longer than current length, taking the longest one ({} with {})",
            turn, longest.direction, longest.score
        );
        (longest.direction, DecisionKind::LongestAvailable)
    } else {
        let roomy: Vec<Direction> = candidates
            .iter()
            .filter(|c| c.score >= threshold)
            .map(|c| c.direction)
            .collect();
        let chosen = roomy.choose(rng).copied().unwrap_or(longest.direction);
        (chosen, DecisionKind::Roomy)
    };

    Decision {
        direction,
        kind,
        candidates,
        threshold,
    }
}
