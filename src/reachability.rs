// Bounded depth-first reachability search
//
// Estimates how long a non-reversing, non-colliding path can get from a starting cell,
// capped by a step budget. The result is only meaningful relative to other candidates
// searched with the same budget; it is not an exact longest-path computation.
//
// Memo entries are reused regardless of the budget or path they were computed under,
// and visited cells stay visited for the lifetime of the search. Both make the
// estimate order-dependent, which is accepted. Every result is capped at the budget
// it was asked for, so a stale memo entry can never report more room than requested.

use log::trace;
use std::collections::{HashMap, HashSet};

use crate::collision::is_lethal;
use crate::types::{Board, Coord, Direction};

/// Memo slot value meaning "not computed yet". Computed slots are always >= 1.
const UNSET: u32 = 0;

/// Best known path length per follow-up direction, indexed by `Direction::slot`
pub type MemoEntry = [u32; 4];

/// Search context for a single candidate move.
///
/// Owns the memo and visited set; create a fresh one per candidate and drop it after.
pub struct ReachabilitySearch<'a> {
    board: &'a Board,
    memo: HashMap<Coord, MemoEntry>,
    visited: HashSet<Coord>,
    nodes_expanded: usize,
    memo_hits: usize,
}

impl<'a> ReachabilitySearch<'a> {
    pub fn new(board: &'a Board) -> Self {
        ReachabilitySearch {
            board,
            memo: HashMap::new(),
            visited: HashSet::new(),
            nodes_expanded: 0,
            memo_hits: 0,
        }
    }

    /// Number of cells expanded so far
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Number of lookups answered from the memo
    pub fn memo_hits(&self) -> usize {
        self.memo_hits
    }

    /// Memo entry recorded for `coord`, if it has been expanded
    pub fn memo_entry(&self, coord: &Coord) -> Option<&MemoEntry> {
        self.memo.get(coord)
    }

    /// Estimates the longest open path starting at `from`, following only `allowed`
    /// for the first step and never reversing afterwards. The result is at most
    /// `remaining_budget`, which also bounds the recursion depth.
    pub fn estimate_open_path(
        &mut self,
        from: Coord,
        allowed: &[Direction],
        remaining_budget: u32,
    ) -> u32 {
        if self.memo.contains_key(&from) {
            self.memo_hits += 1;
            return self.extend_memo(from, allowed, remaining_budget);
        }

        if self.visited.contains(&from) {
            return 0;
        }

        if is_lethal(&from, self.board) {
            return 0;
        }

        if remaining_budget == 0 {
            return 0;
        }

        self.visited.insert(from);
        self.nodes_expanded += 1;

        let mut lengths: MemoEntry = [UNSET; 4];
        for &dir in allowed {
            let next = dir.apply(&from);
            lengths[dir.slot()] =
                self.estimate_open_path(next, &dir.non_opposite(), remaining_budget - 1) + 1;
        }

        trace!("Expanded {} with budget {}: {:?}", from, remaining_budget, lengths);
        self.memo.insert(from, lengths);
        lengths
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .min(remaining_budget)
    }

    /// Fills any unset slots of an already expanded cell for the requested directions
    /// and returns the best of them.
    fn extend_memo(&mut self, from: Coord, allowed: &[Direction], remaining_budget: u32) -> u32 {
        let mut best = 0;
        for &dir in allowed {
            let mut length = self.slot_value(&from, dir);
            if length == UNSET && remaining_budget > 0 {
                length = self.estimate_open_path(
                    dir.apply(&from),
                    &dir.non_opposite(),
                    remaining_budget - 1,
                ) + 1;
                if let Some(entry) = self.memo.get_mut(&from) {
                    entry[dir.slot()] = length;
                }
            }
            best = best.max(length);
        }
        best.min(remaining_budget)
    }

    fn slot_value(&self, coord: &Coord, dir: Direction) -> u32 {
        self.memo.get(coord).map_or(UNSET, |entry| entry[dir.slot()])
    }
}

/// Runs a fresh search from `from` with its own memo and visited set
pub fn estimate_open_path(
    board: &Board,
    from: Coord,
    allowed: &[Direction],
    remaining_budget: u32,
) -> u32 {
    ReachabilitySearch::new(board).estimate_open_path(from, allowed, remaining_budget)
}
