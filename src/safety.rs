// Immediate-safety filter
//
// Removes the moves that are certainly fatal this turn before any look-ahead runs.
// Only cheap, local rules live here; everything else is left to the reachability search.

use log::debug;

use crate::config::SafetyConfig;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Body segments closer to the head than this can never be entered in one step
/// (other than the neck, which the reversal rule handles)
const FIXED_SEGMENT_START: usize = 3;

/// Direction that would move the head back onto its neck, if head and neck differ
pub fn reverse_direction(head: &Coord, neck: &Coord) -> Option<Direction> {
    if neck.x < head.x {
        Some(Direction::Left)
    } else if neck.x > head.x {
        Some(Direction::Right)
    } else if neck.y < head.y {
        Some(Direction::Down)
    } else if neck.y > head.y {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Computes the candidate pool for `you`, in Up, Down, Left, Right order.
///
/// Rules, each removing directions:
/// 1. reversal onto the neck
/// 2. stepping off a board edge
/// 3. stepping onto a body segment at index 3 or later
/// 4. stepping onto a hazard (`rules.avoid_hazards`)
/// 5. stepping onto another snake's body (`rules.avoid_other_snakes`)
pub fn safe_directions(you: &Battlesnake, board: &Board, rules: &SafetyConfig) -> Vec<Direction> {
    let head = match you.body.first() {
        Some(head) => *head,
        None => return Vec::new(),
    };

    let mut candidates: Vec<Direction> = Direction::all().to_vec();

    if let Some(reverse) = you.body.get(1).and_then(|neck| reverse_direction(&head, neck)) {
        debug!("Excluding {} (reversal onto neck)", reverse);
        candidates.retain(|&dir| dir != reverse);
    }

    candidates.retain(|&dir| {
        let at_edge = match dir {
            Direction::Left => head.x == 0,
            Direction::Right => head.x == board.width - 1,
            Direction::Down => head.y == 0,
            Direction::Up => head.y == board.height - 1,
        };
        if at_edge {
            debug!("Excluding {} (board edge)", dir);
        }
        !at_edge
    });

    let fixed_segments = you.body.get(FIXED_SEGMENT_START..).unwrap_or(&[]);
    candidates.retain(|&dir| {
        let next = dir.apply(&head);
        let hits_self = fixed_segments.contains(&next);
        if hits_self {
            debug!("Excluding {} (own body at {})", dir, next);
        }
        !hits_self
    });

    if rules.avoid_hazards {
        candidates.retain(|&dir| {
            let next = dir.apply(&head);
            let hazard = board.hazards.contains(&next);
            if hazard {
                debug!("Excluding {} (hazard at {})", dir, next);
            }
            !hazard
        });
    }

    if rules.avoid_other_snakes {
        candidates.retain(|&dir| {
            let next = dir.apply(&head);
            let blocked = board
                .snakes
                .iter()
                .filter(|snake| snake.id != you.id)
                .any(|snake| snake.body.contains(&next));
            if blocked {
                debug!("Excluding {} (another snake at {})", dir, next);
            }
            !blocked
        });
    }

    candidates
}
