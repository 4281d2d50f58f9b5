// Collision checks shared by the safety filter and the reachability search

use crate::types::{Board, Coord};

/// Returns true if occupying `coord` this turn would kill the snake.
///
/// A cell is lethal when it is off the board, a hazard, or holds any segment of any
/// snake. Tails count as occupied even though they vacate next turn.
pub fn is_lethal(coord: &Coord, board: &Board) -> bool {
    !board.in_bounds(coord)
        || board.hazards.contains(coord)
        || board.snakes.iter().any(|snake| snake.body.contains(coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Battlesnake;

    fn board() -> Board {
        Board {
            width: 7,
            height: 5,
            food: vec![Coord::new(1, 1)],
            hazards: vec![Coord::new(6, 4)],
            snakes: vec![
                Battlesnake::from_body(
                    "me",
                    vec![Coord::new(3, 2), Coord::new(3, 1), Coord::new(3, 0)],
                ),
                Battlesnake::from_body("them", vec![Coord::new(0, 4), Coord::new(1, 4)]),
            ],
        }
    }

    #[test]
    fn test_out_of_bounds_is_lethal() {
        let board = board();
        for coord in [
            Coord::new(-1, 2),
            Coord::new(7, 2),
            Coord::new(3, -1),
            Coord::new(3, 5),
            Coord::new(-4, 9),
        ] {
            assert!(is_lethal(&coord, &board), "{} should be lethal", coord);
        }
    }

    #[test]
    fn test_hazard_and_bodies_are_lethal() {
        let board = board();
        assert!(is_lethal(&Coord::new(6, 4), &board));
        // Own head, own tail and another snake's tail
        assert!(is_lethal(&Coord::new(3, 2), &board));
        assert!(is_lethal(&Coord::new(3, 0), &board));
        assert!(is_lethal(&Coord::new(1, 4), &board));
    }

    #[test]
    fn test_open_cells_and_food_are_safe() {
        let board = board();
        assert!(!is_lethal(&Coord::new(1, 1), &board));
        assert!(!is_lethal(&Coord::new(5, 3), &board));
        assert!(!is_lethal(&Coord::new(0, 0), &board));
    }

    #[test]
    fn test_is_lethal_is_repeatable() {
        let board = board();
        for x in -1..=7 {
            for y in -1..=5 {
                let coord = Coord::new(x, y);
                assert_eq!(is_lethal(&coord, &board), is_lethal(&coord, &board));
            }
        }
    }
}
