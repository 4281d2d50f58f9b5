// Battlesnake API Types
// See https://docs.battlesnake.com/api

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Game metadata including ID, ruleset, and timeout
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub ruleset: HashMap<String, Value>,
    #[serde(default)]
    pub timeout: u32,
}

/// Board state including dimensions, food, snakes, and hazards
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    #[serde(default)]
    pub food: Vec<Coord>,
    pub snakes: Vec<Battlesnake>,
    #[serde(default)]
    pub hazards: Vec<Coord>,
}

impl Board {
    /// True if the coordinate lies inside `[0, width) x [0, height)`
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width.max(0) as usize));
        write!(f, "\n{}", border)?;
        for y in (0..self.height).rev() {
            write!(f, "\n|")?;
            for x in 0..self.width {
                let coord = Coord { x, y };
                let piece = if let Some(snake) =
                    self.snakes.iter().find(|s| s.body.contains(&coord))
                {
                    if snake.body.first() == Some(&coord) {
                        'h'
                    } else {
                        's'
                    }
                } else if self.hazards.contains(&coord) {
                    'x'
                } else if self.food.contains(&coord) {
                    'f'
                } else {
                    ' '
                };
                write!(f, "{}", piece)?;
            }
            write!(f, "|")?;
        }
        write!(f, "\n{}", border)
    }
}

/// Snake representation with all state information
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Battlesnake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: i32,
    pub body: Vec<Coord>,
    #[serde(default)]
    pub head: Coord,
    #[serde(default)]
    pub length: i32,
    #[serde(default)]
    pub latency: String,
    #[serde(default)]
    pub shout: Option<String>,
}

impl Battlesnake {
    /// Builds a snake from its body alone, head first
    pub fn from_body(id: &str, body: Vec<Coord>) -> Self {
        Battlesnake {
            id: id.to_string(),
            name: id.to_string(),
            health: 100,
            head: body.first().copied().unwrap_or_default(),
            length: body.len() as i32,
            body,
            latency: "0".to_string(),
            shout: None,
        }
    }
}

/// 2D coordinate on the board, origin at the bottom-left corner
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The axis a direction moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions in candidate order
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Directions ordered by their reachability memo slot
    pub const SLOT_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::Up => Coord { x: coord.x, y: coord.y + 1 },
            Direction::Down => Coord { x: coord.x, y: coord.y - 1 },
            Direction::Left => Coord { x: coord.x - 1, y: coord.y },
            Direction::Right => Coord { x: coord.x + 1, y: coord.y },
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Index of this direction inside a reachability memo entry
    pub fn slot(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }

    /// Legal follow-up directions after taking this one: everything except its reverse,
    /// in memo slot order
    pub fn non_opposite(&self) -> [Direction; 3] {
        let mut follow_ups = [*self; 3];
        let mut len = 0;
        for dir in Direction::SLOT_ORDER {
            if dir == *self || dir.axis() != self.axis() {
                follow_ups[len] = dir;
                len += 1;
            }
        }
        follow_ups
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

/// Complete game state received from the API
#[derive(Deserialize, Serialize, Debug)]
pub struct GameState {
    #[serde(default)]
    pub game: Game,
    pub turn: i32,
    pub board: Board,
    pub you: Battlesnake,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_moves_one_cell() {
        let c = Coord::new(3, 3);
        assert_eq!(Direction::Up.apply(&c), Coord::new(3, 4));
        assert_eq!(Direction::Down.apply(&c), Coord::new(3, 2));
        assert_eq!(Direction::Left.apply(&c), Coord::new(2, 3));
        assert_eq!(Direction::Right.apply(&c), Coord::new(4, 3));
    }

    #[test]
    fn test_non_opposite_excludes_only_reverse() {
        for dir in Direction::all() {
            let follow_ups = dir.non_opposite();
            assert!(follow_ups.contains(&dir));
            assert!(!follow_ups.contains(&dir.opposite()));
        }
        assert_eq!(
            Direction::Up.non_opposite(),
            [Direction::Up, Direction::Left, Direction::Right]
        );
        assert_eq!(
            Direction::Right.non_opposite(),
            [Direction::Up, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_slots_follow_slot_order() {
        for (i, dir) in Direction::SLOT_ORDER.iter().enumerate() {
            assert_eq!(dir.slot(), i);
        }
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn test_minimal_snapshot_parses() {
        let raw = r#"{
            "turn": 4,
            "board": {
                "width": 11,
                "height": 11,
                "food": [],
                "hazards": [],
                "snakes": [{"id": "me", "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}]}]
            },
            "you": {"id": "me", "body": [{"x": 5, "y": 5}, {"x": 5, "y": 4}]}
        }"#;
        let state: GameState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.turn, 4);
        assert_eq!(state.you.body[1], Coord::new(5, 4));
        assert!(state.board.in_bounds(&Coord::new(10, 10)));
        assert!(!state.board.in_bounds(&Coord::new(11, 0)));
    }

    #[test]
    fn test_board_renders_grid() {
        let board = Board {
            width: 3,
            height: 2,
            food: vec![Coord::new(2, 1)],
            hazards: vec![Coord::new(0, 0)],
            snakes: vec![Battlesnake::from_body(
                "me",
                vec![Coord::new(1, 1), Coord::new(1, 0)],
            )],
        };
        assert_eq!(board.to_string(), "\n+---+\n| hf|\n|xs |\n+---+");
    }
}
