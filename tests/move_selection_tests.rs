//! Move Selection Scenario Tests
//!
//! End-to-end checks from a raw /move request body down to the chosen direction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use survivor_snake::config::SafetyConfig;
use survivor_snake::safety::safe_directions;
use survivor_snake::selector::{select_move, DecisionKind};
use survivor_snake::types::{Direction, GameState};

/// Builds a /move request with `you` as the only snake plus any extra snakes
fn request(
    width: i32,
    height: i32,
    you: &[(i32, i32)],
    others: &[&[(i32, i32)]],
    hazards: &[(i32, i32)],
) -> GameState {
    let coords = |cells: &[(i32, i32)]| {
        cells
            .iter()
            .map(|&(x, y)| json!({"x": x, "y": y}))
            .collect::<Vec<_>>()
    };
    let you_json = json!({"id": "you", "name": "you", "health": 90, "body": coords(you)});
    let mut snakes = vec![you_json.clone()];
    for (i, body) in others.iter().enumerate() {
        snakes.push(json!({"id": format!("other-{}", i), "body": coords(body)}));
    }

    serde_json::from_value(json!({
        "game": {"id": "scenario", "ruleset": {"name": "standard"}, "timeout": 500},
        "turn": 10,
        "board": {
            "width": width,
            "height": height,
            "food": [],
            "hazards": coords(hazards),
            "snakes": snakes
        },
        "you": you_json
    }))
    .expect("scenario request should deserialize")
}

#[test]
fn test_open_board_center_chooses_among_three() {
    let state = request(11, 11, &[(5, 5), (5, 4), (5, 3)], &[], &[]);
    let pool = safe_directions(&state.you, &state.board, &SafetyConfig::default());
    assert_eq!(pool, vec![Direction::Up, Direction::Left, Direction::Right]);

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = select_move(
            &state.board,
            &state.you,
            state.turn,
            &SafetyConfig::default(),
            &mut rng,
        );
        assert_eq!(decision.kind, DecisionKind::Roomy);
        assert!(decision.candidates.iter().all(|c| c.score >= 2));
        assert!(pool.contains(&decision.direction));
    }
}

#[test]
fn test_left_edge_body_rightward_allows_only_vertical() {
    let state = request(11, 11, &[(0, 5), (1, 5), (2, 5)], &[], &[]);
    let pool = safe_directions(&state.you, &state.board, &SafetyConfig::default());
    assert_eq!(pool, vec![Direction::Up, Direction::Down]);

    let mut rng = StdRng::seed_from_u64(21);
    let decision = select_move(
        &state.board,
        &state.you,
        state.turn,
        &SafetyConfig::default(),
        &mut rng,
    );
    assert!(pool.contains(&decision.direction));
}

#[test]
fn test_boxed_in_by_hazards_returns_down() {
    let state = request(
        11,
        11,
        &[(5, 5), (5, 4), (5, 3)],
        &[],
        &[(5, 6), (5, 4), (4, 5), (6, 5)],
    );
    let mut rng = StdRng::seed_from_u64(0);
    let decision = select_move(
        &state.board,
        &state.you,
        state.turn,
        &SafetyConfig::default(),
        &mut rng,
    );
    assert_eq!(decision.kind, DecisionKind::NoSafeMoves);
    assert_eq!(decision.direction, Direction::Down);
}

#[test]
fn test_edges_never_chosen() {
    // Head on each edge with the body trailing inward
    let cases: [(&[(i32, i32)], Direction); 4] = [
        (&[(0, 5), (1, 5), (2, 5)], Direction::Left),
        (&[(10, 5), (9, 5), (8, 5)], Direction::Right),
        (&[(5, 0), (5, 1), (5, 2)], Direction::Down),
        (&[(5, 10), (5, 9), (5, 8)], Direction::Up),
    ];
    for (body, forbidden) in cases {
        let state = request(11, 11, body, &[], &[]);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let decision = select_move(
                &state.board,
                &state.you,
                state.turn,
                &SafetyConfig::default(),
                &mut rng,
            );
            assert_ne!(decision.direction, forbidden, "body {:?}", body);
        }
    }
}

#[test]
fn test_opponent_body_steers_away_from_dead_end() {
    // An opponent walls off the right side into a two-cell pocket; left is open
    let state = request(
        11,
        11,
        &[(5, 5), (5, 4), (5, 3), (5, 2), (5, 1)],
        &[&[(7, 6), (6, 6), (6, 7), (7, 7), (8, 7), (8, 6), (8, 5), (8, 4), (7, 4), (6, 4)]],
        &[],
    );
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = select_move(
            &state.board,
            &state.you,
            state.turn,
            &SafetyConfig::default(),
            &mut rng,
        );
        assert_eq!(decision.kind, DecisionKind::Roomy);
        assert_ne!(decision.direction, Direction::Right);
    }
}

#[test]
fn test_other_snake_rule_hardens_filter() {
    let state = request(
        11,
        11,
        &[(5, 5), (5, 4), (5, 3)],
        &[&[(6, 5), (7, 5), (8, 5)]],
        &[],
    );
    let default_pool = safe_directions(&state.you, &state.board, &SafetyConfig::default());
    assert!(default_pool.contains(&Direction::Right));

    let hardened = SafetyConfig {
        avoid_hazards: true,
        avoid_other_snakes: true,
    };
    let pool = safe_directions(&state.you, &state.board, &hardened);
    assert_eq!(pool, vec![Direction::Up, Direction::Left]);
}
