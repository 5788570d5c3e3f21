//! Randomized playouts checking the game invariants after every step.

use misere_core::{Cell, GameState, Grid, GridId, Mark, MoveRecord, Outcome, LINES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 200;

/// Moves the game would currently accept.
fn legal_moves(game: &GameState) -> Vec<MoveRecord> {
    GridId::ALL
        .into_iter()
        .filter(|&id| game.grid(id).evaluate().is_none())
        .flat_map(|id| {
            Cell::all()
                .filter(move |&cell| game.grid(id).is_empty(cell))
                .map(move |cell| MoveRecord::new(id, cell))
        })
        .collect()
}

fn random_move(rng: &mut StdRng, game: &GameState) -> Option<MoveRecord> {
    let moves = legal_moves(game);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.random_range(0..moves.len())])
    }
}

fn check_invariants(game: &GameState) {
    let filled: usize = game.boards().iter().map(Grid::filled).sum();
    assert_eq!(filled, game.history().len());
    assert_eq!(game.step(), game.history().len());

    let expected_turn = if game.step() % 2 == 0 { Mark::First } else { Mark::Second };
    assert_eq!(game.turn(), expected_turn);

    // Every recorded move is still on the board with the mark of its parity.
    for (i, record) in game.history().iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::First } else { Mark::Second };
        assert_eq!(game.grid(record.grid).get(record.cell), Some(mark));
    }
}

/// Brute-force reference for the line check.
fn reference_line(grid: &Grid) -> Option<(Mark, [Cell; 3])> {
    LINES.iter().find_map(|&line| {
        let marks = line.map(|c| grid.get(c));
        match marks {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some((a, line)),
            _ => None,
        }
    })
}

#[test]
fn test_random_playouts_keep_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        check_invariants(&game);

        while let Some(record) = random_move(&mut rng, &game) {
            assert_eq!(game.current_outcome(), Outcome::InProgress);
            assert!(game.apply_move(record.grid, record.cell));
            assert_eq!(game.latest_move(), Some(record));
            check_invariants(&game);
        }

        // No legal move left means every grid is complete.
        assert!(GridId::ALL.into_iter().all(|id| game.is_grid_decided(id)));
        let outcome = game.current_outcome();
        assert!(outcome.is_decided(), "seed {seed}");

        let latest = game.latest_grid().unwrap();
        match (outcome, game.grid_line(latest)) {
            (Outcome::Loser { mark, line }, Some(result)) => {
                assert_eq!((mark, line), (result.mark, result.line));
            }
            (Outcome::Tie, None) => {}
            other => panic!("seed {seed}: inconsistent outcome {other:?}"),
        }
    }
}

#[test]
fn test_evaluate_matches_reference() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        while let Some(record) = random_move(&mut rng, &game) {
            game.apply_move(record.grid, record.cell);
            for grid in game.boards() {
                let expected = reference_line(grid);
                assert_eq!(grid.evaluate().map(|r| (r.mark, r.line)), expected);
                assert_eq!(grid.is_complete(), expected.is_some() || grid.is_full());
            }
        }
    }
}

#[test]
fn test_apply_then_undo_is_identity() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        while let Some(record) = random_move(&mut rng, &game) {
            let before = game.clone();
            assert!(game.apply_move(record.grid, record.cell));
            assert_eq!(game.undo(), Some(record));
            assert_eq!(game, before);
            game.apply_move(record.grid, record.cell);
        }
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        while let Some(record) = random_move(&mut rng, &game) {
            game.apply_move(record.grid, record.cell);

            let legal = legal_moves(&game);
            let before = game.clone();
            for grid in GridId::ALL {
                for cell in Cell::all().chain([Cell(9), Cell(u8::MAX)]) {
                    let candidate = MoveRecord::new(grid, cell);
                    if !legal.contains(&candidate) {
                        assert!(!game.apply_move(grid, cell));
                        assert_eq!(game, before);
                    }
                }
            }
        }
    }
}

#[test]
fn test_undo_everything_returns_to_start() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        let mut played = Vec::new();
        while let Some(record) = random_move(&mut rng, &game) {
            game.apply_move(record.grid, record.cell);
            played.push(record);
        }

        assert_eq!(GameState::replay(&played).as_ref(), Ok(&game));

        while let Some(record) = game.undo() {
            assert_eq!(Some(record), played.pop());
            check_invariants(&game);
        }
        assert!(played.is_empty());
        assert_eq!(game, GameState::new());
    }
}
