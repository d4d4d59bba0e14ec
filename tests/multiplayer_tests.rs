//! N-player behavior: turn rotation, scoring across players, and
//! winner resolution.

use std::time::Duration;

use memory_match::board::Board;
use memory_match::core::GameConfig;
use memory_match::display::RecordingDisplay;
use memory_match::game::{EndReason, GameController, RoundPhase};
use memory_match::scheduler::ManualScheduler;
use memory_match::PlayerId;

fn new_game(seed: u64) -> GameController<ManualScheduler, RecordingDisplay> {
    GameController::new(ManualScheduler::new(), RecordingDisplay::new(), seed)
}

fn live_positions(board: &Board) -> Vec<usize> {
    (0..board.len())
        .filter(|&i| {
            let card = board.card(i).unwrap();
            !card.matched && !card.revealed
        })
        .collect()
}

fn live_pair(board: &Board) -> (usize, usize) {
    let live = live_positions(board);
    for (slot, &a) in live.iter().enumerate() {
        for &b in &live[slot + 1..] {
            if board.symbol_at(a) == board.symbol_at(b) {
                return (a, b);
            }
        }
    }
    panic!("no live pair on the board");
}

fn live_mismatch(board: &Board) -> (usize, usize) {
    let live = live_positions(board);
    for (slot, &a) in live.iter().enumerate() {
        for &b in &live[slot + 1..] {
            if board.symbol_at(a) != board.symbol_at(b) {
                return (a, b);
            }
        }
    }
    panic!("no live mismatch on the board");
}

fn play_pair(game: &mut GameController<ManualScheduler, RecordingDisplay>) {
    let (a, b) = live_pair(game.board().unwrap());
    game.select_card(a);
    game.select_card(b);
    game.advance(Duration::from_secs(1));
}

fn play_mismatch(game: &mut GameController<ManualScheduler, RecordingDisplay>) {
    let (a, b) = live_mismatch(game.board().unwrap());
    game.select_card(a);
    game.select_card(b);
    game.advance(Duration::from_secs(1));
}

#[test]
fn test_mismatches_cycle_through_all_players() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(36, 3));

    assert_eq!(game.current_player(), Some(PlayerId::new(0)));

    play_mismatch(&mut game);
    assert_eq!(game.current_player(), Some(PlayerId::new(1)));

    play_mismatch(&mut game);
    assert_eq!(game.current_player(), Some(PlayerId::new(2)));

    play_mismatch(&mut game);
    assert_eq!(game.current_player(), Some(PlayerId::new(0)));
}

#[test]
fn test_match_never_advances_turn() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(36, 4));

    for _ in 0..3 {
        play_pair(&mut game);
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
    }
    assert_eq!(game.score(PlayerId::new(0)), 30);
}

#[test]
fn test_single_player_mismatch_keeps_turn() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(16, 1));

    play_mismatch(&mut game);
    assert_eq!(game.current_player(), Some(PlayerId::new(0)));
}

#[test]
fn test_single_player_clears_board_and_wins() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(4, 1));

    play_pair(&mut game);
    play_pair(&mut game);

    let result = game.last_result().unwrap();
    assert_eq!(result.reason, EndReason::AllPairsMatched);
    assert_eq!(result.winner, PlayerId::new(0));
    assert_eq!(result.score, 20);
}

#[test]
fn test_scores_accumulate_per_player() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(36, 3));

    // Player 0 takes a pair, then hands the turn over, player 1 takes
    // two, then hands over to player 2.
    play_pair(&mut game);
    play_mismatch(&mut game);
    play_pair(&mut game);
    play_pair(&mut game);
    play_mismatch(&mut game);

    assert_eq!(game.score(PlayerId::new(0)), 10);
    assert_eq!(game.score(PlayerId::new(1)), 20);
    assert_eq!(game.score(PlayerId::new(2)), 0);
    assert_eq!(game.current_player(), Some(PlayerId::new(2)));
}

#[test]
fn test_winner_is_highest_scorer() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(36, 3).with_round_seconds(120));

    play_mismatch(&mut game); // turn to player 1
    play_pair(&mut game);
    play_pair(&mut game); // player 1 at 20

    game.advance(Duration::from_secs(120));

    let result = game.last_result().unwrap();
    assert_eq!(result.reason, EndReason::TimeExpired);
    assert_eq!(result.winner, PlayerId::new(1));
    assert_eq!(result.score, 20);
}

#[test]
fn test_tied_winners_resolve_to_lowest_player() {
    let mut game = new_game(42);
    game.start_game(GameConfig::new(36, 3).with_round_seconds(120));

    // Players 0 and 1 finish tied, player 2 scores nothing.
    play_pair(&mut game);
    play_mismatch(&mut game); // turn to player 1
    play_pair(&mut game);
    play_mismatch(&mut game); // turn to player 2

    game.advance(Duration::from_secs(120));

    assert_eq!(game.score(PlayerId::new(0)), 10);
    assert_eq!(game.score(PlayerId::new(1)), 10);
    let result = game.last_result().unwrap();
    assert_eq!(result.winner, PlayerId::new(0));
    assert_eq!(result.score, 10);
}

#[test]
fn test_rotation_sweep_over_player_counts() {
    for player_count in 1..=6usize {
        let mut game = new_game(7);
        game.start_game(GameConfig::new(36, player_count).with_round_seconds(600));

        // One full lap of mismatches returns the turn to player 0.
        for step in 0..player_count {
            assert_eq!(
                game.current_player(),
                Some(PlayerId::new(step as u8)),
                "{}-player game, step {}",
                player_count,
                step
            );
            play_mismatch(&mut game);
        }
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
        assert_eq!(game.phase(), RoundPhase::Active);
    }
}
