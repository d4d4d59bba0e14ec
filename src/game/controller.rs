//! The game controller: the whole round state machine.
//!
//! `GameController` owns all game state and processes two commands from
//! the host (`start_game`, `select_card`) plus a clock pulse
//! (`advance`). It emits render requests through its [`Display`] and
//! schedules its own countdown tick and resolution delay through its
//! [`Scheduler`].
//!
//! ## Lifecycle
//!
//! A round runs `Active -> Resolving -> Active` until every pair is
//! matched or the countdown reaches zero, then `Ended`. `start_game`
//! doubles as restart: it atomically replaces the round and bumps the
//! round id, so tasks scheduled against the old round are recognized as
//! stale and dropped.

use smallvec::SmallVec;
use std::time::Duration;

use crate::board::Board;
use crate::core::{
    GameConfig, GameRng, PlayerId, Scoreboard, POINTS_PER_MATCH, RESOLVE_DELAY, TICK_INTERVAL,
};
use crate::display::Display;
use crate::scheduler::{Scheduler, Task, TaskHandle};

use super::round::{EndReason, RoundEnd, RoundId, RoundPhase};

/// All state for one round: replaced wholesale on every `start_game`.
struct Round {
    id: RoundId,
    board: Board,
    scores: Scoreboard,
    current_player: PlayerId,
    /// Board positions pending resolution (0, 1, or 2).
    selected: SmallVec<[usize; 2]>,
    matched_pairs: usize,
    time_remaining: u32,
    phase: RoundPhase,
}

/// The memory-matching game state machine.
///
/// Constructed and owned by the hosting application; there is no
/// ambient instance. The host drives it with commands and clock pulses:
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::GameConfig;
/// use memory_match::display::RecordingDisplay;
/// use memory_match::game::GameController;
/// use memory_match::scheduler::ManualScheduler;
///
/// let mut game = GameController::new(ManualScheduler::new(), RecordingDisplay::new(), 42);
/// game.start_game(GameConfig::new(4, 2));
///
/// game.select_card(0);
/// game.select_card(1);
/// game.advance(Duration::from_secs(1)); // resolution delay elapses
/// ```
pub struct GameController<S: Scheduler, D: Display> {
    scheduler: S,
    display: D,
    rng: GameRng,
    rounds_started: u32,
    round: Option<Round>,
    tick_handle: Option<TaskHandle>,
    resolve_handle: Option<TaskHandle>,
    last_result: Option<RoundEnd>,
}

impl<S: Scheduler, D: Display> GameController<S, D> {
    /// Create an idle controller. No round exists until `start_game`.
    ///
    /// The seed fixes the deal sequence: the same seed and commands
    /// reproduce the same boards and outcomes.
    #[must_use]
    pub fn new(scheduler: S, display: D, seed: u64) -> Self {
        Self {
            scheduler,
            display,
            rng: GameRng::new(seed),
            rounds_started: 0,
            round: None,
            tick_handle: None,
            resolve_handle: None,
            last_result: None,
        }
    }

    /// Start (or restart) a round.
    ///
    /// Cancels anything scheduled for the previous round, deals a fresh
    /// shuffled board, zeroes the scores, resets the countdown, and
    /// schedules the repeating tick. Renders the full board, timer,
    /// scoreboard, and current player.
    pub fn start_game(&mut self, config: GameConfig) {
        self.cancel_pending();
        self.last_result = None;

        self.rounds_started += 1;
        let id = RoundId::new(self.rounds_started);

        let round = self.round.insert(Round {
            id,
            board: Board::dealt(config.pair_count(), &mut self.rng),
            scores: Scoreboard::new(config.player_count),
            current_player: PlayerId::new(0),
            selected: SmallVec::new(),
            matched_pairs: 0,
            time_remaining: config.round_seconds,
            phase: RoundPhase::Active,
        });

        self.tick_handle = Some(
            self.scheduler
                .schedule_every(TICK_INTERVAL, Task::CountdownTick { round: id }),
        );

        self.display.render_board(&round.board);
        self.display.render_timer(round.time_remaining);
        self.display.render_scoreboard(&round.scores);
        self.display
            .render_current_player_score(round.current_player, 0);
    }

    /// Select the card at `index` for the current player.
    ///
    /// Silently ignored when no round is active, a resolution is
    /// pending, the index is off the board, or the card is already
    /// face-up or matched. Otherwise reveals the card; the second
    /// selection schedules resolution after the reveal delay.
    pub fn select_card(&mut self, index: usize) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.phase != RoundPhase::Active || round.selected.len() >= 2 {
            return;
        }
        let Some(card) = round.board.card(index) else {
            return;
        };
        if card.revealed || card.matched {
            return;
        }

        round.board.reveal(index);
        round.selected.push(index);
        self.display.render_card(index, true);

        if round.selected.len() == 2 {
            round.phase = RoundPhase::Resolving;
            self.resolve_handle = Some(self.scheduler.schedule_after(
                RESOLVE_DELAY,
                Task::ResolveSelection { round: round.id },
            ));
        }
    }

    /// Report elapsed time: drains due tasks from the scheduler and
    /// runs each in firing order.
    pub fn advance(&mut self, elapsed: Duration) {
        for task in self.scheduler.advance(elapsed) {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::CountdownTick { round } => self.on_tick(round),
            Task::ResolveSelection { round } => self.resolve_selection(round),
        }
    }

    /// One countdown second. Stale-round and ended-round ticks are
    /// dropped; the timer keeps running while a resolution is pending.
    fn on_tick(&mut self, round_id: RoundId) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.id != round_id || round.phase == RoundPhase::Ended {
            return;
        }

        round.time_remaining = round.time_remaining.saturating_sub(1);
        let remaining = round.time_remaining;
        self.display.render_timer(remaining);

        if remaining == 0 {
            self.end_round(EndReason::TimeExpired);
        }
    }

    /// Resolve the two pending selections after the reveal delay.
    fn resolve_selection(&mut self, round_id: RoundId) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.id != round_id || round.phase != RoundPhase::Resolving {
            return;
        }
        self.resolve_handle = None;

        // Resolving implies exactly two pending selections.
        let (first, second) = (round.selected[0], round.selected[1]);
        round.selected.clear();
        round.phase = RoundPhase::Active;

        let complete = if round.board.symbol_at(first) == round.board.symbol_at(second) {
            round.board.set_matched(first);
            round.board.set_matched(second);
            round.matched_pairs += 1;
            round.scores.award(round.current_player, POINTS_PER_MATCH);

            self.display.render_current_player_score(
                round.current_player,
                round.scores.get(round.current_player),
            );
            self.display.render_scoreboard(&round.scores);

            round.matched_pairs == round.board.pair_count()
        } else {
            round.board.conceal(first);
            round.board.conceal(second);
            round.current_player = round.current_player.next(round.scores.player_count());

            self.display.render_card(first, false);
            self.display.render_card(second, false);
            self.display.render_current_player_score(
                round.current_player,
                round.scores.get(round.current_player),
            );

            false
        };

        if complete {
            self.end_round(EndReason::AllPairsMatched);
        }
    }

    /// Terminate the round: stop the clock, resolve the winner, report.
    fn end_round(&mut self, reason: EndReason) {
        self.cancel_pending();

        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.phase = RoundPhase::Ended;

        let (winner, score) = round.scores.leader();
        self.last_result = Some(RoundEnd {
            winner,
            score,
            reason,
        });
        self.display.announce_winner(winner, score);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.resolve_handle.take() {
            self.scheduler.cancel(handle);
        }
    }

    // === Accessors ===

    /// Current phase; `Idle` before the first `start_game`.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round.as_ref().map_or(RoundPhase::Idle, |r| r.phase)
    }

    /// The current board, if a round exists.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.round.as_ref().map(|r| &r.board)
    }

    /// The current scoreboard, if a round exists.
    #[must_use]
    pub fn scores(&self) -> Option<&Scoreboard> {
        self.round.as_ref().map(|r| &r.scores)
    }

    /// A player's score; 0 when idle.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.round.as_ref().map_or(0, |r| r.scores.get(player))
    }

    /// Whose turn it is, if a round exists.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.round.as_ref().map(|r| r.current_player)
    }

    /// Pairs matched so far this round.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.matched_pairs)
    }

    /// Countdown seconds remaining.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.time_remaining)
    }

    /// Number of selections pending resolution (0, 1, or 2).
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.selected.len())
    }

    /// The outcome of the finished round, if one has ended since the
    /// last `start_game`.
    #[must_use]
    pub fn last_result(&self) -> Option<RoundEnd> {
        self.last_result
    }

    /// The display collaborator (tests inspect recorded events here).
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display collaborator.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::scheduler::ManualScheduler;

    fn controller(seed: u64) -> GameController<ManualScheduler, RecordingDisplay> {
        GameController::new(ManualScheduler::new(), RecordingDisplay::new(), seed)
    }

    #[test]
    fn test_starts_idle() {
        let game = controller(42);

        assert_eq!(game.phase(), RoundPhase::Idle);
        assert!(game.board().is_none());
        assert!(game.current_player().is_none());
        assert_eq!(game.time_remaining(), 0);
    }

    #[test]
    fn test_start_game_activates_round() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(16, 3));

        assert_eq!(game.phase(), RoundPhase::Active);
        assert_eq!(game.board().unwrap().len(), 16);
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
        assert_eq!(game.time_remaining(), 60);
        assert_eq!(game.matched_pairs(), 0);
        assert_eq!(game.scores().unwrap().player_count(), 3);
    }

    #[test]
    fn test_select_ignored_when_idle() {
        let mut game = controller(42);

        game.select_card(0);
        assert_eq!(game.selected_count(), 0);
    }

    #[test]
    fn test_select_reveals_card() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));

        game.select_card(2);

        assert_eq!(game.selected_count(), 1);
        assert!(game.board().unwrap().card(2).unwrap().revealed);
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn test_reselecting_revealed_card_ignored() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));

        game.select_card(2);
        game.select_card(2);

        assert_eq!(game.selected_count(), 1);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));

        game.select_card(99);
        assert_eq!(game.selected_count(), 0);
    }

    #[test]
    fn test_second_selection_enters_resolving() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));

        game.select_card(0);
        game.select_card(1);

        assert_eq!(game.phase(), RoundPhase::Resolving);
        assert_eq!(game.selected_count(), 2);

        // Third selection rejected while resolving
        game.select_card(3);
        assert_eq!(game.selected_count(), 2);
        assert!(!game.board().unwrap().card(3).unwrap().revealed);
    }

    #[test]
    fn test_tick_decrements_timer() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));

        game.advance(Duration::from_secs(3));
        assert_eq!(game.time_remaining(), 57);
        assert_eq!(game.phase(), RoundPhase::Active);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = controller(42);
        game.start_game(GameConfig::new(4, 2));
        game.advance(Duration::from_secs(10));
        game.select_card(0);

        game.start_game(GameConfig::new(16, 4));

        assert_eq!(game.phase(), RoundPhase::Active);
        assert_eq!(game.time_remaining(), 60);
        assert_eq!(game.selected_count(), 0);
        assert_eq!(game.board().unwrap().len(), 16);
        assert!(game.last_result().is_none());
    }
}
