//! Session state for the Freedom GUI
//!
//! Player One is the human at the mouse, Player Two is the engine. The engine
//! runs on a worker thread and reports back over a channel so the window keeps
//! repainting while it thinks.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Difficulty, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::error::MoveError;
use crate::game::{GameState, GameStatus, Outcome};
use crate::rules::has_freedom;

/// Hints search shallower than the opponent so they come back quickly
const HINT_DEPTH: u8 = 4;

/// What a running search is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// The computer's own move
    Reply,
    /// A suggestion for the human
    Hint,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        kind: SearchKind,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game in the window, plus the history needed to take moves back
pub struct GameSession {
    pub state: GameState,
    /// States before each placement, oldest first
    history: Vec<GameState>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    depth: u8,
    parallel: bool,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, depth: u8, parallel: bool) -> Self {
        Self {
            state: GameState::new(difficulty),
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            depth: depth.max(1),
            parallel,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Start over, optionally on another board size
    pub fn reset(&mut self, difficulty: Difficulty) {
        tracing::debug!(%difficulty, "new game");
        *self = Self::new(difficulty, self.depth, self.parallel);
    }

    /// Final result once the board is full
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state.status() {
            GameStatus::Complete(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_complete()
    }

    pub fn is_human_turn(&self) -> bool {
        self.state.current == Player::One
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state.current == Player::Two
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// True when the last stone is boxed in and any empty cell may be used
    pub fn has_freedom(&self) -> bool {
        match self.state.adjacency_anchor() {
            Some(last) => !self.is_game_over() && has_freedom(&self.state.board, last),
            None => false,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            // Clicks while the engine is busy are ignored
            return Ok(());
        }

        let next = self.state.play_at(pos.row as usize, pos.col as usize)?;
        self.execute(next);
        Ok(())
    }

    /// Commit a state produced by either side
    fn execute(&mut self, next: GameState) {
        self.history.push(self.state);
        self.state = next;
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();
        if !self.is_game_over() {
            self.move_timer.start();
        } else if let Some(outcome) = self.outcome() {
            tracing::info!(
                one = outcome.scores.one,
                two = outcome.scores.two,
                winner = ?outcome.winner,
                "game complete"
            );
        }
    }

    /// Hand the current position to the engine on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        self.spawn_search(SearchKind::Reply, self.depth);
    }

    fn spawn_search(&mut self, kind: SearchKind, depth: u8) {
        let state = self.state;
        let parallel = self.parallel;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(depth, parallel);
            let result = engine.get_move_with_stats(&state);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            kind,
        };
    }

    /// Apply the engine's move, or show its hint, once it arrives
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                kind,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed(), *kind)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("engine thread exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((move_result, elapsed, kind)) = result else {
            return;
        };

        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(move_result.clone());

        if kind == SearchKind::Hint {
            self.suggested_move = move_result.best_move;
            return;
        }
        self.move_timer.set_ai_time(elapsed);

        let Some(pos) = move_result.best_move else {
            self.message = Some("AI could not find a move".to_string());
            return;
        };

        match self.state.place(pos) {
            Ok(next) => self.execute(next),
            Err(err) => {
                tracing::warn!(%err, "engine returned an unplayable move");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine, on the worker thread, what it would play in the
    /// human's place. The answer lands in `suggested_move`.
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }
        self.spawn_search(SearchKind::Hint, HINT_DEPTH.min(self.depth));
    }

    /// Take back the last human move together with the engine's reply
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = if self.is_human_turn() && self.history.len() >= 2 { 2 } else { 1 };
        let keep = self.history.len() - undo_count;
        self.state = self.history[keep];
        self.history.truncate(keep);

        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
        tracing::debug!(move_count = self.state.move_count, "undo");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(Difficulty::Beginner, 2, false)
    }

    fn wait_for_engine(s: &mut GameSession) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while s.is_ai_thinking() && Instant::now() < deadline {
            s.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_human_move_passes_turn() {
        let mut s = session();
        s.try_place_stone(Pos::new(2, 2)).unwrap();
        assert!(s.is_ai_turn());
        assert_eq!(s.moves_played(), 1);
        assert_eq!(s.state.last_placed, Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut s = session();
        s.try_place_stone(Pos::new(2, 2)).unwrap();

        // Simulate the engine's reply without the worker thread
        let reply = s.state.place(Pos::new(2, 3)).unwrap();
        s.execute(reply);

        let before = s.state;
        let err = s.try_place_stone(Pos::new(5, 5)).unwrap_err();
        assert!(matches!(err, MoveError::NotAdjacent { .. }));
        assert_eq!(s.state, before);
    }

    #[test]
    fn test_clicks_ignored_on_ai_turn() {
        let mut s = session();
        s.try_place_stone(Pos::new(0, 0)).unwrap();
        let before = s.state;
        assert!(s.try_place_stone(Pos::new(0, 1)).is_ok());
        assert_eq!(s.state, before);
    }

    #[test]
    fn test_undo_restores_human_turn() {
        let mut s = session();
        s.try_place_stone(Pos::new(2, 2)).unwrap();
        let reply = s.state.place(Pos::new(2, 3)).unwrap();
        s.execute(reply);
        assert!(s.is_human_turn());

        s.undo();
        assert_eq!(s.state, GameState::new(Difficulty::Beginner));
        assert_eq!(s.moves_played(), 0);

        // Nothing left to undo
        s.undo();
        assert_eq!(s.moves_played(), 0);
    }

    #[test]
    fn test_undo_single_move_on_ai_turn() {
        let mut s = session();
        s.try_place_stone(Pos::new(1, 1)).unwrap();
        s.undo();
        assert!(s.is_human_turn());
        assert_eq!(s.state.move_count, 0);
    }

    #[test]
    fn test_ai_thread_answers() {
        let mut s = session();
        s.try_place_stone(Pos::new(3, 3)).unwrap();
        s.start_ai_thinking();
        assert!(s.is_ai_thinking());

        wait_for_engine(&mut s);

        assert!(s.is_human_turn());
        assert_eq!(s.state.move_count, 2);
        assert!(s.last_ai_result.is_some());
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut s = session();
        s.try_place_stone(Pos::new(2, 2)).unwrap();
        let reply = s.state.place(Pos::new(1, 2)).unwrap();
        s.execute(reply);

        let before = s.state;
        s.request_suggestion();
        assert!(s.is_ai_thinking());
        wait_for_engine(&mut s);

        // The hint is shown, not played
        let hint = s.suggested_move.unwrap();
        assert!(s.state.legal_targets().contains(&hint));
        assert_eq!(s.state, before);
        assert!(s.is_human_turn());
        assert_eq!(s.last_ai_result.as_ref().map(|r| r.depth), Some(2));
    }

    #[test]
    fn test_reset_changes_board_size() {
        let mut s = session();
        s.try_place_stone(Pos::new(0, 0)).unwrap();
        s.reset(Difficulty::Experienced);
        assert_eq!(s.state.board.size(), 10);
        assert_eq!(s.moves_played(), 0);
        assert_eq!(s.depth(), 2);
    }

    #[test]
    fn test_freedom_flag() {
        let mut s = session();
        // Box in the corner: (0,0) then (0,1), (1,0) around it
        s.state = GameState::new(Difficulty::Beginner)
            .place(Pos::new(0, 1))
            .and_then(|st| st.place(Pos::new(1, 0)))
            .and_then(|st| st.place(Pos::new(0, 0)))
            .unwrap();
        assert!(s.has_freedom());
        assert!(!session().has_freedom());
    }
}
