//! Game state management for the Ataxx GUI

use crate::search::enumerate_moves;
use crate::{AIEngine, AtaxxResult, Board, EngineConfig, Move, MoveResult, PieceColor, Square};
use log::{info, warn};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: PieceColor },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: PieceColor::Red,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AtaxxResult<MoveResult>>,
        start_time: Instant,
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

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    /// Source square picked by the first click of a move
    pub selected: Option<Square>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    /// Clicks place blocks instead of moving (setup only)
    pub block_mode: bool,

    ai_depth: u8,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            selected: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            block_mode: false,
            ai_depth: EngineConfig::default().depth,
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.selected = None;
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        self.block_mode = false;
        info!("new game: {:?}", self.mode);
    }

    pub fn current_turn(&self) -> PieceColor {
        self.board.whose_move()
    }

    /// Winner once decided; `Some(Empty)` is a draw
    pub fn game_over(&self) -> Option<PieceColor> {
        self.board.winner()
    }

    pub fn ai_depth(&self) -> u8 {
        self.ai_depth
    }

    pub fn set_ai_depth(&mut self, depth: u8) {
        self.ai_depth = depth;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Blocks may only be placed before the first move
    pub fn can_place_blocks(&self) -> bool {
        self.board.all_moves().is_empty() && !self.is_ai_thinking()
    }

    /// Human must pass: it is their turn and no step exists
    pub fn must_pass(&self) -> bool {
        self.game_over().is_none()
            && self.is_human_turn()
            && self.board.legal_move(Move::Pass)
    }

    /// Legal destinations from `from` for the side to move
    pub fn targets(&self, from: Square) -> Vec<Square> {
        if self.board.get(from) != self.current_turn() {
            return Vec::new();
        }
        enumerate_moves(&self.board)
            .into_iter()
            .filter(|mv| mv.from() == Some(from))
            .filter_map(Move::to)
            .collect()
    }

    fn check_input_allowed(&self) -> Result<(), String> {
        if self.game_over().is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    /// Handle a click on `sq`: select a source, then a destination.
    pub fn click(&mut self, sq: Square) -> Result<(), String> {
        if self.block_mode {
            return self.try_place_block(sq);
        }
        self.check_input_allowed()?;

        let own = self.board.get(sq) == self.current_turn();
        match self.selected {
            Some(from) if from == sq => {
                self.selected = None;
                Ok(())
            }
            _ if own => {
                self.selected = Some(sq);
                Ok(())
            }
            Some(from) => {
                self.selected = None;
                self.try_move(Move::step(from, sq))
            }
            None => Err("Select one of your pieces".to_string()),
        }
    }

    /// Attempt a human move
    pub fn try_move(&mut self, mv: Move) -> Result<(), String> {
        self.check_input_allowed()?;
        if !self.board.legal_move(mv) {
            return Err(format!("Illegal move {mv}"));
        }
        self.execute_move(mv)
    }

    /// Pass for the human side when it has no move
    pub fn try_pass(&mut self) -> Result<(), String> {
        self.try_move(Move::Pass)
    }

    pub fn try_place_block(&mut self, sq: Square) -> Result<(), String> {
        if !self.can_place_blocks() {
            self.block_mode = false;
            return Err("Blocks can only be placed before the first move".to_string());
        }
        self.board.set_block(sq).map_err(|e| e.to_string())?;
        self.message = None;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), String> {
        let color = self.current_turn();
        self.board.make_move(mv).map_err(|e| e.to_string())?;

        self.last_move = Some(mv);
        self.suggested_move = None;
        self.selected = None;
        self.block_mode = false;
        self.move_timer.stop();
        self.message = None;

        if let Some(winner) = self.game_over() {
            info!(
                "game over: {} ({} red, {} blue)",
                result_text(winner),
                self.board.red_pieces(),
                self.board.blue_pieces()
            );
            return Ok(());
        }
        if mv.is_pass() {
            self.message = Some(format!("{color} passes"));
        }
        self.move_timer.start();
        Ok(())
    }

    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_depth(self.ai_depth)
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over().is_some() {
            return;
        }

        let board = Board::from_board(&self.board);
        let config = self.engine_config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = AIEngine::with_config(config).and_then(|mut engine| engine.find_move(&board));
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((search, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match search {
                Ok(move_result) => {
                    self.last_ai_result = Some(move_result);
                    if let Err(e) = self.execute_move(move_result.best_move) {
                        warn!("AI move rejected: {e}");
                        self.message = Some(e);
                    }
                }
                Err(e) => {
                    warn!("AI search failed: {e}");
                    self.message = Some(format!("AI error: {e}"));
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over().is_some() || self.is_ai_thinking() {
            return;
        }

        let found = AIEngine::with_config(self.engine_config().with_depth(self.ai_depth.min(3)))
            .and_then(|mut engine| engine.find_move(&self.board));
        match found {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Undo last move. In PvE, AI replies are undone too so the human is
    /// back on move.
    pub fn undo(&mut self) {
        if self.board.all_moves().is_empty() || self.is_ai_thinking() {
            return;
        }

        if let Err(e) = self.board.undo() {
            self.message = Some(e.to_string());
            return;
        }
        while self.is_ai_turn() && !self.board.all_moves().is_empty() {
            if let Err(e) = self.board.undo() {
                self.message = Some(e.to_string());
                break;
            }
        }

        self.last_move = self.board.all_moves().last().copied();
        self.selected = None;
        self.suggested_move = None;
        self.move_timer.start();
    }
}

/// Outcome text for a decided game
pub fn result_text(winner: PieceColor) -> &'static str {
    match winner {
        PieceColor::Red => "Red wins",
        PieceColor::Blue => "Blue wins",
        _ => "Draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP {
            show_suggestions: false,
        })
    }

    #[test]
    fn test_click_select_then_move() {
        let mut state = pvp();
        state.click(sq("a7")).unwrap();
        assert_eq!(state.selected, Some(sq("a7")));
        state.click(sq("b6")).unwrap();
        assert_eq!(state.selected, None);
        assert_eq!(state.last_move, Some("a7-b6".parse().unwrap()));
        assert_eq!(state.current_turn(), PieceColor::Blue);
    }

    #[test]
    fn test_click_reselect_and_deselect() {
        let mut state = pvp();
        state.click(sq("a7")).unwrap();
        state.click(sq("g1")).unwrap();
        assert_eq!(state.selected, Some(sq("g1")));
        state.click(sq("g1")).unwrap();
        assert_eq!(state.selected, None);
        assert!(state.click(sq("d4")).is_err());
    }

    #[test]
    fn test_illegal_destination_keeps_turn() {
        let mut state = pvp();
        state.click(sq("a7")).unwrap();
        assert!(state.click(sq("d4")).is_err());
        assert_eq!(state.current_turn(), PieceColor::Red);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_targets() {
        let state = pvp();
        assert_eq!(state.targets(sq("a7")).len(), 8);
        assert!(state.targets(sq("a1")).is_empty());
    }

    #[test]
    fn test_pve_rejects_ai_side_input() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: PieceColor::Blue,
        });
        assert!(state.is_ai_turn());
        assert!(state.click(sq("a7")).is_err());
    }

    #[test]
    fn test_block_mode() {
        let mut state = pvp();
        state.block_mode = true;
        state.click(sq("c3")).unwrap();
        assert_eq!(state.board.get(sq("e5")), PieceColor::Blocked);
        state.block_mode = false;
        state.click(sq("a7")).unwrap();
        state.click(sq("a6")).unwrap();
        assert!(!state.can_place_blocks());
        assert!(state.try_place_block(sq("d4")).is_err());
    }

    #[test]
    fn test_pve_undo_returns_to_human() {
        let mut state = GameState::new(GameMode::PvE {
            human_color: PieceColor::Red,
        });
        state.try_move("a7-a6".parse().unwrap()).unwrap();
        // Stand in for the AI reply
        state.execute_move("a1-b1".parse().unwrap()).unwrap();
        state.undo();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn(), PieceColor::Red);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_result_text() {
        assert_eq!(result_text(PieceColor::Red), "Red wins");
        assert_eq!(result_text(PieceColor::Empty), "Draw");
    }
}
