//! Game state management for the terminal game
//!
//! The engine itself is stateless; this layer owns the selection and
//! target highlights and runs the turn contract: after a capture the same
//! piece keeps jumping while more captures exist from its landing square,
//! and only then does the turn pass.

use checkers_core::{
    legal_captures_from, legal_moves, legal_moves_from, Color, MoveError, Position,
};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    WhiteWins,
    BlackWins,
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Current position
    pub position: Position,
    /// Square currently picked up by the player, if any
    pub selected: Option<u8>,
    /// Legal destinations of the selection, rendered as highlights
    pub targets: HashSet<u8>,
    /// Set mid-chain: the piece that must keep jumping this turn
    pub chained_piece: Option<u8>,
    /// Game result
    pub result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            selected: None,
            targets: HashSet::new(),
            chained_piece: None,
            result: GameResult::InProgress,
        }
    }

    /// Squares the current player may pick a piece from, sorted. During a
    /// jump chain this collapses to the chained piece.
    pub fn selectable_sources(&self) -> Vec<u8> {
        if let Some(sq) = self.chained_piece {
            return vec![sq];
        }
        let mut sources: Vec<u8> = legal_moves(&self.position).iter().map(|m| m.from).collect();
        sources.sort_unstable();
        sources.dedup();
        sources
    }

    /// Destinations offered for `from`. Mid-chain only further captures
    /// count.
    pub fn destinations_from(&self, from: u8) -> HashSet<u8> {
        let moves = if self.chained_piece.is_some() {
            legal_captures_from(&self.position, from)
        } else {
            legal_moves_from(&self.position, from)
        };
        moves.iter().map(|m| m.to).collect()
    }

    /// Pick up a piece and highlight where it can go.
    pub fn select(&mut self, sq: u8) {
        self.targets = self.destinations_from(sq);
        self.selected = Some(sq);
    }

    /// Drop the current selection and highlights.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    /// Play the chosen move. Returns `true` when the same piece must keep
    /// jumping (the turn has NOT passed); `false` when the turn went over
    /// to the other side.
    pub fn play(&mut self, from: u8, to: u8) -> Result<bool, MoveError> {
        let (next, did_capture) = self.position.apply_move(from, to)?;
        self.position = next;
        self.clear_selection();

        if did_capture && !legal_captures_from(&self.position, to).is_empty() {
            self.chained_piece = Some(to);
            return Ok(true);
        }

        self.chained_piece = None;
        self.position = self.position.pass_turn();
        self.update_result();
        Ok(false)
    }

    /// A side that cannot move has lost, whether it is out of pieces or
    /// completely blocked.
    fn update_result(&mut self) {
        if legal_moves(&self.position).is_empty() {
            self.result = match self.position.current_player() {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            };
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
