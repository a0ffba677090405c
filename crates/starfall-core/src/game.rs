//! Session state owned by the frame driver and lent to systems.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::Key;
use crate::types::Position;

/// Score, game-over flag and session clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Only ever goes false -> true; cleared by `reset` alone.
    pub game_over: bool,
    /// Accumulated simulation time (milliseconds).
    pub elapsed_ms: f64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_score(&mut self, value: u32) {
        self.score = self.score.saturating_add(value);
    }

    pub fn end_game(&mut self) {
        if !self.game_over {
            log::info!("game over with score {}", self.score);
        }
        self.game_over = true;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Latest input as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub keys_pressed: BTreeSet<Key>,
    /// Last known pointer location in play-area pixels.
    pub pointer: Position,
    pub pointer_down: bool,
    /// Frame timestamp of the last bullet fired (milliseconds).
    pub last_shot_ms: f64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host key-down event. Unmapped keys are ignored.
    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.keys_pressed.remove(&key);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Position::new(x, y);
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    /// Clear what a restart clears. The pointer location is kept since
    /// the cursor has not moved.
    pub fn reset_transient(&mut self) {
        self.keys_pressed.clear();
        self.pointer_down = false;
        self.last_shot_ms = 0.0;
    }
}
