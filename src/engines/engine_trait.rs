//! Engine abstraction layer used by the self-play tooling.
//!
//! Defines a common output payload so different move-selection strategies
//! can be swapped behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::GammonMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub chosen_move: Option<GammonMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one move from the snapshot's legal-move set, or none when the
    /// turn has no legal play.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String>;
}
