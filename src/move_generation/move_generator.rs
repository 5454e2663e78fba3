use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;
use crate::game_state::gammon_types::GammonMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    NotImplemented,
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::NotImplemented => {
                write!(f, "move generation is not implemented yet")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GammonMove>>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _game_state: &GameState) -> MoveGenResult<Vec<GammonMove>> {
        Err(MoveGenerationError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_generator_reports_not_implemented() {
        let game = GameState::new_game();
        let result = NullMoveGenerator.generate_legal_moves(&game);
        assert_eq!(result, Err(MoveGenerationError::NotImplemented));
    }

    #[test]
    fn error_messages_name_the_failure() {
        let invalid = MoveGenerationError::InvalidState("remaining dice drifted".to_owned());
        assert!(invalid.to_string().contains("invalid game state"));
        assert!(MoveGenerationError::NotImplemented
            .to_string()
            .contains("not implemented"));
    }
}
