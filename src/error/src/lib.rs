//! 游戏错误处理模块
//!
//! Errors shared by every crate of the game: question loading, map movement,
//! console input and configuration.

use thiserror::Error;

/// Errors that can surface while setting up or playing a game
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Question row that does not describe a playable question
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    /// Hero already stands on the last walkable cell
    #[error("Already at the end of the map (position {position})")]
    AtFinish { position: usize },

    #[error("Position {position} is outside a map of {length} cells")]
    OutOfBounds { position: usize, length: usize },

    /// stdin was closed while the game waited for an answer
    #[error("Input closed")]
    InputClosed,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InputClosed => "No more input, leaving the game.".to_string(),
        GameError::AtFinish { .. } => "You are already at the end of the map!".to_string(),
        GameError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "File not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_mapped() {
        let err = GameError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        assert_eq!(handle_error(&err), "File not found");
    }

    #[test]
    fn test_structured_messages() {
        let err = GameError::OutOfBounds {
            position: 9,
            length: 7,
        };
        assert_eq!(err.to_string(), "Position 9 is outside a map of 7 cells");
        assert_eq!(
            handle_error(&GameError::AtFinish { position: 6 }),
            "You are already at the end of the map!"
        );
    }
}
