use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error)]
pub enum LabyrinthError {
    #[error("invalid player record: {0}")]
    Validation(#[from] ValidationError),
    #[error("player {0} does not take part in this game")]
    PlayerNotFound(PlayerId),
    #[error("malformed player record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, LabyrinthError>;
