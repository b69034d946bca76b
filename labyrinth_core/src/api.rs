use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, player::PlayerId};

/// A player as reported by the game server.
///
/// Every field is optional so that incomplete records can still be applied
/// leniently. Use [`ApiPlayer::validate`] when a complete record is required.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlayer {
    pub id: Option<PlayerId>,
    pub score: Option<u32>,
    pub piece_index: Option<usize>,
    pub is_computer_player: Option<bool>,
    pub computation_method: Option<String>,
}

/// An [`ApiPlayer`] with all fields required for hydration present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidApiPlayer {
    pub id: PlayerId,
    pub score: u32,
    pub piece_index: usize,
    /// Set iff the record describes a computer player.
    pub computation_method: Option<String>,
}

impl ApiPlayer {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_from_json(json: &str) -> crate::error::Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer_player.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<ValidApiPlayer, ValidationError> {
        let id = self.id.ok_or(ValidationError::MissingField("id"))?;
        let score = self.score.ok_or(ValidationError::MissingField("score"))?;
        let piece_index = self
            .piece_index
            .ok_or(ValidationError::MissingField("pieceIndex"))?;
        let is_computer = self
            .is_computer_player
            .ok_or(ValidationError::MissingField("isComputerPlayer"))?;
        let computation_method = if is_computer {
            Some(
                self.computation_method
                    .clone()
                    .ok_or(ValidationError::MissingField("computationMethod"))?,
            )
        } else {
            None
        };
        Ok(ValidApiPlayer {
            id,
            score,
            piece_index,
            computation_method,
        })
    }
}
