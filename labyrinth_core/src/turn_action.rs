use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The action a player is currently expected to perform.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Copy,
    Clone,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnAction {
    #[default]
    None,
    Move,
    Shift,
}
