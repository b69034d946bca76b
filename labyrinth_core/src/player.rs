use std::fmt;

use log::debug;

use crate::{
    api::{ApiPlayer, ValidApiPlayer},
    computation_method::{computation_method_label, ComputationMethod},
    error::ValidationError,
    turn_action::TurnAction,
};

pub type PlayerId = usize;
pub type MazeCardId = usize;

/// Receives a notification whenever a player's turn action changes to
/// [`TurnAction::Move`] or [`TurnAction::Shift`].
pub trait TurnActionListener {
    fn on_has_to_move(&self) {}

    fn on_has_to_shift(&self) {}
}

/// Adapts a closure to be called when the player has to move.
pub struct OnHasToMove<F>(pub F);

impl<F: Fn()> TurnActionListener for OnHasToMove<F> {
    fn on_has_to_move(&self) {
        (self.0)()
    }
}

/// Adapts a closure to be called when the player has to shift.
pub struct OnHasToShift<F>(pub F);

impl<F: Fn()> TurnActionListener for OnHasToShift<F> {
    fn on_has_to_shift(&self) {
        (self.0)()
    }
}

pub struct Player {
    id: PlayerId,
    maze_card: Option<MazeCardId>,
    color_index: usize,
    is_computer: bool,
    computation_method: String,
    is_user: bool,
    turn_action: TurnAction,
    score: u32,
    listeners: Vec<Box<dyn TurnActionListener>>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            maze_card: None,
            color_index: 0,
            is_computer: false,
            computation_method: String::new(),
            is_user: false,
            turn_action: TurnAction::None,
            score: 0,
            listeners: vec![],
        }
    }

    /// Creates a player from a server record. Missing fields fall back to
    /// their defaults.
    pub fn from_api(record: &ApiPlayer) -> Self {
        let mut player = Player::new(record.id.unwrap_or_default());
        player.hydrate(record);
        player
    }

    pub fn try_from_api(record: &ApiPlayer) -> Result<Self, ValidationError> {
        let record = record.validate()?;
        let mut player = Player::new(record.id);
        player.hydrate_valid(&record);
        Ok(player)
    }

    /// Applies score, color and automation settings of a server record.
    ///
    /// A record for a human player does not reset `is_computer` or the
    /// computation method of a player that was hydrated as a computer before.
    pub fn hydrate(&mut self, record: &ApiPlayer) {
        self.score = record.score.unwrap_or_default();
        self.color_index = record.piece_index.unwrap_or_default();
        if record.is_computer() {
            self.is_computer = true;
            self.computation_method = record.computation_method.clone().unwrap_or_default();
        }
        debug!(
            "Hydrated player {}: score {}, color {}, computer {}",
            self.id, self.score, self.color_index, self.is_computer
        );
    }

    pub fn hydrate_valid(&mut self, record: &ValidApiPlayer) {
        self.score = record.score;
        self.color_index = record.piece_index;
        if let Some(method) = &record.computation_method {
            self.is_computer = true;
            self.computation_method = method.clone();
        }
        debug!(
            "Hydrated player {}: score {}, color {}, computer {}",
            self.id, self.score, self.color_index, self.is_computer
        );
    }

    pub fn subscribe(&mut self, listener: Box<dyn TurnActionListener>) {
        self.listeners.push(listener);
    }

    pub fn set_turn_action(&mut self, turn_action: TurnAction) {
        let previous = self.turn_action;
        self.turn_action = turn_action;
        if previous == turn_action {
            return;
        }
        debug!(
            "Player {} turn action {} -> {}",
            self.id, previous, turn_action
        );
        match turn_action {
            TurnAction::Move => self.listeners.iter().for_each(|l| l.on_has_to_move()),
            TurnAction::Shift => self.listeners.iter().for_each(|l| l.on_has_to_shift()),
            TurnAction::None => {}
        }
    }

    pub fn turn_action(&self) -> TurnAction {
        self.turn_action
    }

    pub fn has_to_move(&self) -> bool {
        match self.turn_action {
            TurnAction::Move => true,
            TurnAction::None | TurnAction::Shift => false,
        }
    }

    pub fn has_to_shift(&self) -> bool {
        match self.turn_action {
            TurnAction::Shift => true,
            TurnAction::None | TurnAction::Move => false,
        }
    }

    pub fn label(&self) -> String {
        if self.is_user {
            "You".to_string()
        } else if self.is_computer {
            computation_method_label(&self.computation_method)
        } else {
            String::new()
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn maze_card(&self) -> Option<MazeCardId> {
        self.maze_card
    }

    pub fn set_maze_card(&mut self, maze_card: Option<MazeCardId>) {
        self.maze_card = maze_card;
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// Only meaningful if the player is a computer.
    pub fn computation_method(&self) -> &str {
        &self.computation_method
    }

    pub fn parsed_computation_method(&self) -> Option<ComputationMethod> {
        self.is_computer
            .then(|| ComputationMethod::from(self.computation_method.as_str()))
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn set_user(&mut self, is_user: bool) {
        self.is_user = is_user;
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("maze_card", &self.maze_card)
            .field("color_index", &self.color_index)
            .field("is_computer", &self.is_computer)
            .field("computation_method", &self.computation_method)
            .field("is_user", &self.is_user)
            .field("turn_action", &self.turn_action)
            .field("score", &self.score)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
