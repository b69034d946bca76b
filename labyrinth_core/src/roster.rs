use itertools::Itertools;
use log::debug;

use crate::{
    api::ApiPlayer,
    error::{LabyrinthError, Result},
    player::{Player, PlayerId},
};

/// The players taking part in one game session.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { players: vec![] }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.get(id).ok_or(LabyrinthError::PlayerNotFound(id))
    }

    /// Brings the roster in line with the records reported by the server.
    ///
    /// Known players are hydrated in place and keep their listeners, unknown
    /// ids are added and players without a record are dropped. The roster
    /// takes the order of `records`.
    pub fn sync(&mut self, records: &[ApiPlayer]) {
        let mut previous = std::mem::take(&mut self.players);
        for record in records {
            let id = record.id.unwrap_or_default();
            let known = previous
                .iter()
                .position(|p| p.id() == id)
                .map(|index| previous.remove(index));
            match known {
                Some(mut player) => {
                    player.hydrate(record);
                    self.players.push(player);
                }
                None => {
                    debug!("Player {} joined", id);
                    self.players.push(Player::from_api(record));
                }
            }
        }
        for player in previous {
            debug!("Player {} left", player.id());
        }
    }

    /// Adds a player that was validated or built by the caller.
    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Flags `id` as the local user and every other player as remote.
    pub fn mark_user(&mut self, id: PlayerId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(LabyrinthError::PlayerNotFound(id));
        }
        for player in self.players.iter_mut() {
            player.set_user(player.id() == id);
        }
        Ok(())
    }

    pub fn user(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_user())
    }

    pub fn labels(&self) -> Vec<(PlayerId, String)> {
        self.players.iter().map(|p| (p.id(), p.label())).collect_vec()
    }
}
