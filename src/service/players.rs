//! Player service

use std::sync::Arc;

use tracing::info;

use super::require_non_blank;
use crate::{
    error::Result,
    storage::{NewPlayer, Player, PlayerStore},
    PlayerId,
};

pub struct PlayerService {
    players: Arc<PlayerStore>,
}

impl PlayerService {
    pub fn new(players: Arc<PlayerStore>) -> Self {
        Self { players }
    }

    pub fn list(&self) -> Vec<Player> {
        self.players.list()
    }

    pub fn get(&self, id: PlayerId) -> Result<Player> {
        self.players.get(id)
    }

    pub fn create(&self, data: NewPlayer) -> Result<Player> {
        require_non_blank("first_name", &data.first_name)?;
        let player = self.players.create(data.into_player(PlayerId::new(0)));
        info!(player_id = %player.id, name = %player.full_name(), "player created");
        Ok(player)
    }

    /// Replace every field of an existing player
    pub fn update(&self, id: PlayerId, data: NewPlayer) -> Result<Player> {
        require_non_blank("first_name", &data.first_name)?;
        self.players.update(data.into_player(id))
    }

    /// Delete a player. Rosters that reference it are left as they are.
    pub fn delete(&self, id: PlayerId) -> Result<()> {
        self.players.delete(id)?;
        info!(player_id = %id, "player deleted");
        Ok(())
    }
}
