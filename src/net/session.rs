use super::player::{Player, PlayerId, PlayerStatus};

/// The players taking part in one multiplayer round.
///
/// Constructed by whoever owns the connection and handed to the screens that
/// need it; there is no process-wide client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    me: Option<PlayerId>,
    players: Vec<Player>,
}

impl Session {
    pub fn new(players: Vec<Player>, me: Option<PlayerId>) -> Self {
        Self { me, players }
    }

    /// Local game: only ourselves in the roster
    pub fn single_player(me: Player) -> Self {
        let id = me.id;
        Self::new(vec![me], Some(id))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn me(&self) -> Option<&Player> {
        self.me.and_then(|id| self.player(id))
    }

    pub fn other_players(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| Some(player.id) != self.me)
            .collect()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Add a player who joined mid-session; a known id is replaced
    pub fn add_player(&mut self, player: Player) {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    /// Returns false when the player is not part of this session
    pub fn set_status(&mut self, id: PlayerId, status: PlayerStatus) -> bool {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            tracing::warn!("Status update for unknown player {}", id);
            return false;
        };

        if player.status != status {
            tracing::info!("Player {} is now {} (was {})", id, status, player.status);
            player.status = status;
        }
        true
    }
}
