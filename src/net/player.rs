use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::games::{self, GameDetails};

pub type PlayerId = u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("unknown player status {0:?}")]
    UnknownStatus(String),
}

/// Where a player is in their lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// In the lobby, before or after picking a game
    #[default]
    Lobby,
    /// In a game and still alive
    Playing,
    /// Game over
    Dead,
    /// Lost the network connection
    Disconnected,
    /// Left gracefully
    Quit,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Lobby => "lobby",
            PlayerStatus::Playing => "playing",
            PlayerStatus::Dead => "dead",
            PlayerStatus::Disconnected => "disconnected",
            PlayerStatus::Quit => "quit",
        }
    }

    /// Still taking part in the current round
    pub fn is_active(&self) -> bool {
        matches!(self, PlayerStatus::Playing)
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerStatus {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lobby" => Ok(PlayerStatus::Lobby),
            "playing" => Ok(PlayerStatus::Playing),
            "dead" => Ok(PlayerStatus::Dead),
            "disconnected" => Ok(PlayerStatus::Disconnected),
            "quit" => Ok(PlayerStatus::Quit),
            other => Err(PlayerError::UnknownStatus(other.to_string())),
        }
    }
}

/// A participant as seen over the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Id of the game this player is playing, see [`games::find`]
    pub game: String,
    #[serde(default)]
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(id: PlayerId, game: impl Into<String>) -> Self {
        Self {
            id,
            game: game.into(),
            status: PlayerStatus::default(),
        }
    }

    pub fn game_details(&self) -> Option<&'static GameDetails> {
        games::find(&self.game)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player[id: {}, game: {}, status: {}]",
            self.id, self.game, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_waits_in_lobby() {
        let player = Player::new(7, "snake");
        assert_eq!(player.status, PlayerStatus::Lobby);
        assert_eq!(player.game_details().map(|g| g.name), Some("Snake"));
        assert_eq!(player.to_string(), "Player[id: 7, game: snake, status: lobby]");
    }

    #[test]
    fn test_unknown_game_has_no_details() {
        assert_eq!(Player::new(1, "galaga").game_details(), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("dead".parse::<PlayerStatus>(), Ok(PlayerStatus::Dead));
        assert_eq!(
            "disconnected".parse::<PlayerStatus>(),
            Ok(PlayerStatus::Disconnected)
        );
        assert_eq!(
            "zombie".parse::<PlayerStatus>(),
            Err(PlayerError::UnknownStatus("zombie".to_string()))
        );
        // Wire values are lowercase only
        assert!("Dead".parse::<PlayerStatus>().is_err());
    }

    #[test]
    fn test_status_wire_format() {
        let player = Player {
            id: 3,
            game: "asteroids".to_string(),
            status: PlayerStatus::Playing,
        };
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(json, r#"{"id":3,"game":"asteroids","status":"playing"}"#);

        let parsed: Player = serde_json::from_str(r#"{"id":3,"game":"snake"}"#).unwrap();
        assert_eq!(parsed.status, PlayerStatus::Lobby);

        assert!(serde_json::from_str::<Player>(r#"{"id":3,"game":"snake","status":"afk"}"#).is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(PlayerStatus::Playing.is_active());
        assert!(!PlayerStatus::Lobby.is_active());
        assert!(!PlayerStatus::Dead.is_active());
        assert!(!PlayerStatus::Quit.is_active());
    }
}
