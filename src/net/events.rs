use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use super::player::{Player, PlayerId, PlayerStatus};

/// Something another player did that this client has to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEvent {
    /// An opponent scored against us; our snake grows by `strength`
    Damage { from: PlayerId, strength: i32 },
    StatusChanged {
        player: PlayerId,
        status: PlayerStatus,
    },
}

/// Local stand-in opponent that attacks on a fixed interval.
///
/// Delivers events from its own task, the same way a network connection
/// would.
#[derive(Debug, Clone)]
pub struct SparringPartner {
    pub id: PlayerId,
    pub every: Duration,
    pub strength: i32,
}

impl SparringPartner {
    pub fn new(id: PlayerId, every: Duration, strength: i32) -> Self {
        Self {
            id,
            every,
            strength,
        }
    }

    pub fn player(&self) -> Player {
        Player {
            status: PlayerStatus::Playing,
            ..Player::new(self.id, "snake")
        }
    }

    /// Runs until the receiving side hangs up
    pub fn spawn(self, events: UnboundedSender<NetworkEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let playing = NetworkEvent::StatusChanged {
                player: self.id,
                status: PlayerStatus::Playing,
            };
            if events.send(playing).is_err() {
                return;
            }

            let mut timer = interval_at(Instant::now() + self.every, self.every);
            loop {
                timer.tick().await;
                let damage = NetworkEvent::Damage {
                    from: self.id,
                    strength: self.strength,
                };
                if events.send(damage).is_err() {
                    tracing::debug!("Sparring partner {} stopping", self.id);
                    break;
                }
            }
        })
    }
}
