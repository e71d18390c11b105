//! Multiplayer glue: who is playing, and what they send us

pub mod events;
pub mod games;
pub mod player;
pub mod session;

pub use events::{NetworkEvent, SparringPartner};
pub use games::GameDetails;
pub use player::{Player, PlayerError, PlayerId, PlayerStatus};
pub use session::Session;
