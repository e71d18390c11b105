//! Retrowars Snake - the Snake entry of a multiplayer arcade compilation
//!
//! This library provides:
//! - Core grid movement and collision logic (game module)
//! - Players, sessions and incoming attacks (net module)
//! - Terminal rendering and HUD state (render module)
//! - Keyboard and on-screen controls (input module)
//! - The playable terminal front end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod net;
pub mod render;
