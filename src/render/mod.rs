pub mod hud;
pub mod layout;
pub mod renderer;

pub use hud::{Hud, MessageOverlay};
pub use renderer::{GameView, Renderer};
