pub mod controller;
pub mod handler;

pub use controller::OnScreenController;
pub use handler::{InputHandler, KeyAction, KeyboardState};
