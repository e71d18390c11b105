use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::game::{Direction, DirectionInput};
use crate::render::layout::controller_layout;

/// Clickable arrow buttons along the bottom of the screen.
///
/// A button counts as held from mouse-down until mouse-up, like a touch
/// controller.
#[derive(Debug, Clone, Default)]
pub struct OnScreenController {
    buttons: Vec<(Direction, Rect)>,
    held: Option<Direction>,
}

impl OnScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the renderer's layout; call whenever the footer moves
    pub fn layout(&mut self, footer: Rect) {
        self.buttons = controller_layout(footer).to_vec();
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.held = self.button_at(event.column, event.row);
            }
            MouseEventKind::Up(_) => self.held = None,
            _ => {}
        }
    }

    fn button_at(&self, column: u16, row: u16) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(direction, _)| *direction)
    }

    pub fn input(&self) -> DirectionInput {
        self.held.map(DirectionInput::only).unwrap_or_default()
    }

    pub fn release(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn controller() -> OnScreenController {
        let mut controller = OnScreenController::new();
        controller.layout(Rect::new(0, 20, 80, 3));
        controller
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = controller();

        controller.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 21));
        assert_eq!(controller.input(), DirectionInput::only(Direction::Left));

        controller.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 21));
        assert_eq!(controller.input(), DirectionInput::default());
    }

    #[test]
    fn test_drag_between_buttons() {
        let mut controller = controller();

        controller.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 75, 20));
        assert_eq!(controller.input(), DirectionInput::only(Direction::Down));

        controller.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 68, 22));
        assert_eq!(controller.input(), DirectionInput::only(Direction::Up));

        controller.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 22));
        assert_eq!(controller.input(), DirectionInput::default());
    }

    #[test]
    fn test_clicks_outside_are_ignored() {
        let mut controller = controller();
        controller.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 5));
        assert_eq!(controller.input(), DirectionInput::default());

        controller.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 2, 21));
        assert_eq!(controller.input(), DirectionInput::default());
    }
}
