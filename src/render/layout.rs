//! Where things go on screen, kept free of drawing so input can hit-test
//! against the same rectangles the renderer uses.

use ratatui::layout::{Constraint, Direction as Axis, Layout, Rect};

use crate::game::{Cell, Direction, GameConfig, SnakeState};

/// Gap left around each drawn cell so neighbours stay visually separate
pub const CELL_INSET: f32 = 1.0;

/// A cell in world units, origin bottom-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub fn cell_rect(cell: Cell, cell_width: f32, cell_height: f32) -> CellRect {
    CellRect {
        x: cell.x as f32 * cell_width + CELL_INSET,
        y: cell.y as f32 * cell_height + CELL_INSET,
        width: cell_width - 2.0 * CELL_INSET,
        height: cell_height - 2.0 * CELL_INSET,
    }
}

/// Body rectangles head first, plus the food if there is any
pub fn snake_rects(config: &GameConfig, state: &SnakeState) -> (Vec<CellRect>, Option<CellRect>) {
    let (cell_width, cell_height) = config.cell_size();
    let body = state
        .body
        .iter()
        .map(|&cell| cell_rect(cell, cell_width, cell_height))
        .collect();
    let food = state
        .food
        .map(|cell| cell_rect(cell, cell_width, cell_height));
    (body, food)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub roster: Rect,
    pub game: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Axis::Vertical)
        .constraints([
            Constraint::Length(1), // Score line
            Constraint::Length(1), // Players
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // On-screen controller
        ])
        .split(area);

    // Center the game grid horizontally
    let game = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[2])[1];

    ScreenAreas {
        header: chunks[0],
        roster: chunks[1],
        game,
        footer: chunks[3],
    }
}

pub const BUTTON_WIDTH: u16 = 7;

/// Left and right on the left edge, up and down on the right edge
pub fn controller_layout(footer: Rect) -> [(Direction, Rect); 4] {
    let chunks = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(footer);

    [
        (Direction::Left, chunks[0]),
        (Direction::Right, chunks[1]),
        (Direction::Up, chunks[3]),
        (Direction::Down, chunks[4]),
    ]
}
