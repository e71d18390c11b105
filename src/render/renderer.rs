use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use super::hud::{Hud, MessageOverlay};
use super::layout::{controller_layout, screen_layout, snake_rects, CellRect};
use crate::game::{Direction, DirectionInput, GameConfig, SnakeState};
use crate::metrics::GameMetrics;
use crate::net::{Player, Session};

/// Everything a frame needs, borrowed from the running mode
pub struct GameView<'a> {
    pub config: &'a GameConfig,
    pub state: &'a SnakeState,
    pub hud: &'a Hud,
    pub session: &'a Session,
    pub metrics: &'a GameMetrics,
    /// On-screen buttons currently held
    pub held: DirectionInput,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &GameView) {
        let areas = screen_layout(frame.area());

        frame.render_widget(self.render_stats(view), areas.header);
        frame.render_widget(self.render_roster(view), areas.roster);

        if view.state.is_alive {
            self.render_grid(frame, areas.game, view);
        } else {
            frame.render_widget(self.render_game_over(view), areas.game);
        }

        if let Some(message) = view.hud.message() {
            self.render_message(frame, areas.game, message);
        }

        self.render_controller(frame, areas.footer, view.held);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, view: &GameView) {
        let (body, food) = snake_rects(view.config, view.state);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Block)
            .x_bounds([0.0, f64::from(view.config.world_width)])
            .y_bounds([0.0, f64::from(view.config.world_height)])
            .paint(|ctx| {
                for rect in &body {
                    ctx.draw(&filled(rect, Color::White));
                }
                if let Some(rect) = &food {
                    ctx.draw(&filled(rect, Color::Green));
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_stats(&self, view: &GameView) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(view.hud.score_text(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(view.state.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(view.metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(view.metrics.high_score.to_string(), value),
        ];

        let queued = view.state.queued_growth();
        if queued > 0 {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("+{} incoming", queued),
                Style::default().fg(Color::Red),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_roster(&self, view: &GameView) -> Paragraph<'_> {
        let mut spans = Vec::new();

        if let Some(me) = view.session.me() {
            spans.push(self.player_span(view, me, "You"));
        }

        let others = view.session.other_players();
        if !others.is_empty() {
            if view.session.me().is_some() {
                spans.push(Span::styled("  vs  ", Style::default().fg(Color::Gray)));
            }
            for (i, player) in others.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(self.player_span(view, player, &format!("#{}", player.id)));
            }
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn player_span(&self, view: &GameView, player: &Player, name: &str) -> Span<'static> {
        let style = if view.hud.is_highlighted(player.id) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if player.status.is_active() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("{} [{}]", name, player.status), style)
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, message: &MessageOverlay) {
        let alpha = message.alpha();
        if alpha <= 0.0 {
            return;
        }

        let style = if alpha >= 1.0 {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if alpha >= 0.5 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = vec![Line::from(Span::styled(message.heading.clone(), style))];
        if let Some(body) = &message.body {
            lines.push(Line::from(Span::styled(body.clone(), style)));
        }

        let popup = centered(area, 30, lines.len() as u16 + 2);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            popup,
        );
    }

    fn render_game_over(&self, view: &GameView) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.state.len().to_string(), Style::default().fg(Color::White)),
                Span::raw("    "),
                Span::styled("Grown by attacks: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.metrics.growth_received.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.metrics.high_score.to_string(), Style::default().fg(Color::White)),
                Span::raw("    "),
                Span::styled("Longest: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.metrics.longest_snake.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controller(&self, frame: &mut Frame, area: Rect, held: DirectionInput) {
        for (direction, rect) in controller_layout(area) {
            let style = if held.is_active(direction) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let button = Paragraph::new(arrow(direction))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            frame.render_widget(button, rect);
        }

        let hint = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), middle);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn filled(rect: &CellRect, color: Color) -> Rectangle {
    Rectangle {
        x: f64::from(rect.x),
        y: f64::from(rect.y),
        width: f64::from(rect.width),
        height: f64::from(rect.height),
        color,
    }
}

fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "↑",
        Direction::Down => "↓",
        Direction::Left => "←",
        Direction::Right => "→",
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
