use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::game::{GameEngine, SnakeState};
use crate::input::{InputHandler, KeyAction, KeyboardState, OnScreenController};
use crate::metrics::GameMetrics;
use crate::net::{NetworkEvent, PlayerStatus, Session};
use crate::render::layout::screen_layout;
use crate::render::{GameView, Hud, Renderer};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct HumanMode {
    engine: GameEngine,
    state: SnakeState,
    session: Session,
    hud: Hud,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    keyboard: KeyboardState,
    controller: OnScreenController,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(mut engine: GameEngine, session: Session) -> Self {
        let state = engine.reset();

        let mut mode = Self {
            engine,
            state,
            session,
            hud: Hud::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            keyboard: KeyboardState::default(),
            controller: OnScreenController::new(),
            should_quit: false,
        };
        mode.on_game_start();
        mode
    }

    /// Take over the terminal until the player quits.
    ///
    /// `events` carries whatever other players do to us.
    pub async fn run(&mut self, events: UnboundedReceiver<NetworkEvent>) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal, events).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        mut events: UnboundedReceiver<NetworkEvent>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The engine keeps its own tick schedule; frames just feed it time
        let mut frame_timer = interval(FRAME_INTERVAL);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();
        let mut terminal_closed = false;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next(), if !terminal_closed => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => tracing::warn!("Terminal event error: {}", err),
                        None => terminal_closed = self.on_terminal_closed(),
                    }
                }

                // Other players
                Some(event) = events.recv() => {
                    self.handle_network_event(event);
                }

                // Advance the game and draw
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    let delta = now.duration_since(last_frame).as_secs_f32();
                    last_frame = now;

                    self.update_frame(delta);

                    let view = GameView {
                        config: self.engine.config(),
                        state: &self.state,
                        hud: &self.hud,
                        session: &self.session,
                        metrics: &self.metrics,
                        held: self.controller.input(),
                    };
                    let controller = &mut self.controller;
                    let renderer = &self.renderer;
                    terminal.draw(|frame| {
                        controller.layout(screen_layout(frame.area()).footer);
                        renderer.render(frame, &view);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.set_my_status(PlayerStatus::Quit);

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind == KeyEventKind::Release {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(direction) => self.keyboard.press(direction),
                    KeyAction::Restart => self.reset_game(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.controller.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Nothing can steer once the terminal stops sending events
    fn on_terminal_closed(&mut self) -> bool {
        tracing::info!("Terminal event stream ended");
        self.should_quit = true;
        true
    }

    fn handle_network_event(&mut self, event: NetworkEvent) {
        match event {
            NetworkEvent::Damage { from, strength } => {
                if self.state.is_alive {
                    self.state.receive_damage(strength);
                    self.metrics.on_attack(strength);
                    self.hud.show_attack_from(&self.session, from, strength);
                }
            }
            NetworkEvent::StatusChanged { player, status } => {
                self.session.set_status(player, status);
            }
        }
    }

    /// One rendered frame's worth of simulation
    fn update_frame(&mut self, delta: f32) {
        let keyboard = self.keyboard.take();
        let result = self
            .engine
            .update(&mut self.state, delta, keyboard, self.controller.input());

        // Track game over
        if result.info.collision_type.is_some() {
            self.metrics.on_game_over(self.state.score, self.state.len());
            self.set_my_status(PlayerStatus::Dead);
        }

        if self.state.is_alive {
            self.metrics.update();
        }
        self.hud.update(self.state.score, delta);
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.keyboard = KeyboardState::default();
        self.controller.release();
        self.on_game_start();
    }

    fn on_game_start(&mut self) {
        self.metrics.on_game_start();
        self.hud.show_message("Eat the fruit", Some("Avoid your tail"));
        self.set_my_status(PlayerStatus::Playing);
    }

    fn set_my_status(&mut self, status: PlayerStatus) {
        if let Some(id) = self.session.me().map(|me| me.id) {
            self.session.set_status(id, status);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, GameConfig};
    use crate::net::Player;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        let engine = GameEngine::with_seed(GameConfig::small(), 5).unwrap();
        let session = Session::new(
            vec![Player::new(1, "snake"), Player::new(2, "snake")],
            Some(1),
        );
        HumanMode::new(engine, session)
    }

    fn my_status(mode: &HumanMode) -> Option<PlayerStatus> {
        mode.session.me().map(|me| me.status)
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(mode.state.is_alive);
        assert_eq!(mode.state.score, 0);
        assert_eq!(my_status(&mode), Some(PlayerStatus::Playing));
        assert!(mode.hud.message().is_some());
    }

    #[test]
    fn test_game_reset() {
        let mut mode = mode();
        mode.state.score = 10_000;
        mode.state.is_alive = false;
        mode.reset_game();
        assert_eq!(mode.state.score, 0);
        assert!(mode.state.is_alive);
    }

    #[test]
    fn test_keyboard_steers_on_next_frame() {
        let mut mode = mode();
        mode.state.food = Some(Cell::new(0, 0));

        mode.handle_event(Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)));
        mode.update_frame(1.0);

        assert_eq!(mode.state.current_direction, Direction::Up);
        assert_eq!(mode.state.head(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_closed_terminal_quits() {
        let mut mode = mode();
        assert!(mode.on_terminal_closed());
        assert!(mode.should_quit);
    }

    #[test]
    fn test_damage_event_queues_growth() {
        let mut mode = mode();
        mode.handle_network_event(NetworkEvent::Damage {
            from: 2,
            strength: 3,
        });

        assert_eq!(mode.state.queued_growth(), 3);
        assert_eq!(mode.metrics.growth_received, 3);
        assert!(mode.hud.is_highlighted(2));
    }

    #[test]
    fn test_status_event_updates_roster() {
        let mut mode = mode();
        mode.handle_network_event(NetworkEvent::StatusChanged {
            player: 2,
            status: PlayerStatus::Disconnected,
        });

        assert_eq!(
            mode.session.player(2).map(|p| p.status),
            Some(PlayerStatus::Disconnected)
        );
    }

    #[test]
    fn test_game_over_is_reported() {
        let mut mode = mode();
        mode.state = SnakeState::with_body(
            [Cell::new(4, 2)],
            Direction::Right,
            Some(Cell::new(0, 0)),
            0.1,
        );
        mode.state.score = 20_000;

        mode.update_frame(1.0);

        assert!(!mode.state.is_alive);
        assert_eq!(mode.metrics.high_score, 20_000);
        assert_eq!(mode.metrics.longest_snake, 1);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(my_status(&mode), Some(PlayerStatus::Dead));

        // Damage after death is dropped
        mode.handle_network_event(NetworkEvent::Damage {
            from: 2,
            strength: 1,
        });
        assert_eq!(mode.state.queued_growth(), 0);
    }
}
