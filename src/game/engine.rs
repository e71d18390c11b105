use super::{
    action::{Direction, DirectionInput},
    config::{GameConfig, FOOD_BONUS},
    error::Result,
    grid::{Cell, Grid},
    state::{CollisionType, SnakeState},
};
use rand::{rngs::StdRng, SeedableRng};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether queued growth kept the tail in place this step
    pub grew_from_damage: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of advancing the game by one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// Whether a movement tick fired this frame
    pub ticked: bool,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self::default()
    }

    fn game_over(collision_type: Option<CollisionType>) -> Self {
        Self {
            ticked: collision_type.is_some(),
            terminated: true,
            info: StepInfo {
                collision_type,
                ..StepInfo::default()
            },
        }
    }
}

/// Drives a [`SnakeState`] forward one frame at a time
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic food placement, for replays and tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        Ok(Self { config, grid, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fresh session: one cell in the middle of the grid heading right
    pub fn reset(&mut self) -> SnakeState {
        let head = self.grid.centre().unwrap_or(Cell::new(0, 0));
        let mut state = SnakeState::new(head, Direction::Right, None, self.config.time_step);
        self.spawn_food(&mut state);
        state
    }

    /// Advance by one rendered frame of `delta` seconds.
    ///
    /// Input is sampled and the next direction decided on every frame; the
    /// snake itself only moves once the timer passes the next scheduled tick.
    /// At most one tick fires per call, and the schedule advances by exactly
    /// one time step, so a long stall is not caught up.
    pub fn update(
        &mut self,
        state: &mut SnakeState,
        delta: f32,
        keyboard: DirectionInput,
        on_screen: DirectionInput,
    ) -> StepResult {
        if !state.is_alive {
            return StepResult::game_over(None);
        }

        state.timer += delta;

        state.record_input(keyboard, on_screen);
        state.decide_next_direction();

        if state.timer < state.next_time_step {
            return StepResult::idle();
        }

        state.next_time_step += state.time_step;
        self.move_snake(state)
    }

    /// Execute one movement tick
    pub fn move_snake(&mut self, state: &mut SnakeState) -> StepResult {
        if !state.is_alive {
            return StepResult::game_over(None);
        }

        state.current_direction = state.next_direction;

        let Some(current_head) = state.head() else {
            return self.end_game(state, CollisionType::SelfCollision);
        };

        let Some(new_head) = self.grid.neighbour(current_head, state.current_direction) else {
            return self.end_game(state, CollisionType::Wall);
        };

        if state.is_occupied_by_snake(new_head) {
            return self.end_game(state, CollisionType::SelfCollision);
        }

        tracing::debug!(
            "Moving {:?} from {} -> {}",
            state.current_direction,
            current_head,
            new_head
        );
        state.body.push_front(new_head);
        state.steps += 1;

        let mut info = StepInfo::default();

        if state.food == Some(new_head) {
            state.score += FOOD_BONUS;
            self.spawn_food(state);
            info.ate_food = true;
            tracing::info!(score = state.score, "Ate food at {}", new_head);
        } else if state.consume_growth() {
            // Damage from another player: head moves on, tail stays put
            info.grew_from_damage = true;
        } else {
            state.body.pop_back();
        }

        StepResult {
            ticked: true,
            terminated: false,
            info,
        }
    }

    /// Place food on a random cell the snake does not occupy.
    ///
    /// When the snake fills the whole grid there is nowhere left, and the
    /// food is cleared instead of searching forever.
    pub fn spawn_food(&mut self, state: &mut SnakeState) {
        if state.len() >= self.grid.len() {
            tracing::warn!(length = state.len(), "No free cell left for food");
            state.food = None;
            return;
        }

        state.food = loop {
            match self.grid.random_cell(&mut self.rng) {
                Some(cell) if !state.is_occupied_by_snake(cell) => break Some(cell),
                Some(_) => continue,
                None => break None,
            }
        };
    }

    fn end_game(&self, state: &mut SnakeState, collision_type: CollisionType) -> StepResult {
        state.is_alive = false;
        tracing::info!(
            score = state.score,
            length = state.len(),
            "Game over: {:?} heading {:?}",
            collision_type,
            state.current_direction
        );
        StepResult::game_over(Some(collision_type))
    }
}
