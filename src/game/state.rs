use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use super::action::{Direction, DirectionInput};
use super::grid::Cell;

/// Pending "keep the tail" steps, shared with whoever delivers damage.
///
/// Producers may live on any thread; only the engine consumes.
#[derive(Debug, Clone, Default)]
pub struct GrowthQueue(Arc<AtomicI64>);

impl GrowthQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `strength` pending growth steps. Negative values are accepted and
    /// shrink the queue.
    pub fn receive_damage(&self, strength: i32) {
        self.0.fetch_add(i64::from(strength), Ordering::AcqRel);
    }

    pub fn pending(&self) -> i64 {
        self.0.load(Ordering::Acquire)
    }

    /// Take one pending step if the counter is positive
    pub(crate) fn try_consume(&self) -> bool {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n > 0).then(|| n - 1)
            })
            .is_ok()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake ran off the edge of the grid
    Wall,
    /// Snake ran into itself
    SelfCollision,
}

/// Complete state of one Snake session
#[derive(Debug)]
pub struct SnakeState {
    /// Body segments, head at the front
    pub body: VecDeque<Cell>,
    pub current_direction: Direction,
    /// Applied on the next tick
    pub next_direction: Direction,
    pub food: Option<Cell>,
    /// Seconds accumulated since the session started
    pub timer: f32,
    /// A tick fires once `timer` reaches this
    pub next_time_step: f32,
    pub time_step: f32,
    /// Flags sampled on the most recent frame
    pub input: DirectionInput,
    pub score: u64,
    pub steps: u32,
    pub is_alive: bool,
    queued_growth: GrowthQueue,
}

impl SnakeState {
    /// Single-cell snake at `head`
    pub fn new(head: Cell, direction: Direction, food: Option<Cell>, time_step: f32) -> Self {
        Self::with_body([head], direction, food, time_step)
    }

    /// Snake with an explicit body, head first
    pub fn with_body(
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Option<Cell>,
        time_step: f32,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            current_direction: direction,
            next_direction: direction,
            food,
            timer: 0.0,
            next_time_step: time_step,
            time_step,
            input: DirectionInput::default(),
            score: 0,
            steps: 0,
            is_alive: true,
            queued_growth: GrowthQueue::new(),
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if a cell is occupied by any segment, tail included
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Sample this frame's input; the two sources are OR-combined
    pub fn record_input(&mut self, keyboard: DirectionInput, on_screen: DirectionInput) {
        self.input = keyboard | on_screen;
    }

    /// Queue the sampled direction for the next tick.
    ///
    /// Only a lone held direction counts, and never the reverse of the
    /// direction currently travelled. Runs every frame, so the latest valid
    /// input before a tick wins.
    pub fn decide_next_direction(&mut self) {
        if let Some(direction) = self.input.sole() {
            if !direction.is_opposite(self.current_direction) {
                self.next_direction = direction;
            }
        }
    }

    pub fn receive_damage(&self, strength: i32) {
        self.queued_growth.receive_damage(strength);
    }

    pub fn queued_growth(&self) -> i64 {
        self.queued_growth.pending()
    }

    /// Handle for delivering damage from outside the render loop
    pub fn damage_handle(&self) -> GrowthQueue {
        self.queued_growth.clone()
    }

    pub(crate) fn consume_growth(&self) -> bool {
        self.queued_growth.try_consume()
    }
}
