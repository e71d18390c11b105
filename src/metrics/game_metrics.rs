use std::time::{Duration, Instant};

/// Stats that outlive a single round, shown around the playfield
pub struct GameMetrics {
    pub round_started: Instant,
    pub elapsed_time: Duration,
    pub high_score: u64,
    pub longest_snake: usize,
    pub games_played: u32,
    /// Damage taken this round
    pub growth_received: i64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_snake: 0,
            games_played: 0,
            growth_received: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.round_started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.round_started = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.growth_received = 0;
    }

    pub fn on_attack(&mut self, strength: i32) {
        self.growth_received += i64::from(strength);
    }

    pub fn on_game_over(&mut self, final_score: u64, final_length: usize) {
        self.games_played += 1;
        self.longest_snake = self.longest_snake.max(final_length);
        if final_score > self.high_score {
            tracing::info!("New high score {}", final_score);
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
