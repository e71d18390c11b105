//! Heads-up display state: score, the start-of-game message and who is
//! attacking us. Drawing lives in the renderer; this only tracks what to show.

use crate::net::{PlayerId, Session};

const FADE_IN_SECS: f32 = 0.2;
const HOLD_SECS: f32 = 2.0;
const FADE_OUT_SECS: f32 = 0.5;

/// How long an attacker stays highlighted per point of damage
const HIGHLIGHT_SECS_PER_STRENGTH: f32 = 0.3;

/// Large heading with an optional line below, fading in then out
#[derive(Debug, Clone, PartialEq)]
pub struct MessageOverlay {
    pub heading: String,
    pub body: Option<String>,
    elapsed: f32,
}

impl MessageOverlay {
    pub fn new(heading: impl Into<String>, body: Option<String>) -> Self {
        Self {
            heading: heading.into(),
            body,
            elapsed: 0.0,
        }
    }

    pub fn act(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    /// Opacity in `[0, 1]` at the current point of the timeline
    pub fn alpha(&self) -> f32 {
        let t = self.elapsed;
        if t < FADE_IN_SECS {
            t / FADE_IN_SECS
        } else if t < FADE_IN_SECS + HOLD_SECS {
            1.0
        } else if t < FADE_IN_SECS + HOLD_SECS + FADE_OUT_SECS {
            1.0 - (t - FADE_IN_SECS - HOLD_SECS) / FADE_OUT_SECS
        } else {
            0.0
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= FADE_IN_SECS + HOLD_SECS + FADE_OUT_SECS
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AttackHighlight {
    player: PlayerId,
    remaining: f32,
}

#[derive(Debug, Default)]
pub struct Hud {
    score: u64,
    message: Option<MessageOverlay>,
    highlights: Vec<AttackHighlight>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per frame with the game's current score
    pub fn update(&mut self, score: u64, delta: f32) {
        self.score = score;

        if let Some(message) = &mut self.message {
            message.act(delta);
        }
        if self.message.as_ref().is_some_and(MessageOverlay::is_finished) {
            self.message = None;
        }

        for highlight in &mut self.highlights {
            highlight.remaining -= delta;
        }
        self.highlights.retain(|h| h.remaining > 0.0);
    }

    pub fn score_text(&self) -> String {
        self.score.to_string()
    }

    /// Replaces any message still showing
    pub fn show_message(&mut self, heading: &str, body: Option<&str>) {
        self.message = Some(MessageOverlay::new(heading, body.map(str::to_string)));
    }

    pub fn message(&self) -> Option<&MessageOverlay> {
        self.message.as_ref()
    }

    pub fn show_attack_from(&mut self, session: &Session, player: PlayerId, strength: i32) {
        if session.player(player).is_none() {
            tracing::warn!("Attack from {} who is not in this session", player);
            return;
        }

        let duration = strength.max(0) as f32 * HIGHLIGHT_SECS_PER_STRENGTH;
        tracing::debug!("Attack from {} with strength {}", player, strength);

        match self.highlights.iter_mut().find(|h| h.player == player) {
            Some(highlight) => highlight.remaining = highlight.remaining.max(duration),
            None if duration > 0.0 => self.highlights.push(AttackHighlight {
                player,
                remaining: duration,
            }),
            None => {}
        }
    }

    pub fn is_highlighted(&self, player: PlayerId) -> bool {
        self.highlights.iter().any(|h| h.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::Player;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_message_timeline() {
        let mut message = MessageOverlay::new("Eat the fruit", Some("Avoid your tail".into()));
        assert_eq!(message.alpha(), 0.0);

        message.act(0.1);
        assert!(approx(message.alpha(), 0.5));

        message.act(1.0);
        assert_eq!(message.alpha(), 1.0);

        message.act(1.35);
        assert!(approx(message.alpha(), 0.5));
        assert!(!message.is_finished());

        message.act(0.3);
        assert_eq!(message.alpha(), 0.0);
        assert!(message.is_finished());
    }

    #[test]
    fn test_hud_drops_finished_message() {
        let mut hud = Hud::new();
        hud.show_message("Eat the fruit", None);

        hud.update(10, 1.0);
        assert_eq!(hud.message().map(|m| m.heading.as_str()), Some("Eat the fruit"));
        assert_eq!(hud.score_text(), "10");

        hud.update(20, 2.0);
        assert!(hud.message().is_none());
        assert_eq!(hud.score_text(), "20");
    }

    #[test]
    fn test_attack_highlight_expires() {
        let session = Session::new(vec![Player::new(1, "snake"), Player::new(2, "snake")], Some(1));
        let mut hud = Hud::new();

        hud.show_attack_from(&session, 2, 2);
        assert!(hud.is_highlighted(2));
        assert!(!hud.is_highlighted(1));

        hud.update(0, 0.5);
        assert!(hud.is_highlighted(2));

        hud.update(0, 0.2);
        assert!(!hud.is_highlighted(2));
    }

    #[test]
    fn test_attack_from_unknown_player_is_ignored() {
        let session = Session::single_player(Player::new(1, "snake"));
        let mut hud = Hud::new();

        hud.show_attack_from(&session, 8, 3);
        assert!(!hud.is_highlighted(8));

        hud.show_attack_from(&session, 1, -1);
        assert!(!hud.is_highlighted(1));
    }
}
