/// Static description of one game in the compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDetails {
    /// Identifier used on the wire
    pub id: &'static str,
    pub name: &'static str,
}

pub const ASTEROIDS: GameDetails = GameDetails {
    id: "asteroids",
    name: "Asteroids",
};

pub const SNAKE: GameDetails = GameDetails {
    id: "snake",
    name: "Snake",
};

pub const ALL: &[GameDetails] = &[ASTEROIDS, SNAKE];

pub fn find(id: &str) -> Option<&'static GameDetails> {
    ALL.iter().find(|game| game.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("snake"), Some(&SNAKE));
        assert_eq!(find("asteroids").map(|g| g.name), Some("Asteroids"));
        assert_eq!(find("pong"), None);
    }
}
