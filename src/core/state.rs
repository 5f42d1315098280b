//! Whole-game state: the two players in seat order.

use super::player::Player;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Name shown in an empty name field.
pub const DEFAULT_PLAYER_NAME: &str = "Enter your name";

/// Scores and histories for both players.
///
/// Seat order is fixed: the index of a player is its identity. The fixed-size
/// array means a blob holding any other number of players fails to
/// deserialize and is treated as corrupt. Only the object form
/// `{"players": [...]}` is accepted; unknown fields are ignored.
///
/// # Example
///
/// ```rust
/// use muggins::core::{GameState, HistoryEntry};
///
/// let mut state = GameState::default();
/// state.player_mut(1).unwrap().record(HistoryEntry::now(20));
///
/// assert_eq!(state.player(1).unwrap().score(), 20);
/// assert!(state.player(2).is_none());
///
/// state.reset();
/// assert!(state.players().iter().all(|p| p.score() == 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    players: [Player; PLAYER_COUNT],
}

struct GameStateVisitor;

impl<'de> Visitor<'de> for GameStateVisitor {
    type Value = GameState;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a game object with a `players` field")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<GameState, A::Error> {
        let mut players: Option<[Player; PLAYER_COUNT]> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "players" {
                if players.is_some() {
                    return Err(de::Error::duplicate_field("players"));
                }
                players = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        let players = players.ok_or_else(|| de::Error::missing_field("players"))?;
        Ok(GameState { players })
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GameStateVisitor)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl GameState {
    /// Fresh game: both players share `default_name`, zero scores.
    pub fn new(default_name: &str) -> Self {
        Self {
            players: [Player::new(default_name), Player::new(default_name)],
        }
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Zero every score and clear every history. Names are kept.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.clear();
        }
    }
}
