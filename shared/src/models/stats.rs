use crate::error::SharedError;
use crate::models::variant::VariantId;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of supported player counts (2 through 6)
pub const PLAYER_COUNT_SLOTS: usize = 5;

/// Number of players at the table, always within 2..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 6;

    pub const ALL: [PlayerCount; PLAYER_COUNT_SLOTS] = [
        PlayerCount(2),
        PlayerCount(3),
        PlayerCount(4),
        PlayerCount(5),
        PlayerCount(6),
    ];

    pub fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = SharedError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SharedError::InvalidPlayerCount(value))
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value per player count, stored in a fixed array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerPlayerCount<T>([T; PLAYER_COUNT_SLOTS]);

impl<T> PerPlayerCount<T> {
    pub fn from_fn(mut f: impl FnMut(PlayerCount) -> T) -> Self {
        Self(std::array::from_fn(|i| f(PlayerCount::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerCount, &T)> {
        PlayerCount::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerPlayerCount<U> {
        PerPlayerCount(std::array::from_fn(|i| f(&self.0[i])))
    }
}

impl<T> Index<PlayerCount> for PerPlayerCount<T> {
    type Output = T;

    fn index(&self, count: PlayerCount) -> &T {
        &self.0[count.index()]
    }
}

impl<T> IndexMut<PlayerCount> for PerPlayerCount<T> {
    fn index_mut(&mut self, count: PlayerCount) -> &mut T {
        &mut self.0[count.index()]
    }
}

// Rendered as {"2": .., "3": .., ..} for the presentation layer
impl<T: Serialize> Serialize for PerPlayerCount<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PLAYER_COUNT_SLOTS))?;
        for (count, value) in self.iter() {
            map.serialize_entry(&count.get(), value)?;
        }
        map.end()
    }
}

/// Rule modifiers a best score was achieved under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreModifiers(u8);

impl ScoreModifiers {
    pub const NONE: ScoreModifiers = ScoreModifiers(0);
    pub const DECK_PLAYS: ScoreModifiers = ScoreModifiers(1 << 0);
    pub const EMPTY_CLUES: ScoreModifiers = ScoreModifiers(1 << 1);
    pub const ONE_EXTRA_CARD: ScoreModifiers = ScoreModifiers(1 << 2);
    pub const ONE_LESS_CARD: ScoreModifiers = ScoreModifiers(1 << 3);
    pub const ALL_OR_NOTHING: ScoreModifiers = ScoreModifiers(1 << 4);
    pub const DETRIMENTAL_CHARACTERS: ScoreModifiers = ScoreModifiers(1 << 5);

    const NAMES: [(ScoreModifiers, &'static str); 6] = [
        (Self::DECK_PLAYS, "Bottom-Deck Blind-Plays"),
        (Self::EMPTY_CLUES, "Empty Clues"),
        (Self::ONE_EXTRA_CARD, "One Extra Card"),
        (Self::ONE_LESS_CARD, "One Less Card"),
        (Self::ALL_OR_NOTHING, "All or Nothing"),
        (Self::DETRIMENTAL_CHARACTERS, "Detrimental Characters"),
    ];

    pub fn contains(self, other: ScoreModifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for ScoreModifiers {
    type Output = ScoreModifiers;

    fn bitor(self, rhs: ScoreModifiers) -> ScoreModifiers {
        ScoreModifiers(self.0 | rhs.0)
    }
}

/// Stored results for one (variant, player count) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerCountStats {
    pub num_games: u32,
    pub best_score: u32,
    pub num_strikeouts: u32,
    /// Sum of final scores, used for the average
    pub sum_scores: u64,
    #[serde(default)]
    pub modifiers: ScoreModifiers,
}

impl PlayerCountStats {
    pub fn is_played(&self) -> bool {
        self.num_games > 0
    }
}

/// All stored results of one user for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawStatsRow {
    pub by_player_count: PerPlayerCount<Option<PlayerCountStats>>,
}

impl RawStatsRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the sub-record for a player count, returning any previous one
    pub fn insert(&mut self, count: PlayerCount, stats: PlayerCountStats) -> Option<PlayerCountStats> {
        self.by_player_count[count].replace(stats)
    }

    pub fn with(mut self, count: PlayerCount, stats: PlayerCountStats) -> Self {
        self.insert(count, stats);
        self
    }

    /// Sub-records with at least one game, ascending by player count
    pub fn played(&self) -> impl Iterator<Item = (PlayerCount, &PlayerCountStats)> {
        self.by_player_count
            .iter()
            .filter_map(|(count, stats)| stats.as_ref().filter(|s| s.is_played()).map(|s| (count, s)))
    }

    pub fn is_empty(&self) -> bool {
        self.played().next().is_none()
    }
}

/// Every stored row of a user, keyed by variant
pub type UserStatsMap = BTreeMap<VariantId, RawStatsRow>;

/// Account-wide counters; regular and speedrun games never overlap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Games played under regular (non-speedrun) rules
    pub num_games: u32,
    pub num_games_speedrun: u32,
    pub time_played_seconds: u64,
    pub time_played_speedrun_seconds: u64,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}
