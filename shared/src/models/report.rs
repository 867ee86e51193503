use crate::models::stats::{PerPlayerCount, PlayerCount, ScoreModifiers};
use crate::models::variant::VariantId;
use serde::Serialize;

/// Best score a user reached at one player count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestScore {
    pub num_players: PlayerCount,
    pub score: u32,
    pub modifiers: ScoreModifiers,
    /// Human-readable names of `modifiers`
    pub modifier_names: Vec<&'static str>,
    /// Whether `score` is the variant's max score
    pub is_max: bool,
}

/// Per-variant summary for a user, built only for variants they have played
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantStats {
    pub id: VariantId,
    pub name: String,
    pub num_games: u32,
    pub max_score: u32,
    /// At most one entry per player count, ascending
    pub best_scores: Vec<BestScore>,
    pub average_score: String,
    pub num_strikeouts: u32,
    pub strikeout_rate: String,
}

impl VariantStats {
    pub fn has_max_score(&self) -> bool {
        self.best_scores.iter().any(|best| best.is_max)
    }
}

/// Everything the scores page renders for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub name: String,
    pub date_joined: String,
    pub num_games: u32,
    /// Empty when the user has no regular games
    pub time_played: String,
    pub num_games_speedrun: u32,
    /// Empty when the user has no speedrun games
    pub time_played_speedrun: String,
    pub num_max_scores: u32,
    pub total_max_scores: u64,
    pub percentage_max_scores: String,
    pub num_max_scores_per_type: PerPlayerCount<u32>,
    pub percentage_max_scores_per_type: PerPlayerCount<String>,
    pub variant_stats: Vec<VariantStats>,
}
