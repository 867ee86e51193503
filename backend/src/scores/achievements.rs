use crate::config::ScoresConfig;
use shared::format::format_percentage;
use shared::{PerPlayerCount, PLAYER_COUNT_SLOTS};

/// Max score counters turned into totals and display percentages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementSummary {
    pub num_max_scores: u32,
    /// Every (variant, player count) pair that could be maxed
    pub total_max_scores: u64,
    pub percentage_max_scores: String,
    pub num_max_scores_per_type: PerPlayerCount<u32>,
    pub percentage_max_scores_per_type: PerPlayerCount<String>,
}

/// Derives max score percentages from the aggregated counters
#[derive(Debug, Clone)]
pub struct AchievementCalculator {
    display_precision: usize,
}

impl Default for AchievementCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementCalculator {
    pub fn new() -> Self {
        Self::with_config(&ScoresConfig::default())
    }

    pub fn with_config(config: &ScoresConfig) -> Self {
        Self {
            display_precision: config.display_precision,
        }
    }

    pub fn total_max_scores(total_variant_count: usize) -> u64 {
        u64::try_from(total_variant_count)
            .unwrap_or(u64::MAX)
            .saturating_mul(PLAYER_COUNT_SLOTS as u64)
    }

    /// Percentages of the whole catalog. An empty catalog yields 0 everywhere.
    pub fn calculate(
        &self,
        num_max_scores: u32,
        num_max_scores_per_type: PerPlayerCount<u32>,
        total_variant_count: usize,
    ) -> AchievementSummary {
        let total_max_scores = Self::total_max_scores(total_variant_count);
        let percentage_max_scores = format_percentage(
            u64::from(num_max_scores),
            total_max_scores,
            self.display_precision,
        );
        let total_variant_count = u64::try_from(total_variant_count).unwrap_or(u64::MAX);
        let percentage_max_scores_per_type = num_max_scores_per_type.map(|&count| {
            format_percentage(u64::from(count), total_variant_count, self.display_precision)
        });

        AchievementSummary {
            num_max_scores,
            total_max_scores,
            percentage_max_scores,
            num_max_scores_per_type,
            percentage_max_scores_per_type,
        }
    }
}
