use super::catalog::VariantCatalog;
use crate::config::ScoresConfig;
use log::{debug, error};
use shared::format::{format_percentage, format_ratio};
use shared::{
    BestScore, PerPlayerCount, RawStatsRow, Result, SharedError, UserStatsMap, Variant,
    VariantStats,
};

/// Shown instead of an average or a rate that has nothing to report
pub const EMPTY_STAT: &str = "-";

/// Result of folding a user's raw rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAggregation {
    /// Variants with a max score at one or more player counts
    pub num_max_scores: u32,
    /// Variants with a max score at exactly that player count
    pub num_max_scores_per_type: PerPlayerCount<u32>,
    /// One entry per played variant, ascending by id
    pub variant_stats: Vec<VariantStats>,
}

/// Folds per-variant, per-player-count rows into display-ready summaries
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    display_precision: usize,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAggregator {
    /// Creates an aggregator with default configuration
    pub fn new() -> Self {
        Self::with_config(&ScoresConfig::default())
    }

    /// Creates an aggregator with custom configuration
    pub fn with_config(config: &ScoresConfig) -> Self {
        Self {
            display_precision: config.display_precision,
        }
    }

    /// Builds the variant list and max score counters for one user.
    ///
    /// Fails without partial output if a row names a variant the catalog does
    /// not know, or if a best score is above the variant's max score.
    pub fn aggregate<C>(&self, stats: &UserStatsMap, catalog: &C) -> Result<VariantAggregation>
    where
        C: VariantCatalog + ?Sized,
    {
        let mut num_max_scores: u32 = 0;
        let mut num_max_scores_per_type: PerPlayerCount<u32> = PerPlayerCount::default();
        let mut variant_stats = Vec::new();

        for (&id, row) in stats {
            let variant = catalog.get(id).ok_or_else(|| {
                error!("Stats row references variant {} which is not in the catalog", id);
                SharedError::MissingCatalogEntry(id.get())
            })?;
            let max_score = catalog
                .max_score(id)
                .ok_or(SharedError::MissingCatalogEntry(id.get()))?;

            if row.is_empty() {
                debug!("Skipping variant {} with no recorded games", id);
                continue;
            }

            let entry = self.build_variant_stats(variant, max_score, row)?;
            if entry.has_max_score() {
                num_max_scores += 1;
                for best in entry.best_scores.iter().filter(|best| best.is_max) {
                    num_max_scores_per_type[best.num_players] += 1;
                }
            }
            variant_stats.push(entry);
        }

        debug!(
            "Aggregated {} played variants, {} with a max score",
            variant_stats.len(),
            num_max_scores
        );

        Ok(VariantAggregation {
            num_max_scores,
            num_max_scores_per_type,
            variant_stats,
        })
    }

    fn build_variant_stats(
        &self,
        variant: &Variant,
        max_score: u32,
        row: &RawStatsRow,
    ) -> Result<VariantStats> {
        let mut num_games: u32 = 0;
        let mut num_strikeouts: u32 = 0;
        let mut sum_scores: u64 = 0;
        let mut best_scores = Vec::new();

        for (count, stats) in row.played() {
            if stats.best_score > max_score {
                error!(
                    "Best score {} for variant {} at {} players exceeds max score {}",
                    stats.best_score, variant.id, count, max_score
                );
                return Err(SharedError::DataIntegrity {
                    variant_id: variant.id.get(),
                    num_players: count.get(),
                    best_score: stats.best_score,
                    max_score,
                });
            }

            num_games = num_games.saturating_add(stats.num_games);
            num_strikeouts = num_strikeouts.saturating_add(stats.num_strikeouts);
            sum_scores = sum_scores.saturating_add(stats.sum_scores);
            best_scores.push(BestScore {
                num_players: count,
                score: stats.best_score,
                modifiers: stats.modifiers,
                modifier_names: stats.modifiers.names(),
                is_max: stats.best_score == max_score,
            });
        }

        Ok(VariantStats {
            id: variant.id,
            name: variant.name.clone(),
            num_games,
            max_score,
            best_scores,
            average_score: self.average_score(sum_scores, num_games),
            num_strikeouts,
            strikeout_rate: self.strikeout_rate(num_strikeouts, num_games),
        })
    }

    /// Mean final score, or "-" when there is nothing to average
    pub fn average_score(&self, sum_scores: u64, num_games: u32) -> String {
        if sum_scores == 0 || num_games == 0 {
            return EMPTY_STAT.to_string();
        }
        format_ratio(sum_scores, u64::from(num_games), 1, self.display_precision)
    }

    /// Share of games that struck out, or "-" when none did
    pub fn strikeout_rate(&self, num_strikeouts: u32, num_games: u32) -> String {
        if num_strikeouts == 0 || num_games == 0 {
            return EMPTY_STAT.to_string();
        }
        let rate = format_percentage(
            u64::from(num_strikeouts),
            u64::from(num_games),
            self.display_precision,
        );
        format!("{}%", rate)
    }
}
