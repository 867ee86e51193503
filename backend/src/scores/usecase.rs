use super::achievements::AchievementCalculator;
use super::assembler::ReportAssembler;
use super::catalog::VariantCatalog;
use super::engine::StatsAggregator;
use super::repository::ScoresRepository;
use crate::config::ScoresConfig;
use log::error;
use shared::{AggregateReport, ProfileStats, Result, SharedError, User, UserStatsMap};
use std::sync::Arc;

/// Use case behind the scores page
pub struct ScoresUseCase<R: ScoresRepository, C: VariantCatalog> {
    repo: R,
    catalog: Arc<C>,
    aggregator: StatsAggregator,
    calculator: AchievementCalculator,
    assembler: ReportAssembler,
}

impl<R: ScoresRepository, C: VariantCatalog> ScoresUseCase<R, C> {
    /// Creates a use case with the default scoring configuration
    pub fn new(repo: R, catalog: Arc<C>) -> Self {
        Self::with_config(repo, catalog, &ScoresConfig::default())
    }

    pub fn with_config(repo: R, catalog: Arc<C>, config: &ScoresConfig) -> Self {
        Self {
            repo,
            catalog,
            aggregator: StatsAggregator::with_config(config),
            calculator: AchievementCalculator::with_config(config),
            assembler: ReportAssembler::new(),
        }
    }

    /// Builds the full report for a player, looked up by name
    pub async fn get_scores_report(&self, player_name: &str) -> Result<AggregateReport> {
        let user = self
            .repo
            .find_user_by_name(player_name)
            .await?
            .ok_or_else(|| SharedError::NotFound(format!("Player \"{}\" not found", player_name)))?;

        let profile = self.repo.get_profile_stats(user.id).await.map_err(|e| {
            error!("Failed to get the profile stats for {}: {}", describe(&user), e);
            e
        })?;

        let stats = self.repo.get_all_user_stats(user.id).await.map_err(|e| {
            error!(
                "Failed to get all of the variant-specific stats for {}: {}",
                describe(&user),
                e
            );
            e
        })?;

        self.build_report(&user, &profile, &stats).map_err(|e| {
            error!("Failed to build the scores report for {}: {}", describe(&user), e);
            e
        })
    }

    /// Runs aggregation, percentages and assembly on already fetched data
    pub fn build_report(
        &self,
        user: &User,
        profile: &ProfileStats,
        stats: &UserStatsMap,
    ) -> Result<AggregateReport> {
        let aggregation = self.aggregator.aggregate(stats, self.catalog.as_ref())?;
        let achievements = self.calculator.calculate(
            aggregation.num_max_scores,
            aggregation.num_max_scores_per_type,
            self.catalog.len(),
        );

        Ok(self
            .assembler
            .assemble(&user.username, profile, aggregation, achievements))
    }
}

fn describe(user: &User) -> String {
    format!("user \"{}\" ({})", user.username, user.id)
}
