pub mod config;
pub mod error;
pub mod health;
pub mod middleware;

pub mod scores {
    pub mod achievements;
    pub mod assembler;
    pub mod catalog;
    pub mod controller;
    pub mod engine;
    pub mod repository;
    pub mod usecase;

    pub use achievements::{AchievementCalculator, AchievementSummary};
    pub use assembler::{EnglishFormatter, PresentationFormatter, ReportAssembler};
    pub use catalog::{StaticVariantCatalog, VariantCatalog};
    pub use controller::DefaultScoresUseCase;
    pub use engine::{StatsAggregator, VariantAggregation};
    pub use repository::{InMemoryScoresRepository, ScoresRepository};
    pub use usecase::ScoresUseCase;
}


#[cfg(test)]
mod scores_usecase_tests;
