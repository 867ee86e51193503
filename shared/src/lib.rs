pub mod models {
    pub mod variant;
    pub mod stats;
    pub mod report;
}

pub mod error;
pub mod format;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    variant::{Variant, VariantId, DEFAULT_POINTS_PER_SUIT},
    stats::{
        PerPlayerCount, PlayerCount, PlayerCountStats, ProfileStats, RawStatsRow,
        ScoreModifiers, User, UserStatsMap, PLAYER_COUNT_SLOTS,
    },
    report::{AggregateReport, BestScore, VariantStats},
};
