use serde::Deserialize;
use shared::{
    PlayerCount, PlayerCountStats, ProfileStats, RawStatsRow, Result, SharedError, User,
    UserStatsMap, VariantId,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Storage seam for everything the scores page reads
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ScoresRepository: Send + Sync {
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>>;
    async fn get_profile_stats(&self, user_id: u64) -> Result<ProfileStats>;
    async fn get_all_user_stats(&self, user_id: u64) -> Result<UserStatsMap>;
}

/// One stored row as it comes out of the stats table
#[derive(Debug, Clone, Deserialize)]
pub struct StatsRecord {
    pub variant_id: VariantId,
    pub num_players: PlayerCount,
    #[serde(flatten)]
    pub stats: PlayerCountStats,
}

#[derive(Debug, Clone, Deserialize)]
struct UserRecord {
    id: u64,
    username: String,
    profile: ProfileStats,
    #[serde(default)]
    stats: Vec<StatsRecord>,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    users: Vec<UserRecord>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    profile: ProfileStats,
    stats: UserStatsMap,
}

/// Groups flat rows by variant. A second row for the same (variant, player
/// count) pair is rejected.
pub fn group_stats_records(records: Vec<StatsRecord>) -> Result<UserStatsMap> {
    let mut stats = UserStatsMap::new();
    for record in records {
        let row = stats.entry(record.variant_id).or_insert_with(RawStatsRow::new);
        if row.insert(record.num_players, record.stats).is_some() {
            return Err(SharedError::Validation(format!(
                "Duplicate stats row for variant {} at {} players",
                record.variant_id, record.num_players
            )));
        }
    }
    Ok(stats)
}

/// Repository backed by an in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoresRepository {
    users: Arc<HashMap<u64, StoredUser>>,
    ids_by_name: Arc<HashMap<String, u64>>,
}

impl InMemoryScoresRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with their counters and raw rows
    pub fn with_user(mut self, user: User, profile: ProfileStats, stats: UserStatsMap) -> Self {
        let users = Arc::make_mut(&mut self.users);
        let ids_by_name = Arc::make_mut(&mut self.ids_by_name);
        ids_by_name.insert(user.username.to_lowercase(), user.id);
        users.insert(user.id, StoredUser { user, profile, stats });
        self
    }

    /// Loads users from a JSON fixture file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SharedError::Database(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let fixture: FixtureFile = serde_json::from_str(contents)?;
        let mut repo = Self::new();
        for record in fixture.users {
            let user = User {
                id: record.id,
                username: record.username,
            };
            let stats = group_stats_records(record.stats)?;
            repo = repo.with_user(user, record.profile, stats);
        }
        log::info!("Loaded scores data for {} users", repo.users.len());
        Ok(repo)
    }

    fn stored(&self, user_id: u64) -> Result<&StoredUser> {
        self.users
            .get(&user_id)
            .ok_or_else(|| SharedError::NotFound(format!("User {} not found", user_id)))
    }
}

#[async_trait::async_trait]
impl ScoresRepository for InMemoryScoresRepository {
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>> {
        Ok(self
            .ids_by_name
            .get(&name.to_lowercase())
            .and_then(|id| self.users.get(id))
            .map(|stored| stored.user.clone()))
    }

    async fn get_profile_stats(&self, user_id: u64) -> Result<ProfileStats> {
        Ok(self.stored(user_id)?.profile.clone())
    }

    async fn get_all_user_stats(&self, user_id: u64) -> Result<UserStatsMap> {
        Ok(self.stored(user_id)?.stats.clone())
    }
}
