#[cfg(test)]
mod scores_usecase_tests {
    use crate::config::ScoresConfig;
    use crate::scores::repository::MockScoresRepository;
    use crate::scores::{InMemoryScoresRepository, ScoresUseCase, StaticVariantCatalog};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use shared::{
        PlayerCount, PlayerCountStats, ProfileStats, RawStatsRow, ScoreModifiers, SharedError,
        User, UserStatsMap, Variant, VariantId, DEFAULT_POINTS_PER_SUIT,
    };
    use std::sync::Arc;

    fn players(count: u8) -> PlayerCount {
        PlayerCount::try_from(count).unwrap()
    }

    fn catalog() -> Arc<StaticVariantCatalog> {
        let variants = vec![
            Variant::new(0, "No Variant", 5),
            Variant::new(1, "6 Suits", 6),
            Variant::new(2, "Black (6 Suits)", 6),
            Variant::new(3, "Rainbow (5 Suits)", 5),
        ];
        Arc::new(StaticVariantCatalog::new(variants, DEFAULT_POINTS_PER_SUIT).unwrap())
    }

    fn profile() -> ProfileStats {
        ProfileStats {
            num_games: 12,
            num_games_speedrun: 0,
            time_played_seconds: 90_061,
            time_played_speedrun_seconds: 0,
            date_joined: Utc.with_ymd_and_hms(2019, 3, 22, 18, 0, 0).unwrap(),
        }
    }

    fn stats() -> UserStatsMap {
        let mut stats = UserStatsMap::new();
        stats.insert(
            VariantId(0),
            RawStatsRow::new()
                .with(
                    players(2),
                    PlayerCountStats {
                        num_games: 8,
                        best_score: 25,
                        num_strikeouts: 2,
                        sum_scores: 160,
                        modifiers: ScoreModifiers::NONE,
                    },
                )
                .with(
                    players(3),
                    PlayerCountStats {
                        num_games: 1,
                        best_score: 24,
                        num_strikeouts: 0,
                        sum_scores: 24,
                        modifiers: ScoreModifiers::NONE,
                    },
                ),
        );
        stats.insert(
            VariantId(2),
            RawStatsRow::new().with(
                players(4),
                PlayerCountStats {
                    num_games: 3,
                    best_score: 30,
                    num_strikeouts: 0,
                    sum_scores: 75,
                    modifiers: ScoreModifiers::ONE_EXTRA_CARD,
                },
            ),
        );
        stats
    }

    fn alice() -> User {
        User {
            id: 7,
            username: "Alice".to_string(),
        }
    }

    fn in_memory_usecase() -> ScoresUseCase<InMemoryScoresRepository, StaticVariantCatalog> {
        let repo = InMemoryScoresRepository::new().with_user(alice(), profile(), stats());
        ScoresUseCase::new(repo, catalog())
    }

    #[tokio::test]
    async fn test_report_for_known_player() {
        let report = in_memory_usecase().get_scores_report("alice").await.unwrap();

        assert_eq!(report.name, "Alice");
        assert_eq!(report.date_joined, "March 22nd, 2019");
        assert_eq!(report.num_games, 12);
        assert_eq!(report.time_played, "1 day, 1 hour, 1 minute");
        assert_eq!(report.num_games_speedrun, 0);
        assert_eq!(report.time_played_speedrun, "");

        // Variants 0 and 2 both reach their max score
        assert_eq!(report.num_max_scores, 2);
        assert_eq!(report.total_max_scores, 20);
        assert_eq!(report.percentage_max_scores, "10.0");
        assert_eq!(report.num_max_scores_per_type[players(2)], 1);
        assert_eq!(report.num_max_scores_per_type[players(4)], 1);
        assert_eq!(report.percentage_max_scores_per_type[players(2)], "25.0");
        assert_eq!(report.percentage_max_scores_per_type[players(3)], "0.0");

        let ids: Vec<VariantId> = report.variant_stats.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VariantId(0), VariantId(2)]);
        assert_eq!(report.variant_stats[0].num_games, 9);
        assert_eq!(report.variant_stats[0].average_score, "20.4");
        assert_eq!(report.variant_stats[0].strikeout_rate, "22.2%");
        assert_eq!(report.variant_stats[1].max_score, 30);
    }

    #[tokio::test]
    async fn test_unknown_player_is_not_found() {
        let err = in_memory_usecase()
            .get_scores_report("nobody")
            .await
            .unwrap_err();

        assert_eq!(err, SharedError::NotFound("Player \"nobody\" not found".to_string()));
    }

    #[tokio::test]
    async fn test_display_precision_is_configurable() {
        let repo = InMemoryScoresRepository::new().with_user(alice(), profile(), stats());
        let config = ScoresConfig {
            points_per_suit: DEFAULT_POINTS_PER_SUIT,
            display_precision: 2,
        };
        let usecase = ScoresUseCase::with_config(repo, catalog(), &config);

        let report = usecase.get_scores_report("Alice").await.unwrap();
        assert_eq!(report.percentage_max_scores, "10.00");
        assert_eq!(report.variant_stats[0].average_score, "20.44");
    }

    #[tokio::test]
    async fn test_profile_failure_is_propagated() {
        let mut repo = MockScoresRepository::new();
        repo.expect_find_user_by_name()
            .times(1)
            .returning(|_| Ok(Some(alice())));
        repo.expect_get_profile_stats()
            .times(1)
            .returning(|_| Err(SharedError::Database("connection reset".to_string())));
        repo.expect_get_all_user_stats().never();

        let usecase = ScoresUseCase::new(repo, catalog());
        let err = usecase.get_scores_report("alice").await.unwrap_err();

        assert_eq!(err, SharedError::Database("connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_stats_failure_is_propagated() {
        let mut repo = MockScoresRepository::new();
        repo.expect_find_user_by_name()
            .returning(|_| Ok(Some(alice())));
        repo.expect_get_profile_stats().returning(|_| Ok(profile()));
        repo.expect_get_all_user_stats()
            .times(1)
            .returning(|_| Err(SharedError::Database("timeout".to_string())));

        let usecase = ScoresUseCase::new(repo, catalog());
        let err = usecase.get_scores_report("alice").await.unwrap_err();

        assert!(matches!(err, SharedError::Database(_)));
    }

    #[tokio::test]
    async fn test_integrity_violation_aborts_report() {
        let mut bad_stats = stats();
        bad_stats.insert(
            VariantId(3),
            RawStatsRow::new().with(
                players(5),
                PlayerCountStats {
                    num_games: 1,
                    best_score: 26,
                    num_strikeouts: 0,
                    sum_scores: 26,
                    modifiers: ScoreModifiers::NONE,
                },
            ),
        );

        let mut repo = MockScoresRepository::new();
        repo.expect_find_user_by_name()
            .returning(|_| Ok(Some(alice())));
        repo.expect_get_profile_stats().returning(|_| Ok(profile()));
        repo.expect_get_all_user_stats()
            .returning(move |_| Ok(bad_stats.clone()));

        let usecase = ScoresUseCase::new(repo, catalog());
        let err = usecase.get_scores_report("alice").await.unwrap_err();

        assert!(err.is_integrity_violation());
    }

    #[test]
    fn test_build_report_without_games() {
        let usecase = in_memory_usecase();
        let empty_profile = ProfileStats {
            num_games: 0,
            time_played_seconds: 0,
            ..profile()
        };

        let report = usecase
            .build_report(&alice(), &empty_profile, &UserStatsMap::new())
            .unwrap();

        assert_eq!(report.time_played, "");
        assert!(report.variant_stats.is_empty());
        assert_eq!(report.num_max_scores, 0);
        assert_eq!(report.percentage_max_scores, "0.0");
        assert_eq!(report.total_max_scores, 20);
    }
}
