use super::achievements::AchievementSummary;
use super::engine::VariantAggregation;
use chrono::{DateTime, Utc};
use shared::format::{format_date_joined, seconds_to_duration_string};
use shared::{AggregateReport, ProfileStats};

/// Turns dates and elapsed time into display strings
pub trait PresentationFormatter: Send + Sync {
    fn format_date(&self, date: &DateTime<Utc>) -> String;
    fn format_duration(&self, seconds: u64) -> String;
}

/// "January 2nd, 2006" dates and "1 day, 2 hours" durations
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFormatter;

impl PresentationFormatter for EnglishFormatter {
    fn format_date(&self, date: &DateTime<Utc>) -> String {
        format_date_joined(date)
    }

    fn format_duration(&self, seconds: u64) -> String {
        seconds_to_duration_string(seconds)
    }
}

/// Puts profile counters and aggregation output together for rendering
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler<F = EnglishFormatter> {
    formatter: F,
}

impl ReportAssembler<EnglishFormatter> {
    pub fn new() -> Self {
        Self::with_formatter(EnglishFormatter)
    }
}

impl<F: PresentationFormatter> ReportAssembler<F> {
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn assemble(
        &self,
        name: &str,
        profile: &ProfileStats,
        aggregation: VariantAggregation,
        achievements: AchievementSummary,
    ) -> AggregateReport {
        AggregateReport {
            name: name.to_string(),
            date_joined: self.formatter.format_date(&profile.date_joined),
            num_games: profile.num_games,
            time_played: self.time_played(profile.num_games, profile.time_played_seconds),
            num_games_speedrun: profile.num_games_speedrun,
            time_played_speedrun: self.time_played(
                profile.num_games_speedrun,
                profile.time_played_speedrun_seconds,
            ),
            num_max_scores: achievements.num_max_scores,
            total_max_scores: achievements.total_max_scores,
            percentage_max_scores: achievements.percentage_max_scores,
            num_max_scores_per_type: achievements.num_max_scores_per_type,
            percentage_max_scores_per_type: achievements.percentage_max_scores_per_type,
            variant_stats: aggregation.variant_stats,
        }
    }

    // Nothing played means nothing to show, not "0 seconds"
    fn time_played(&self, num_games: u32, seconds: u64) -> String {
        if num_games == 0 || seconds == 0 {
            return String::new();
        }
        self.formatter.format_duration(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared::PerPlayerCount;

    struct PanickingDurations;

    impl PresentationFormatter for PanickingDurations {
        fn format_date(&self, _date: &DateTime<Utc>) -> String {
            "joined".to_string()
        }

        fn format_duration(&self, seconds: u64) -> String {
            assert!(seconds > 0, "zero durations must not reach the formatter");
            format!("{}s", seconds)
        }
    }

    fn profile(num_games: u32, seconds: u64, speedrun_games: u32, speedrun_seconds: u64) -> ProfileStats {
        ProfileStats {
            num_games,
            num_games_speedrun: speedrun_games,
            time_played_seconds: seconds,
            time_played_speedrun_seconds: speedrun_seconds,
            date_joined: Utc.with_ymd_and_hms(2020, 3, 22, 10, 0, 0).unwrap(),
        }
    }

    fn empty_aggregation() -> VariantAggregation {
        VariantAggregation {
            num_max_scores: 0,
            num_max_scores_per_type: PerPlayerCount::default(),
            variant_stats: vec![],
        }
    }

    fn empty_achievements() -> AchievementSummary {
        AchievementSummary {
            num_max_scores: 0,
            total_max_scores: 0,
            percentage_max_scores: "0.0".to_string(),
            num_max_scores_per_type: PerPlayerCount::default(),
            percentage_max_scores_per_type: PerPlayerCount::from_fn(|_| "0.0".to_string()),
        }
    }

    #[test]
    fn test_report_uses_english_formatting() {
        let report = ReportAssembler::new().assemble(
            "alice",
            &profile(12, 7380, 2, 600),
            empty_aggregation(),
            empty_achievements(),
        );

        assert_eq!(report.name, "alice");
        assert_eq!(report.date_joined, "March 22nd, 2020");
        assert_eq!(report.num_games, 12);
        assert_eq!(report.time_played, "2 hours, 3 minutes");
        assert_eq!(report.num_games_speedrun, 2);
        assert_eq!(report.time_played_speedrun, "10 minutes");
    }

    #[test]
    fn test_no_speedrun_games_leaves_time_empty() {
        let report = ReportAssembler::with_formatter(PanickingDurations).assemble(
            "bob",
            &profile(5, 900, 0, 0),
            empty_aggregation(),
            empty_achievements(),
        );

        assert_eq!(report.time_played, "900s");
        assert_eq!(report.time_played_speedrun, "");
    }

    #[test]
    fn test_no_games_at_all_leaves_both_times_empty() {
        let report = ReportAssembler::with_formatter(PanickingDurations).assemble(
            "carol",
            &profile(0, 0, 0, 0),
            empty_aggregation(),
            empty_achievements(),
        );

        assert_eq!(report.time_played, "");
        assert_eq!(report.time_played_speedrun, "");
        assert_eq!(report.date_joined, "joined");
    }

    #[test]
    fn test_achievement_fields_are_carried_over() {
        let mut achievements = empty_achievements();
        achievements.num_max_scores = 4;
        achievements.total_max_scores = 50;
        achievements.percentage_max_scores = "8.0".to_string();

        let report = ReportAssembler::new().assemble(
            "dave",
            &profile(1, 60, 0, 0),
            empty_aggregation(),
            achievements,
        );

        assert_eq!(report.num_max_scores, 4);
        assert_eq!(report.total_max_scores, 50);
        assert_eq!(report.percentage_max_scores, "8.0");
        assert!(report.variant_stats.is_empty());
    }
}
