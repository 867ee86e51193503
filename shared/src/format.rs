use chrono::{DateTime, Datelike, Utc};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Formats a join date like "January 2nd, 2006"
pub fn format_date_joined(date: &DateTime<Utc>) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn pluralize(amount: u64, unit: &str) -> String {
    if amount == 1 {
        format!("{} {}", amount, unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}

/// Converts elapsed seconds to a string like "1 day, 2 hours, 3 minutes".
/// Seconds are only shown for durations shorter than a minute.
pub fn seconds_to_duration_string(seconds: u64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        return pluralize(seconds, "second");
    }

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| pluralize(*amount, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `numerator * scale / denominator` rounded half away from zero at
/// `precision` decimal places, rendered with exactly that many decimals.
///
/// Works on integers throughout so that ties such as 11/2000 of 100 (0.55)
/// round up. A zero denominator renders as 0.
pub fn format_ratio(numerator: u64, denominator: u64, scale: u64, precision: usize) -> String {
    let factor = 10u128.saturating_pow(precision as u32);
    let scaled = if denominator == 0 {
        0
    } else {
        let numerator = u128::from(numerator)
            .saturating_mul(u128::from(scale))
            .saturating_mul(factor);
        let denominator = u128::from(denominator);
        numerator.saturating_mul(2).saturating_add(denominator) / (denominator * 2)
    };

    if precision == 0 {
        return scaled.to_string();
    }
    format!(
        "{}.{:0width$}",
        scaled / factor,
        scaled % factor,
        width = precision
    )
}

/// `numerator / denominator * 100` at `precision` decimals, 0 when the
/// denominator is 0
pub fn format_percentage(numerator: u64, denominator: u64, precision: usize) -> String {
    format_ratio(numerator, denominator, 100, precision)
}
