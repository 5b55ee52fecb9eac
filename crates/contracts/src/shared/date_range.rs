use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive reporting window selected in the dashboard.
///
/// Invariant: `start <= end` after normalization. Preset windows are
/// normalized to whole days — start at 00:00:00.000, end at 23:59:59.999.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Preset name, or "Custom"
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Preset labels offered by the range picker, in menu order
pub const PRESET_LABELS: [&str; 7] = [
    "Today",
    "Yesterday",
    "Last 7 Days",
    "Last 30 Days",
    "Month to Date",
    "Week to Date",
    "Lifetime",
];

/// Start of recorded history for the "Lifetime" preset
const LIFETIME_START: (i32, u32, u32) = (2015, 1, 1);

fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_milli_opt(0, 0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(dt)
}

fn end_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(dt)
}

impl DateRange {
    /// Build a preset window relative to `now`.
    ///
    /// Unknown labels produce today's window under the given label, so a
    /// stale client value degrades to something sensible instead of failing.
    pub fn preset(label: &str, now: DateTime<Utc>) -> Self {
        let (start, end) = match label {
            "Today" => (now, now),
            "Yesterday" => (now - Duration::days(1), now - Duration::days(1)),
            "Last 7 Days" => (now - Duration::days(7), now),
            "Last 30 Days" => (now - Duration::days(30), now),
            "Month to Date" => (now.with_day(1).unwrap_or(now), now),
            "Week to Date" => {
                // Week starts on Sunday
                let back = now.weekday().num_days_from_sunday() as i64;
                (now - Duration::days(back), now)
            }
            "Lifetime" => {
                let (y, m, d) = LIFETIME_START;
                let floor = Utc
                    .with_ymd_and_hms(y, m, d, 0, 0, 0)
                    .single()
                    .unwrap_or(now);
                (floor, now)
            }
            _ => (now, now),
        };
        Self::normalized(label, start, end)
    }

    /// Build a custom window from two user-picked instants.
    pub fn custom(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::normalized("Custom", start, end)
    }

    /// Normalize to day boundaries and restore the start <= end invariant
    /// by swapping if violated.
    fn normalized(label: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let mut start = start_of_day(start);
        let mut end = end_of_day(end);
        if start > end {
            std::mem::swap(&mut start, &mut end);
            start = start_of_day(start);
            end = end_of_day(end);
        }
        Self {
            label: label.to_string(),
            start,
            end,
        }
    }

    /// Inclusive containment on both boundaries
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn today_spans_whole_day() {
        let range = DateRange::preset("Today", at("2026-10-25T14:30:00Z"));
        assert_eq!(range.start, at("2026-10-25T00:00:00Z"));
        assert_eq!(range.end, at("2026-10-25T23:59:59.999Z"));
    }

    #[test]
    fn yesterday_is_previous_whole_day() {
        let range = DateRange::preset("Yesterday", at("2026-10-25T14:30:00Z"));
        assert_eq!(range.start, at("2026-10-24T00:00:00Z"));
        assert_eq!(range.end, at("2026-10-24T23:59:59.999Z"));
    }

    #[test]
    fn week_to_date_starts_on_sunday() {
        // 2026-10-25 is a Sunday
        let range = DateRange::preset("Week to Date", at("2026-10-28T10:00:00Z"));
        assert_eq!(range.start, at("2026-10-25T00:00:00Z"));
    }

    #[test]
    fn month_to_date_starts_on_the_first() {
        let range = DateRange::preset("Month to Date", at("2026-10-25T14:30:00Z"));
        assert_eq!(range.start, at("2026-10-01T00:00:00Z"));
    }

    #[test]
    fn lifetime_floor_is_2015() {
        let range = DateRange::preset("Lifetime", at("2026-10-25T14:30:00Z"));
        assert_eq!(range.start, at("2015-01-01T00:00:00Z"));
    }

    #[test]
    fn custom_swaps_inverted_bounds() {
        let range = DateRange::custom(at("2026-10-20T00:00:00Z"), at("2026-10-10T12:00:00Z"));
        assert!(range.start <= range.end);
        assert_eq!(range.start, at("2026-10-10T00:00:00Z"));
        assert_eq!(range.end, at("2026-10-20T23:59:59.999Z"));
    }

    #[test]
    fn containment_is_inclusive_on_both_ends() {
        let range = DateRange::preset("Today", at("2026-10-25T12:00:00Z"));
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(range.end + Duration::milliseconds(1)));
        assert!(!range.contains(range.start - Duration::milliseconds(1)));
    }
}
