use chrono::Weekday;

/// Days in a generated plan.
pub const DAYS_PER_PLAN: u8 = 7;

/// Maximum saved plans kept in history.
pub const HISTORY_CAPACITY: usize = 5;

/// Minimum Jaro-Winkler similarity for "did you mean" suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Format of a saved plan's creation label (local time).
pub const CREATED_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Short Korean weekday name used in day labels.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}
