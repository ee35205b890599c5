use chrono::NaiveDate;

/// One aggregated row per calendar day, as stored in `days_summary`.
///
/// Aggregate fields are `None` for a day with no minute samples. SQL
/// SUM/AVG over an empty set is NULL and that is preserved, never zeroed.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date_unix: i64,
    pub date_text: String,
    pub step_count: Option<f64>,
    pub distance_m: Option<f64>,
    pub active_minutes: Option<i64>,
    pub active_gcal: Option<f64>,
    pub resting_gcal: Option<f64>,
    pub avg_movement_vmc: Option<f64>,
    pub avg_light: Option<f64>,
}

/// What a build produced. The range is reported so callers can see what
/// coverage span was discovered; both bounds are `None` when the source
/// had no samples and no sessions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    pub days_written: usize,
}
