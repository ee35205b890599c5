use chrono::{DateTime, NaiveDate, NaiveTime};
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = verbose as i8 - quiet as i8;
    let level = match net {
        i8::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i8::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,devezh={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Timestamps in a Pebble export are local wall-clock seconds encoded as if
/// they were UTC, so all calendar math happens in the same naive encoding.
/// The host timezone is never consulted; in this encoding every calendar day
/// spans exactly 86 400 seconds between its local midnights.
pub fn floor_to_day(local_secs: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(local_secs, 0).map(|dt| dt.date_naive())
}

/// Naive-local midnight of `day`, in the same encoding as the export.
pub fn day_start_secs(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Human-readable date for the days_summary table, e.g. `05-03-2023`.
pub fn day_text(day: NaiveDate) -> String {
    day.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_start_round_trip() {
        let day = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        let start = day_start_secs(day);

        assert_eq!(floor_to_day(start), Some(day));
        // Last second of the day still floors to the same day.
        assert_eq!(floor_to_day(start + 86_399), Some(day));
        assert_eq!(floor_to_day(start + 86_400), day.succ_opt());
    }

    #[test]
    fn day_text_is_dd_mm_yyyy() {
        let day = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(day_text(day), "05-03-2023");
    }
}
