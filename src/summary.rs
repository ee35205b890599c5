//! Builds the per-day summary database out of a Pebble Health export.
//!
//! The two files form a pair: `health.sqlite` is the raw export from the
//! Pebble app (minute samples plus activity sessions), and the derived
//! `daily_health.sqlite` stores totals and averages for each day so that
//! these don't need to be computed every time.

use crate::dlog;
use crate::error::BuildError;
use crate::types::{BuildReport, DaySummary};
use crate::utils::{day_start_secs, day_text, floor_to_day};
use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;

/// Read `source`, compute one [`DaySummary`] per calendar day over the full
/// covered range, and write them all into a fresh `days_summary` table in
/// `destination`.
///
/// Refuses to touch a destination that already has a `days_summary` table
/// unless `overwrite` is set, in which case the old table is dropped and
/// rebuilt. The rebuild happens in a single transaction, so the destination
/// is never left half-populated.
pub fn build_daily_summary(
    source: &Path,
    destination: &Path,
    overwrite: bool,
) -> Result<BuildReport, BuildError> {
    if !source.exists() {
        return Err(BuildError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    let src_err = |cause: rusqlite::Error| BuildError::SourceRead {
        path: source.to_path_buf(),
        cause,
    };
    let dst_err = |cause: rusqlite::Error| BuildError::WriteFailed {
        path: destination.to_path_buf(),
        cause,
    };

    let src = Connection::open_with_flags(
        source,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(src_err)?;

    // The guard only needs to look at a destination that already exists;
    // opening read-only avoids creating a file before the source has been
    // read successfully.
    if !overwrite && destination.exists() {
        let dst = Connection::open_with_flags(
            destination,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(dst_err)?;
        if table_exists(&dst, "days_summary").map_err(dst_err)? {
            return Err(BuildError::AlreadyConfigured {
                path: destination.to_path_buf(),
            });
        }
    }

    let range = discover_range(&src).map_err(src_err)?;

    let rows = match range {
        Some((date_min, date_max)) => {
            tracing::info!(%date_min, %date_max, "aggregating range");
            aggregate_days(&src, date_min, date_max).map_err(src_err)?
        }
        None => {
            tracing::info!("source has no minute samples and no activity sessions");
            Vec::new()
        }
    };

    let mut dst = Connection::open(destination).map_err(dst_err)?;
    write_summaries(&mut dst, &rows, overwrite).map_err(dst_err)?;

    tracing::info!(
        days = rows.len(),
        destination = %destination.display(),
        "daily summary built"
    );

    Ok(BuildReport {
        date_min: range.map(|(d, _)| d),
        date_max: range.map(|(_, d)| d),
        days_written: rows.len(),
    })
}

/// Inclusive calendar-day range covered by the export.
///
/// Minute samples are only retained for a recent window while activity
/// sessions persist indefinitely, so the true coverage span is the union of
/// both collections' bounds. An empty collection contributes no bounds; if
/// both are empty there is no range at all.
fn discover_range(src: &Connection) -> rusqlite::Result<Option<(NaiveDate, NaiveDate)>> {
    let (min_minute, max_minute) = min_max(
        src,
        "SELECT MIN(date_local_secs), MAX(date_local_secs) FROM minute_samples",
    )?;
    let (min_session, max_session) = min_max(
        src,
        "SELECT MIN(start_local_secs), MAX(end_local_secs) FROM activity_sessions",
    )?;

    let min_secs = match (min_minute, min_session) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    let max_secs = match (max_minute, max_session) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    let (Some(min_secs), Some(max_secs)) = (min_secs, max_secs) else {
        return Ok(None);
    };

    let (Some(date_min), Some(date_max)) = (floor_to_day(min_secs), floor_to_day(max_secs)) else {
        dlog!("range_out_of_bounds min_secs={min_secs} max_secs={max_secs}");
        return Ok(None);
    };

    Ok(Some((date_min, date_max)))
}

fn min_max(src: &Connection, sql: &str) -> rusqlite::Result<(Option<i64>, Option<i64>)> {
    src.query_row(sql, [], |row| Ok((row.get(0)?, row.get(1)?)))
}

/// One summary per day from `date_min` to `date_max` inclusive, with no
/// gaps. SUM/AVG over an empty set is NULL, so a day without samples comes
/// out all-NULL rather than all-zero.
fn aggregate_days(
    src: &Connection,
    date_min: NaiveDate,
    date_max: NaiveDate,
) -> rusqlite::Result<Vec<DaySummary>> {
    // Half-open on the left: a sample landing exactly on midnight counts
    // toward the day that just ended, not the one starting.
    let mut stmt = src.prepare(
        r"
        SELECT
            SUM(step_count),
            SUM(distance_mm),
            CAST(SUM(active_minutes) AS INTEGER),
            SUM(active_gcal),
            SUM(resting_gcal),
            AVG(vmc),
            AVG(light)
        FROM minute_samples
        WHERE date_local_secs > ?1 AND date_local_secs <= ?2
        ",
    )?;

    let mut out = Vec::new();
    let mut day = date_min;
    while day <= date_max {
        let start = day_start_secs(day);
        // Naive local encoding: every day is exactly 86 400 s.
        let end = start + 86_400;

        let row = stmt.query_row(params![start, end], |row| {
            let distance_mm: Option<f64> = row.get(1)?;
            Ok(DaySummary {
                date_unix: start,
                date_text: day_text(day),
                step_count: row.get(0)?,
                distance_m: distance_mm.map(|mm| mm / 1000.0),
                active_minutes: row.get(2)?,
                active_gcal: row.get(3)?,
                resting_gcal: row.get(4)?,
                avg_movement_vmc: row.get(5)?,
                avg_light: row.get(6)?,
            })
        })?;
        out.push(row);

        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    Ok(out)
}

/// Create `days_summary` and insert every row in one transaction. With
/// `overwrite`, the previous table is dropped inside the same transaction,
/// so a failed rebuild rolls back to the old contents.
fn write_summaries(
    dst: &mut Connection,
    rows: &[DaySummary],
    overwrite: bool,
) -> rusqlite::Result<()> {
    let tx = dst.transaction()?;

    if overwrite {
        tx.execute_batch("DROP TABLE IF EXISTS days_summary")?;
    }

    tx.execute_batch(
        r"
        CREATE TABLE days_summary (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date_unix INTEGER NOT NULL UNIQUE,
            date_text TEXT NOT NULL UNIQUE,
            step_count REAL,
            distance_m REAL,
            active_minutes INTEGER,
            active_gcal REAL,
            resting_gcal REAL,
            avg_movement_vmc REAL,
            avg_light REAL
        )
        ",
    )?;

    {
        let mut stmt = tx.prepare(
            r"
            INSERT INTO days_summary (
                date_unix, date_text,
                step_count, distance_m, active_minutes,
                active_gcal, resting_gcal,
                avg_movement_vmc, avg_light
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
        )?;

        for s in rows {
            stmt.execute(params![
                s.date_unix,
                s.date_text,
                s.step_count,
                s.distance_m,
                s.active_minutes,
                s.active_gcal,
                s.resting_gcal,
                s.avg_movement_vmc,
                s.avg_light,
            ])?;
        }
    }

    tx.commit()
}

fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}
