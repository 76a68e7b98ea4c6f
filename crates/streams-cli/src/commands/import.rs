//! Import command: incremental day-by-day push of nutrition totals.
//!
//! The latest remote entry date is the watermark: import starts the day
//! after it and runs up to yesterday, falling back to a fixed window when
//! the stream is empty. Days without data are skipped, and everything found
//! goes to the service in one batch sync.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate};
use clap::Args;

use streams_client::latest_entry_date;
use streams_core::{Entry, StreamId};

use crate::Config;
use crate::commands::nutrition::{FileProvider, NutritionProvider};
use crate::commands::{connect, find_stream};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file of per-day nutrition totals.
    pub source: PathBuf,

    /// Stream name to import into.
    #[arg(long, default_value = "Nutrition")]
    pub stream: String,

    /// How many days back to start when the stream has no entries yet.
    #[arg(long, default_value_t = 14)]
    pub days_back: i64,
}

pub fn run<W: Write>(writer: &mut W, args: &ImportArgs, config: &Config) -> Result<()> {
    let provider = FileProvider::load(&args.source)?;

    let (runtime, client) = connect(config)?;
    let streams = runtime.block_on(client.streams())?;
    let stream = find_stream(&streams, &args.stream)?;
    let records = runtime.block_on(client.entries(stream))?;

    let today = Local::now().date_naive();
    let start = first_day_to_import(latest_entry_date(&records), today, args.days_back);
    let days = days_to_import(start, today);
    writeln!(writer, "Importing {} day(s)", days.len())?;

    let (entries, skipped) = collect_entries(&provider, &stream.id, &days)?;
    if entries.is_empty() {
        writeln!(writer, "Nothing to import.")?;
        return Ok(());
    }

    runtime
        .block_on(client.add_entries(&entries))
        .context("failed to push entries")?;
    writeln!(
        writer,
        "Imported {} entr{}, skipped {} day(s).",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        skipped
    )?;
    Ok(())
}

/// The first day worth importing: the day after the latest remote entry,
/// or `days_back` days ago when the stream has no entries yet.
fn first_day_to_import(
    latest: Option<DateTime<FixedOffset>>,
    today: NaiveDate,
    days_back: i64,
) -> NaiveDate {
    match latest {
        Some(instant) => instant.date_naive() + Duration::days(1),
        None => today - Duration::days(days_back),
    }
}

/// Days in `[start, today)`, oldest first. Today is excluded since its
/// totals are still accumulating.
fn days_to_import(start: NaiveDate, today: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day < today {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// Builds noon-anchored entries for every day the provider has data for.
fn collect_entries<P: NutritionProvider>(
    provider: &P,
    stream_id: &StreamId,
    days: &[NaiveDate],
) -> Result<(Vec<Entry>, usize)> {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for &day in days {
        let totals = provider.day_totals(day)?;
        let Some(contents) = totals.and_then(|totals| totals.contents()) else {
            tracing::debug!(%day, "no nutrition data, skipping");
            skipped += 1;
            continue;
        };
        tracing::debug!(%day, fields = contents.len(), "importing day");
        entries.push(Entry::for_day(stream_id.clone(), contents, day));
    }

    Ok((entries, skipped))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use streams_core::time;

    use super::*;
    use crate::commands::nutrition::DayTotals;

    struct MapProvider(HashMap<NaiveDate, DayTotals>);

    impl NutritionProvider for MapProvider {
        fn day_totals(&self, day: NaiveDate) -> Result<Option<DayTotals>> {
            Ok(self.0.get(&day).cloned())
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn import_resumes_after_the_latest_entry() {
        let latest = time::parse_timestamp("2021-07-04T12:00:00+02:00").unwrap();
        let start = first_day_to_import(Some(latest), day(2021, 7, 10), 14);
        assert_eq!(start, day(2021, 7, 5));
    }

    #[test]
    fn empty_stream_defaults_to_the_lookback_window() {
        let start = first_day_to_import(None, day(2021, 7, 10), 14);
        assert_eq!(start, day(2021, 6, 26));
    }

    #[test]
    fn days_to_import_excludes_today() {
        let days = days_to_import(day(2021, 7, 8), day(2021, 7, 10));
        assert_eq!(days, vec![day(2021, 7, 8), day(2021, 7, 9)]);
    }

    #[test]
    fn nothing_to_import_when_already_current() {
        assert!(days_to_import(day(2021, 7, 10), day(2021, 7, 10)).is_empty());
        assert!(days_to_import(day(2021, 7, 11), day(2021, 7, 10)).is_empty());
    }

    #[test]
    fn collect_entries_skips_days_without_calories() {
        let provider = MapProvider(HashMap::from([
            (
                day(2021, 7, 5),
                DayTotals {
                    calories: Some(1850.0),
                    protein: Some(92.5),
                    ..DayTotals::default()
                },
            ),
            (
                day(2021, 7, 6),
                DayTotals {
                    carbohydrates: Some(180.0),
                    ..DayTotals::default()
                },
            ),
        ]));
        let stream_id = StreamId::new("stream-1").unwrap();
        let days = [day(2021, 7, 5), day(2021, 7, 6), day(2021, 7, 7)];

        let (entries, skipped) = collect_entries(&provider, &stream_id, &days).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(entries[0].stream_id, stream_id);
        assert_eq!(entries[0].date.date_naive(), day(2021, 7, 5));
    }
}
