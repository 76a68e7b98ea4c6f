//! Add command for submitting a single entry.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;

use streams_core::{Entry, StreamId, Value, time};

use crate::Config;
use crate::commands::{connect, find_stream};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Stream name to add the entry to.
    #[arg(long)]
    pub stream: String,

    /// Entry date: a calendar day (YYYY-MM-DD, anchored to noon local time)
    /// or a full RFC 3339 timestamp.
    #[arg(long)]
    pub date: String,

    /// Field values as name=value pairs.
    #[arg(required = true)]
    pub fields: Vec<String>,
}

pub fn run<W: Write>(writer: &mut W, args: &AddArgs, config: &Config) -> Result<()> {
    let mut contents = BTreeMap::new();
    for field in &args.fields {
        let (name, value) = parse_field(field)?;
        contents.insert(name, value);
    }

    let (runtime, client) = connect(config)?;
    let streams = runtime.block_on(client.streams())?;
    let stream = find_stream(&streams, &args.stream)?;

    let entry = build_entry(stream.id.clone(), contents, &args.date)?;
    runtime
        .block_on(client.add_entry(&entry))
        .context("failed to add entry")?;

    writeln!(writer, "Added entry {} to {:?}.", entry.id, stream.name)?;
    Ok(())
}

/// Builds the entry, branching on whether the supplied date carries a time
/// component.
fn build_entry(
    stream_id: StreamId,
    contents: BTreeMap<String, Value>,
    date: &str,
) -> Result<Entry> {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(Entry::for_day(stream_id, contents, day));
    }
    let timestamp = time::parse_timestamp(date)
        .with_context(|| format!("{date:?} is neither a calendar date nor a timestamp"))?;
    Ok(Entry::new(stream_id, contents, timestamp))
}

/// Parses a `name=value` pair, guessing the scalar type from the value.
fn parse_field(input: &str) -> Result<(String, Value)> {
    let Some((name, raw)) = input.split_once('=') else {
        bail!("field {input:?} is not a name=value pair");
    };
    if name.is_empty() {
        bail!("field {input:?} has an empty name");
    }

    let value = if let Ok(number) = raw.parse::<f64>() {
        Value::Number(number)
    } else if let Ok(flag) = raw.parse::<bool>() {
        Value::Bool(flag)
    } else {
        Value::String(raw.to_string())
    };
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn parse_field_guesses_scalar_types() {
        assert_eq!(
            parse_field("calories=200").unwrap(),
            ("calories".to_string(), Value::Number(200.0))
        );
        assert_eq!(
            parse_field("fasted=true").unwrap(),
            ("fasted".to_string(), Value::Bool(true))
        );
        assert_eq!(
            parse_field("note=skipped lunch").unwrap(),
            ("note".to_string(), Value::String("skipped lunch".to_string()))
        );
    }

    #[test]
    fn parse_field_rejects_malformed_pairs() {
        assert!(parse_field("calories").is_err());
        assert!(parse_field("=200").is_err());
    }

    #[test]
    fn bare_date_is_anchored_to_noon() {
        let entry = build_entry(
            StreamId::new("stream-1").unwrap(),
            BTreeMap::new(),
            "2021-07-04",
        )
        .unwrap();
        let wall = entry.date.naive_local();
        assert_eq!((wall.hour(), wall.minute()), (12, 0));
    }

    #[test]
    fn full_timestamp_is_kept_as_given() {
        let entry = build_entry(
            StreamId::new("stream-1").unwrap(),
            BTreeMap::new(),
            "2021-07-04T08:15:00+02:00",
        )
        .unwrap();
        assert_eq!(
            entry.date,
            time::parse_timestamp("2021-07-04T08:15:00+02:00").unwrap()
        );
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let result = build_entry(
            StreamId::new("stream-1").unwrap(),
            BTreeMap::new(),
            "last tuesday",
        );
        assert!(result.is_err());
    }
}
