//! Entries command for showing a stream's data points.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::Config;
use crate::commands::{connect, find_stream};

#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// Stream name to show entries for.
    pub stream: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &EntriesArgs, config: &Config) -> Result<()> {
    let (runtime, client) = connect(config)?;
    let streams = runtime.block_on(client.streams())?;
    let stream = find_stream(&streams, &args.stream)?;
    let records = runtime.block_on(client.entries(stream))?;

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(writer, "No entries in stream {:?}.", stream.name)?;
        return Ok(());
    }

    for record in &records {
        let values: Vec<String> = record
            .values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        writeln!(
            writer,
            "{}  {}",
            record.date.format("%Y-%m-%d %H:%M:%S %:z"),
            values.join("  ")
        )?;
    }

    Ok(())
}
