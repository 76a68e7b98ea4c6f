//! Streams command for listing discovered streams.

use std::io::Write;

use anyhow::Result;

use crate::Config;
use crate::commands::connect;

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let (runtime, client) = connect(config)?;
    let streams = runtime.block_on(client.streams())?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&streams)?)?;
        return Ok(());
    }

    if streams.is_empty() {
        writeln!(writer, "No streams found.")?;
        return Ok(());
    }

    for stream in &streams {
        let fields: Vec<&str> = stream
            .input_spec
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        writeln!(
            writer,
            "{} [{}] {}: {}",
            stream.name,
            stream.format,
            stream.id,
            fields.join(", ")
        )?;
    }

    Ok(())
}
