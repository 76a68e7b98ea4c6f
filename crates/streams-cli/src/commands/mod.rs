//! CLI subcommand implementations.

pub mod add;
pub mod entries;
pub mod import;
pub mod nutrition;
pub mod streams;

use anyhow::{Context, Result, bail};
use tokio::runtime::Runtime;

use streams_client::StreamsClient;
use streams_core::Stream;

use crate::Config;

/// Logs in with the configured credentials and returns the client together
/// with the runtime that drives it.
pub(crate) fn connect(config: &Config) -> Result<(Runtime, StreamsClient)> {
    let username = config
        .username
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow::anyhow!("missing username (set STREAMS_USERNAME or config.toml)"))?;
    let password = config
        .password
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow::anyhow!("missing password (set STREAMS_PASSWORD or config.toml)"))?;

    let runtime = Runtime::new().context("failed to initialize tokio runtime")?;
    let client = runtime
        .block_on(StreamsClient::login(&config.base_url, username, password))
        .context("failed to log in to the streams service")?;
    Ok((runtime, client))
}

/// Finds a stream by name, aborting with a diagnostic when there is none.
pub(crate) fn find_stream<'a>(streams: &'a [Stream], name: &str) -> Result<&'a Stream> {
    match streams.iter().find(|stream| stream.name == name) {
        Some(stream) => Ok(stream),
        None => bail!("could not find stream named {name:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_stream_matches_by_name() {
        let stream: Stream = serde_json::from_str(
            r#"{
                "id": "stream-1",
                "name": "Nutrition",
                "format": "table",
                "inputSpec": {"fields": []},
                "createdDate": "2020-01-01T00:00:00Z",
                "modifiedDate": "2020-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        let streams = vec![stream];

        assert_eq!(find_stream(&streams, "Nutrition").unwrap().id.as_str(), "stream-1");
        assert!(find_stream(&streams, "Sleep").is_err());
    }
}
