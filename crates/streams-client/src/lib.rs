//! HTTP client for the streams data service.
//!
//! Authenticates, discovers streams with their typed schemas, reads
//! historical entries normalized to field names, and writes new entries
//! individually or as a batch sync.
//!
//! # Thread Safety
//!
//! [`StreamsClient`] holds no mutable state beyond the immutable session
//! token; methods take `&self` and can be awaited from any task, though the
//! client itself never issues concurrent requests.

mod client;
mod error;
mod record;
mod token;

pub use client::StreamsClient;
pub use error::ClientError;
pub use record::{EntryRecord, latest_entry_date};
pub use token::Token;
