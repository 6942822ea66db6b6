//! Schemaless ingestion examples for TDengine.
//!
//! Two programs push a fixed batch of smart-meter readings through the
//! schemaless entry points of the [`taos`] driver: `opentsdb_json` submits an
//! OpenTSDB-style JSON payload, `opentsdb_telnet` submits telnet-style text
//! lines. `connect` is a connection smoke test.
//!
//! Run with e.g. `cargo run --bin opentsdb_telnet`. The target server is
//! taken from the `TDENGINE_DSN` environment variable and defaults to a
//! local native endpoint, see [`config`].

pub mod config;
pub mod ingest;
pub mod measurement;

pub use measurement::{FieldValue, Measurement, TagValue};
