//! Measurement records and their two schemaless encodings.
//!
//! A [`Measurement`] is one reading of a named metric: timestamp in
//! milliseconds, a numeric value and a set of identifying tags. The telnet
//! encoding is its [`Display`](fmt::Display) form, the OpenTSDB-style JSON
//! encoding comes from [`json_payload`].

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Numeric reading. Integers and floats keep their written form in both
/// encodings: a voltage of `219` must not become `219.0` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Tag value: a string dimension such as a location, or a small integer
/// such as a group id. Rendered unquoted in telnet lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Str(String),
    Integer(i64),
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Str(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Str(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        TagValue::Integer(value.into())
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Str(value) => f.write_str(value),
            TagValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// One measurement event.
///
/// Tags are kept in insertion order so the telnet rendering reproduces the
/// source lines exactly; the server does not care about tag order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub metric: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub value: FieldValue,
    #[serde(serialize_with = "tags_as_object")]
    pub tags: Vec<(String, TagValue)>,
}

impl Measurement {
    pub fn new(
        metric: impl Into<String>,
        timestamp: i64,
        value: impl Into<FieldValue>,
    ) -> Self {
        Measurement {
            metric: metric.into(),
            timestamp,
            value: value.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.push((name.into(), value.into()));
        self
    }
}

/// Telnet line: `<metric> <timestamp> <value> <tag>=<value> ...`,
/// single spaces throughout.
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric, self.timestamp, self.value)?;
        for (name, value) in &self.tags {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}

fn tags_as_object<S>(tags: &[(String, TagValue)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(tags.len()))?;
    for (name, value) in tags {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// Encode a batch as one JSON array in the OpenTSDB-style schema the
/// driver's schemaless JSON entry point expects.
pub fn json_payload(batch: &[Measurement]) -> serde_json::Result<String> {
    serde_json::to_string(batch)
}

/// Encode a batch as telnet lines, one measurement per line.
pub fn telnet_lines(batch: &[Measurement]) -> Vec<String> {
    batch.iter().map(Measurement::to_string).collect()
}
