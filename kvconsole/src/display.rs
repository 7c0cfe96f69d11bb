use super::*;
use derive_more::Display;

/// Drives the styling of a rendered log entry.
#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level for UI chrome that styles by number.
    pub fn level(&self) -> u8 {
        match self {
            Severity::Success => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// The one shape every backend outcome collapses into.
/// Built once per call and handed to the display sink as-is.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NormalizedResponse {
    pub severity: Severity,
    pub lines: Vec<String>,
}

impl NormalizedResponse {
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            severity: Severity::Success,
            lines,
        }
    }

    pub fn warning(line: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            lines: vec![line.into()],
        }
    }

    pub fn error(line: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            lines: vec![line.into()],
        }
    }
}

/// One key-value record with its revision metadata, as the store reports it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
    pub create_revision: i64,
    pub mod_revision: i64,
    pub version: i64,
    #[serde(default)]
    pub lease: i64,
}

/// Wire shape of all three client endpoints. `kvs` is optional on
/// write/remove replies.
#[derive(Deserialize, Debug)]
pub struct ClientResponse {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub kvs: Vec<KeyValue>,
}

fn push_record_block(lines: &mut Vec<String>, kvs: &[KeyValue]) {
    lines.push(".".to_owned());
    for kv in kvs {
        if kv.value.is_empty() {
            lines.push(format!("|-- {}", kv.key));
        } else {
            lines.push(format!("|-- {} = {}", kv.key, kv.value));
        }
        lines.push(format!(
            "\\---- [crev: {}, rev: {}, ver: {}, lease: {}]",
            kv.create_revision, kv.mod_revision, kv.version, kv.lease
        ));
    }
}

/// A read that yields nothing is a warning, not an error.
pub(crate) fn normalize_read(res: ClientResponse) -> NormalizedResponse {
    if res.kvs.is_empty() {
        return NormalizedResponse::warning("cannot read anything");
    }
    let mut lines = vec![res.result];
    push_record_block(&mut lines, &res.kvs);
    NormalizedResponse::success(lines)
}

/// Write/remove replies are success by definition; a non-2xx never reaches
/// this point. Affected records, when returned, get the same block as reads.
pub(crate) fn normalize_mutation(res: ClientResponse) -> NormalizedResponse {
    let mut lines = vec![res.result];
    if !res.kvs.is_empty() {
        push_record_block(&mut lines, &res.kvs);
    }
    NormalizedResponse::success(lines)
}
