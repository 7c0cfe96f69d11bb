use super::*;

// Query serialization stringifies populated fields and re-filters falsy
// values: empty strings, zero numbers and `false` booleans are not sent.
// The JSON-body path has no such filter and preserves `false`. The
// asymmetry is a kept behavioral contract, pinned by the tests below.

fn push_str(out: &mut Vec<(&'static str, String)>, name: &'static str, v: &Option<String>) {
    if let Some(v) = v {
        if !v.is_empty() {
            out.push((name, v.clone()));
        }
    }
}

fn push_num(out: &mut Vec<(&'static str, String)>, name: &'static str, v: &Option<i64>) {
    if let Some(v) = v {
        if *v != 0 {
            out.push((name, v.to_string()));
        }
    }
}

fn push_bool(out: &mut Vec<(&'static str, String)>, name: &'static str, v: &Option<bool>) {
    if let Some(true) = v {
        out.push((name, "true".to_owned()));
    }
}

/// Read request, legacy ("v2") generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyReadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quorum: Option<bool>,
}

/// Read request, current ("v3") generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentReadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// Read request tagged by the wire-active generation.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadRequest {
    Legacy(LegacyReadRequest),
    Current(CurrentReadRequest),
}

impl ReadRequest {
    pub fn from_action(generation: ApiGeneration, action: &GenericAction) -> Self {
        match generation {
            ApiGeneration::Legacy => Self::Legacy(LegacyReadRequest {
                key: action.str_field(FieldName::Key),
                sort: action.bool_field(FieldName::Sort),
                quorum: action.bool_field(FieldName::Quorum),
            }),
            ApiGeneration::Current => Self::Current(CurrentReadRequest {
                key: action.str_field(FieldName::Key),
                prefix: action.bool_field(FieldName::Prefix),
                from_key: action.bool_field(FieldName::FromKey),
                consistency: action.str_field(FieldName::Consistency),
                sort_order: action.str_field(FieldName::SortOrder),
                sort_target: action.str_field(FieldName::SortTarget),
                limit: action.num_field(FieldName::Limit),
                rev: action.num_field(FieldName::Rev),
                keys_only: action.bool_field(FieldName::KeysOnly),
                range: action.str_field(FieldName::Range),
            }),
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![];
        match self {
            Self::Legacy(r) => {
                push_str(&mut out, "Key", &r.key);
                push_bool(&mut out, "Sort", &r.sort);
                push_bool(&mut out, "Quorum", &r.quorum);
            }
            Self::Current(r) => {
                push_str(&mut out, "key", &r.key);
                push_bool(&mut out, "prefix", &r.prefix);
                push_bool(&mut out, "fromKey", &r.from_key);
                push_str(&mut out, "consistency", &r.consistency);
                push_str(&mut out, "sortOrder", &r.sort_order);
                push_str(&mut out, "sortTarget", &r.sort_target);
                push_num(&mut out, "limit", &r.limit);
                push_num(&mut out, "rev", &r.rev);
                push_bool(&mut out, "keysOnly", &r.keys_only);
                push_str(&mut out, "range", &r.range);
            }
        }
        out
    }
}

/// Write request, legacy generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyWriteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_with_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_with_index: Option<i64>,
}

/// Write request, current generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWriteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease: Option<i64>,
    #[serde(rename = "prevKV", skip_serializing_if = "Option::is_none")]
    pub prev_kv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_lease: Option<bool>,
}

/// Write request tagged by the wire-active generation.
/// Serializes as the inner shape; goes out as a JSON body.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum WriteRequest {
    Legacy(LegacyWriteRequest),
    Current(CurrentWriteRequest),
}

impl WriteRequest {
    pub fn from_action(generation: ApiGeneration, action: &GenericAction) -> Self {
        match generation {
            ApiGeneration::Legacy => Self::Legacy(LegacyWriteRequest {
                key: action.str_field(FieldName::Key),
                value: action.str_field(FieldName::Value),
                ttl: action.num_field(FieldName::Ttl),
                swap_with_value: action.str_field(FieldName::SwapWithValue),
                swap_with_index: action.num_field(FieldName::SwapWithIndex),
            }),
            ApiGeneration::Current => Self::Current(CurrentWriteRequest {
                key: action.str_field(FieldName::Key),
                value: action.str_field(FieldName::Value),
                lease: action.num_field(FieldName::Lease),
                prev_kv: action.bool_field(FieldName::PrevKv),
                ignore_value: action.bool_field(FieldName::IgnoreValue),
                ignore_lease: action.bool_field(FieldName::IgnoreLease),
            }),
        }
    }
}

/// Remove request, legacy generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyRemoveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_index: Option<i64>,
}

/// Remove request, current generation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRemoveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_key: Option<bool>,
    #[serde(rename = "prevKV", skip_serializing_if = "Option::is_none")]
    pub prev_kv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// Remove request tagged by the wire-active generation.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoveRequest {
    Legacy(LegacyRemoveRequest),
    Current(CurrentRemoveRequest),
}

impl RemoveRequest {
    pub fn from_action(generation: ApiGeneration, action: &GenericAction) -> Self {
        match generation {
            ApiGeneration::Legacy => Self::Legacy(LegacyRemoveRequest {
                key: action.str_field(FieldName::Key),
                dir: action.bool_field(FieldName::Dir),
                recursive: action.bool_field(FieldName::Recursive),
                with_value: action.str_field(FieldName::WithValue),
                with_index: action.num_field(FieldName::WithIndex),
            }),
            ApiGeneration::Current => Self::Current(CurrentRemoveRequest {
                key: action.str_field(FieldName::Key),
                prefix: action.bool_field(FieldName::Prefix),
                from_key: action.bool_field(FieldName::FromKey),
                prev_kv: action.bool_field(FieldName::PrevKv),
                range: action.str_field(FieldName::Range),
            }),
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![];
        match self {
            Self::Legacy(r) => {
                push_str(&mut out, "Key", &r.key);
                push_bool(&mut out, "Dir", &r.dir);
                push_bool(&mut out, "Recursive", &r.recursive);
                push_str(&mut out, "WithValue", &r.with_value);
                push_num(&mut out, "WithIndex", &r.with_index);
            }
            Self::Current(r) => {
                push_str(&mut out, "key", &r.key);
                push_bool(&mut out, "prefix", &r.prefix);
                push_bool(&mut out, "fromKey", &r.from_key);
                push_bool(&mut out, "prevKV", &r.prev_kv);
                push_str(&mut out, "range", &r.range);
            }
        }
        out
    }
}
