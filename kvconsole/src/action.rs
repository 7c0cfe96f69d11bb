use super::*;
use std::collections::BTreeMap;

/// What the operator asked for. Anything unknown falls back to `Read`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActionKind {
    #[default]
    Read,
    Write,
    Remove,
}

/// Every field either API generation knows, across all three schemas.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum FieldName {
    Key,
    Value,
    // legacy
    Sort,
    Quorum,
    Ttl,
    SwapWithValue,
    SwapWithIndex,
    Dir,
    Recursive,
    WithValue,
    WithIndex,
    // current
    Prefix,
    FromKey,
    Consistency,
    SortOrder,
    SortTarget,
    Limit,
    Rev,
    KeysOnly,
    Range,
    Lease,
    PrevKv,
    IgnoreValue,
    IgnoreLease,
}

/// A user-supplied field value with its type tag.
/// Presence is modelled by the map entry existing, not by a sentinel value.
#[derive(Clone, PartialEq, Debug)]
pub enum FieldValue {
    Str(String),
    Num(i64),
    Bool(bool),
}

impl FieldValue {
    /// Booleans carry meaning at both `true` and `false` and are always
    /// significant. Strings and numbers are significant only when non-empty
    /// and non-zero.
    fn is_significant(&self) -> bool {
        match self {
            FieldValue::Bool(_) => true,
            FieldValue::Str(s) => !s.is_empty(),
            FieldValue::Num(n) => *n != 0,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_owned())
    }
}
impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}
impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Num(v)
    }
}
impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// Accumulates only the fields the operator actually supplied.
/// This is the single validation step before schema construction; no type
/// checking against the target schema happens here.
#[derive(Clone, Debug, Default)]
pub struct GenericAction {
    pub kind: ActionKind,
    fields: BTreeMap<FieldName, FieldValue>,
}

impl GenericAction {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// Set `name` iff `value` is significant; otherwise a no-op that leaves
    /// the field absent.
    pub fn append(&mut self, name: FieldName, value: impl Into<FieldValue>) -> &mut Self {
        let value = value.into();
        if value.is_significant() {
            self.fields.insert(name, value);
        }
        self
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.contains_key(&name)
    }

    pub(crate) fn str_field(&self, name: FieldName) -> Option<String> {
        match self.fields.get(&name) {
            Some(FieldValue::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub(crate) fn num_field(&self, name: FieldName) -> Option<i64> {
        match self.fields.get(&name) {
            Some(FieldValue::Num(n)) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn bool_field(&self, name: FieldName) -> Option<bool> {
        match self.fields.get(&name) {
            Some(FieldValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}
