// src/record.rs
//! One institution's extracted fields.
//!
//! A label seen once holds a [`Value::Scalar`]. Seeing it again on the same page
//! promotes it to [`Value::Multi`], and further hits append. Downstream code (CSV
//! export, header derivation) relies on that shape change, so it is kept as-is.

use indexmap::IndexMap;

use crate::config::consts::INSTITUTION_LABEL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Multi(Vec<String>),
}

impl Value {
    /// Add another value under the same label.
    pub fn push(&mut self, next: String) {
        match self {
            Value::Scalar(first) => {
                let first = std::mem::take(first);
                *self = Value::Multi(vec![first, next]);
            }
            Value::Multi(items) => items.push(next),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Multi(_) => None,
        }
    }

    pub fn items(&self) -> Vec<&str> {
        match self {
            Value::Scalar(s) => vec![s.as_str()],
            Value::Multi(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// New record with `Institution` as its first field.
    pub fn new(institution: &str) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(s!(INSTITUTION_LABEL), Value::Scalar(s!(institution)));
        Self { fields }
    }

    /// Store `value` under `label`, promoting to a list on repeats.
    pub fn insert(&mut self, label: &str, value: String) {
        match self.fields.get_mut(label) {
            Some(existing) => existing.push(value),
            None => {
                self.fields.insert(s!(label), Value::Scalar(value));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.fields.get(label)
    }

    pub fn institution(&self) -> &str {
        self.fields
            .get(INSTITUTION_LABEL)
            .and_then(|v| v.items().first().copied())
            .unwrap_or_default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
