//! Parameter sets for signed requests
//!
//! A [`ParamSet`] is a flat `name -> value` mapping. Keys are unique and
//! iteration always follows byte-wise key order, which is the canonical
//! order the signature is computed over, so callers never sort by hand.

use std::collections::BTreeMap;

use crate::domain::{Direction, Signature};

/// Name of the query parameter carrying the signature
pub const SIG_PARAM: &str = "sig";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    entries: BTreeMap<String, String>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`ParamSet::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries covered by the signature: everything except `sig`
    pub fn signed_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| *k != SIG_PARAM)
    }

    pub fn set_count(&mut self, count: i64) {
        self.insert("count", count.to_string());
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.insert("direction", direction.as_str());
    }

    pub fn set_anchor(&mut self, anchor: impl Into<String>) {
        self.insert("anchor", anchor);
    }

    /// Query pairs to put on the wire: every parameter followed by `sig`
    pub fn to_query_pairs(&self, sig: &Signature) -> Vec<(String, String)> {
        self.to_query_pairs_raw(&sig.to_hex())
    }

    /// Like [`ParamSet::to_query_pairs`] but with an arbitrary `sig` token
    ///
    /// A `sig` entry stored in the set is replaced, never sent twice.
    pub fn to_query_pairs_raw(&self, sig: &str) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .signed_entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.push((SIG_PARAM.to_string(), sig.to_string()));
        pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParamSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
