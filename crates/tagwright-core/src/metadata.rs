//! The multi-valued metadata record.
//!
//! A [`Metadata`] maps tag names to an ordered list of string values. Tag
//! order follows first insertion, and value order within a tag follows
//! insertion as well. Tags whose name starts with [`HIDDEN_PREFIX`] are
//! internal bookkeeping values that are never written to files; every other
//! tag is user-facing.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

/// Prefix marking a tag as hidden (internal) rather than user-facing.
pub const HIDDEN_PREFIX: char = '~';

/// Returns `true` if `name` denotes a hidden tag.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

/// An ordered, multi-valued mapping from tag names to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    tags: Vec<(String, Vec<String>)>,
    length: u64,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Duration in milliseconds, `0` when unknown.
    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn set_length(&mut self, length: u64) {
        self.length = length;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|(key, _)| key == name)
    }

    /// First value of a tag, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// All values of a tag, empty if the tag is absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.position(name)
            .map(|idx| self.tags[idx].1.as_slice())
            .unwrap_or(&[])
    }

    /// Values of a tag joined with `"; "`, empty if the tag is absent.
    pub fn get_joined(&self, name: &str) -> String {
        self.get_all(name).join("; ")
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Exact-match membership test for a single value.
    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        self.get_all(name).iter().any(|v| v == value)
    }

    /// Replace all values of a tag.
    ///
    /// Setting no values, or a single blank value, removes the tag.
    pub fn set<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let blank = match values.as_slice() {
            [] => true,
            [only] => only.trim().is_empty(),
            _ => false,
        };
        if blank {
            self.unset(name);
            return;
        }
        match self.position(name) {
            Some(idx) => self.tags[idx].1 = values,
            None => self.tags.push((name.to_string(), values)),
        }
    }

    /// Replace all values of a tag with a single value.
    pub fn set_one(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, [value.into()]);
    }

    /// Append a value, allowing duplicates. Empty values are ignored.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        match self.position(name) {
            Some(idx) => self.tags[idx].1.push(value),
            None => self.tags.push((name.to_string(), vec![value])),
        }
    }

    /// Append a value unless the tag already holds it.
    pub fn add_unique(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if !self.contains_value(name, &value) {
            self.add(name, value);
        }
    }

    /// Remove a tag and all its values.
    pub fn unset(&mut self, name: &str) {
        self.tags.retain(|(key, _)| key != name);
    }

    /// Iterate over all tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterate over user-facing tags only.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(key, _)| !is_hidden(key))
    }

    /// Iterate over hidden (`~`-prefixed) tags only.
    pub fn hidden(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(key, _)| is_hidden(key))
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Render the record as pretty-printed JSON, one array per tag.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len()))?;
        for (key, values) in &self.tags {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}
