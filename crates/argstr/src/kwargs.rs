// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Key/value argument maps.
//!
//! Device and stream arguments travel as string maps with the markup
//! `key0=val0, key1=val1`. Keys are sorted (BTreeMap), so rendering is
//! deterministic. Parsing is tolerant: whitespace around keys and values
//! is trimmed, a token without `=` becomes a flag-style key with an
//! empty value, and parsing never fails.

use crate::value::ArgValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// String→string argument map with the binding layer's textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Kwargs {
    entries: BTreeMap<String, String>,
}

impl Kwargs {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. The value is stored in canonical form.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.entries.insert(key.into(), value.into().into_string());
    }

    /// Raw text for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Bridge an entry into the codec for typed reads.
    pub fn get_value(&self, key: &str) -> Option<ArgValue> {
        self.entries.get(key).map(|text| ArgValue::from(text.as_str()))
    }

    /// Remove an entry, returning its text.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Kwargs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Kwargs {
    type Err = std::convert::Infallible;

    fn from_str(markup: &str) -> Result<Self, Self::Err> {
        let mut entries = BTreeMap::new();
        for token in markup.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let (key, value) = match token.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                // Flag-style token: key with empty value.
                None => (token, ""),
            };
            if key.is_empty() {
                log::warn!("dropping kwargs pair with empty key: {:?}", token);
                continue;
            }
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Self { entries })
    }
}

impl From<BTreeMap<String, String>> for Kwargs {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
