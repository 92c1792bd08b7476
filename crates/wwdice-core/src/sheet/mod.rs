//! Character trait tables.
//!
//! A character is an open mapping from lower-case trait name to score.
//! Attributes and abilities share the table, so new traits need no schema
//! change. Formulas read it through the [`TraitSource`] capability.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// The nine core attributes every valid character must score.
pub const CORE_ATTRIBUTES: [&str; 9] = [
    "str", "dex", "sta", "man", "app", "cha", "per", "int", "wis",
];

/// Anything that can report a character's score for a trait name.
pub trait TraitSource {
    /// The stored score for `name`, if the trait exists.
    fn trait_value(&self, name: &str) -> Option<u8>;
}

impl<S: std::hash::BuildHasher> TraitSource for HashMap<String, u8, S> {
    fn trait_value(&self, name: &str) -> Option<u8> {
        self.get(name).copied()
    }
}

impl TraitSource for BTreeMap<String, u8> {
    fn trait_value(&self, name: &str) -> Option<u8> {
        self.get(name).copied()
    }
}

/// A character's trait scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Character {
    traits: BTreeMap<String, u8>,
}

impl Character {
    /// Create a character with no traits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a trait score, builder style. The name is lower-cased.
    pub fn with_trait(mut self, name: &str, value: u8) -> Self {
        self.set(name, value);
        self
    }

    /// Set a trait score. The name is lower-cased.
    pub fn set(&mut self, name: &str, value: u8) {
        self.traits.insert(name.to_lowercase(), value);
    }

    /// The score for `name`, or 0 when the character lacks the trait.
    pub fn get(&self, name: &str) -> u8 {
        self.trait_value(name).unwrap_or(0)
    }

    /// Iterate traits in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.traits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of traits stored.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Returns true if no traits are stored.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Check that every core attribute is present with a non-zero score.
    pub fn validate(&self) -> EngineResult<()> {
        match CORE_ATTRIBUTES.iter().find(|name| self.get(name) == 0) {
            Some(missing) => Err(EngineError::MissingTrait((*missing).to_string())),
            None => Ok(()),
        }
    }

    /// Decode a character from a flat JSON object of trait scores.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidSheet(e.to_string()))
    }

    /// Encode the character as pretty-printed JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidSheet(e.to_string()))
    }
}

impl TraitSource for Character {
    fn trait_value(&self, name: &str) -> Option<u8> {
        self.traits.get(name).copied()
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u8>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<K: AsRef<str>> FromIterator<(K, u8)> for Character {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        let mut character = Self::new();
        for (name, value) in iter {
            character.set(name.as_ref(), value);
        }
        character
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
