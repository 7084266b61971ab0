//! Configuration view - projects a snapshot into ordered display pairs

use crate::{constant_label, ConfigValue, ConfigurationState};
use serde::{Serialize, Serializer};

/// One row of the configuration view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPair {
    pub label: String,
    pub value: ConfigValue,
}

impl DisplayPair {
    pub fn new(label: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<DisplayPair> for (String, ConfigValue) {
    fn from(pair: DisplayPair) -> Self {
        (pair.label, pair.value)
    }
}

impl PartialEq<(&str, ConfigValue)> for DisplayPair {
    fn eq(&self, other: &(&str, ConfigValue)) -> bool {
        self.label == other.0 && self.value == other.1
    }
}

/// Serialized as a `[label, value]` array
impl Serialize for DisplayPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.label, &self.value).serialize(serializer)
    }
}

/// Project a configuration snapshot into display pairs sorted by key.
///
/// Labels are the upper-snake-case form of each key; values are passed through
/// unchanged. The result is freshly allocated on every call.
pub fn project(state: &ConfigurationState) -> Vec<DisplayPair> {
    let mut keys: Vec<&String> = state.data.keys().collect();
    keys.sort_unstable();

    keys.into_iter()
        .map(|key| DisplayPair {
            label: constant_label(key),
            value: state.data[key].clone(),
        })
        .collect()
}
