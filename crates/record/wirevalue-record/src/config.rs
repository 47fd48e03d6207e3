//! Marshalling configuration.

use serde::{Deserialize, Serialize};

/// How keys that a descriptor declares but the input lacks are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Record a `Missing` issue; the field keeps its current value and the
    /// call reports partial success.
    #[default]
    Report,
    /// Leave the field untouched without recording anything.
    Ignore,
}

/// Options for [`crate::from_value_with`]. Keep this small; new options must
/// default to the current behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalConfig {
    pub missing_fields: MissingFieldPolicy,

    /// Deepest field path that is still descended into. Independent of the
    /// text parser, which accepts any nesting.
    pub max_depth: usize,
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::Report,
            max_depth: 128,
        }
    }
}

impl MarshalConfig {
    pub fn ignoring_missing() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::Ignore,
            ..Self::default()
        }
    }
}
