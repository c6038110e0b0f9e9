// envknob: environment-variable debug knobs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Optional boolean that tells "unset" apart from "explicitly false".

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A boolean that may be unset.
///
/// Serializes as `""`, `"true"` or `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptBool {
    #[default]
    Unset,
    True,
    False,
}

impl OptBool {
    /// Returns the value, or `None` if unset.
    #[must_use]
    pub const fn get(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    /// Returns the value, or `default` if unset.
    #[must_use]
    pub const fn unwrap_or(self, default: bool) -> bool {
        match self {
            Self::Unset => default,
            Self::True => true,
            Self::False => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl From<bool> for OptBool {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for OptBool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl std::fmt::Display for OptBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::True | Self::False => write!(f, "{}", self.as_str()),
        }
    }
}

impl Serialize for OptBool {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OptBool {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "" => Ok(Self::Unset),
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            other => Err(serde::de::Error::custom(format!(
                "expected \"\", \"true\" or \"false\", got {other:?}"
            ))),
        }
    }
}
