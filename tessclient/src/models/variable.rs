use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::known_variables::KNOWN_VARIABLES;

pub use leptess::Variable as TessVariable;

/// Engine parameter a client may set, one of the names `leptess` knows.
///
/// Ordered, hashed, printed and serialized by the engine's parameter name,
/// e.g. `tessedit_char_whitelist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(TessVariable);

impl Variable {
    pub const fn new(variable: TessVariable) -> Self {
        Self(variable)
    }

    pub fn inner(self) -> TessVariable {
        self.0
    }

    /// Parameter name as the engine knows it.
    pub fn name(self) -> &'static str {
        // Generated names are plain ASCII.
        self.0.as_cstr().to_str().unwrap_or_default()
    }

    /// Every parameter this build accepts.
    pub fn all() -> impl Iterator<Item = Variable> {
        KNOWN_VARIABLES.iter().copied().map(Self)
    }
}

impl From<TessVariable> for Variable {
    fn from(variable: TessVariable) -> Self {
        Self(variable)
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        KNOWN_VARIABLES
            .iter()
            .find(|variable| variable.as_cstr().to_bytes() == name.as_bytes())
            .map(|variable| Self(*variable))
            .ok_or_else(|| format!("Unknown engine variable: {s}"))
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Variable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}
