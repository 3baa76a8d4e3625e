use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AspectError;

/// Literal used by the tagging schema for tokens outside any aspect.
pub const OUTSIDE_MARKER: &str = "O";

/// A concrete per-token label: either outside any aspect, or a named aspect.
///
/// Serialized as its string form, so `"O"` and `"Brand"` round-trip through
/// JSON and TSV unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectLabel {
    /// The `"O"` marker.
    Outside,
    /// A named aspect such as `Brand` or `Color`.
    Aspect(String),
}

impl AspectLabel {
    /// Build an aspect label, mapping the outside marker to [`AspectLabel::Outside`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == OUTSIDE_MARKER {
            AspectLabel::Outside
        } else {
            AspectLabel::Aspect(name)
        }
    }

    /// Returns `true` for the outside marker.
    #[must_use]
    pub fn is_outside(&self) -> bool {
        matches!(self, AspectLabel::Outside)
    }

    /// The aspect name, or `None` for the outside marker.
    pub fn aspect(&self) -> Option<&str> {
        match self {
            AspectLabel::Outside => None,
            AspectLabel::Aspect(name) => Some(name),
        }
    }

    /// The label as it appears in the source table.
    pub fn as_str(&self) -> &str {
        match self {
            AspectLabel::Outside => OUTSIDE_MARKER,
            AspectLabel::Aspect(name) => name,
        }
    }
}

impl fmt::Display for AspectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectLabel {
    type Err = AspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AspectError::InvalidLabel(s.to_string()));
        }
        Ok(AspectLabel::new(s))
    }
}

impl TryFrom<String> for AspectLabel {
    type Error = AspectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectLabel> for String {
    fn from(label: AspectLabel) -> Self {
        match label {
            AspectLabel::Outside => OUTSIDE_MARKER.to_string(),
            AspectLabel::Aspect(name) => name,
        }
    }
}
