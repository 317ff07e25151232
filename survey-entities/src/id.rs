use std::{fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

/// Portable public identifier of a survey comment.
///
/// Identifiers are random (UUID v4) and generated by the creator
/// of an entity, never by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
#[error("Invalid id: {0}")]
pub struct IdParseError(#[from] uuid::Error);

impl FromStr for Id {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Hyphenated lower case, e.g. "67e55044-10b1-426f-9247-bb680e5fe0c8"
        write!(f, "{}", self.0.hyphenated())
    }
}
