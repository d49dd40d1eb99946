//! Strongly-typed identifier value objects.
//!
//! Identifiers are assigned by the database on insert, so none of these
//! types can be minted out of thin air; they come back from a repository.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i64);

impl CompanyId {
    /// Wraps a raw row id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevId(i64);

impl DevId {
    /// Wraps a raw row id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DevId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a freebie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreebieId(i64);

impl FreebieId {
    /// Wraps a raw row id.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FreebieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FreebieId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
