//! Business category and location values.
//!
//! Both are stored as their raw slug (`"new-york"`, `"healthcare"`) so that
//! persisted data stays readable by older clients. Slugs outside the known
//! set are preserved verbatim in the `Other` variant and displayed as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Restaurant,
    Retail,
    Service,
    Healthcare,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Retail => "retail",
            Self::Service => "service",
            Self::Healthcare => "healthcare",
            Self::Other(raw) => raw,
        }
    }

    /// Display label; unknown slugs pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Retail => "Retail",
            Self::Service => "Service",
            Self::Healthcare => "Healthcare",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "restaurant" => Self::Restaurant,
            "retail" => Self::Retail,
            "service" => Self::Service,
            "healthcare" => Self::Healthcare,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self { Self::from(raw.to_string()) }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    NewYork,
    LosAngeles,
    Chicago,
    Miami,
    Other(String),
}

impl Location {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NewYork => "new-york",
            Self::LosAngeles => "los-angeles",
            Self::Chicago => "chicago",
            Self::Miami => "miami",
            Self::Other(raw) => raw,
        }
    }

    /// Display label; unknown slugs pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Self::NewYork => "New York",
            Self::LosAngeles => "Los Angeles",
            Self::Chicago => "Chicago",
            Self::Miami => "Miami",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "new-york" => Self::NewYork,
            "los-angeles" => Self::LosAngeles,
            "chicago" => Self::Chicago,
            "miami" => Self::Miami,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self { Self::from(raw.to_string()) }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        match location {
            Location::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
