//! Domain newtypes for identifiers
//!
//! This module provides strongly-typed wrappers for document-store record
//! identifiers. The backing store assigns opaque string ids, so each newtype
//! wraps a `String` rather than imposing a format on it. The wrappers exist
//! to keep a `ProjectId` from ever being handed to an API that expects a
//! `ResourceId`.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier for Project records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a ProjectId from a document-store id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier for Department records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Create a DepartmentId from a document-store id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DepartmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DepartmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier for Resource records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a ResourceId from a document-store id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier for ResourceAllocation records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationId(String);

impl AllocationId {
    /// Create an AllocationId from a document-store id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AllocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AllocationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_display() {
        let id = ProjectId::new("proj-42");
        assert_eq!(id.to_string(), "proj-42");
        assert_eq!(id.as_str(), "proj-42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProjectId::new("a"), ProjectId::from("a"));
        assert_ne!(ResourceId::new("a"), ResourceId::new("b"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = DepartmentId::new("dept-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dept-7\"");

        let back: DepartmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
