//! Department domain entity

use serde::{Deserialize, Serialize};

use super::newtypes::DepartmentId;

/// A municipal department, referenced (never owned) by projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    id: DepartmentId,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
}

impl Department {
    /// Creates a department
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
        }
    }

    /// Sets the abbreviated name
    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Returns the department id
    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    /// Returns the full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the abbreviated name, falling back to the full name
    pub fn short_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_fallback() {
        let d = Department::new(DepartmentId::new("d1"), "Public Works");
        assert_eq!(d.short_name(), "Public Works");

        let d = d.with_short_name("PW");
        assert_eq!(d.short_name(), "PW");
        assert_eq!(d.name(), "Public Works");
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{"id": "d2", "name": "Parks & Recreation", "shortName": "Parks"}"#;
        let d: Department = serde_json::from_str(json).unwrap();
        assert_eq!(d.id().as_str(), "d2");
        assert_eq!(d.short_name(), "Parks");
    }
}
