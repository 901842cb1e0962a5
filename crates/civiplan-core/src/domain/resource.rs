//! Resource and allocation domain entities
//!
//! Resources are shared municipal assets (equipment, vehicles, crews) with
//! an integer capacity. Allocations reserve a quantity of one resource for
//! one project over a closed date range. Overallocation detection compares
//! concurrent allocations against the resource's `total_quantity`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{AllocationId, ProjectId, ResourceId};
use super::schedule::{lenient_date, DateRange};

/// Category of a shared resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Heavy or specialist equipment
    Equipment,
    /// Fleet vehicles
    Vehicle,
    /// Staffed crews
    Personnel,
    /// Anything else
    #[default]
    Other,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResourceType::Equipment => "equipment",
            ResourceType::Vehicle => "vehicle",
            ResourceType::Personnel => "personnel",
            ResourceType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equipment" => Ok(ResourceType::Equipment),
            "vehicle" => Ok(ResourceType::Vehicle),
            "personnel" => Ok(ResourceType::Personnel),
            "other" => Ok(ResourceType::Other),
            unknown => Err(DomainError::UnknownResourceType(unknown.to_string())),
        }
    }
}

/// A shared municipal resource with a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    id: ResourceId,
    name: String,
    #[serde(default, rename = "type")]
    kind: ResourceType,
    #[serde(default)]
    total_quantity: u32,
}

impl Resource {
    /// Creates a resource
    pub fn new(
        id: ResourceId,
        name: impl Into<String>,
        kind: ResourceType,
        total_quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            total_quantity,
        }
    }

    /// Returns the resource id
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resource category
    pub fn kind(&self) -> ResourceType {
        self.kind
    }

    /// Returns the total capacity
    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }
}

/// A reservation of part of a resource for a project over a date range
///
/// Raw allocation records can miss any field but their id; an allocation
/// missing its resource, project, quantity, or a well-formed range is
/// non-comparable and is skipped (and counted) by detection rather than
/// failing the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocation {
    id: AllocationId,
    #[serde(default)]
    resource_id: Option<ResourceId>,
    #[serde(default)]
    project_id: Option<ProjectId>,
    #[serde(default)]
    allocated_quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient_date")]
    start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    end_date: Option<NaiveDate>,
}

impl ResourceAllocation {
    /// Creates a fully-populated allocation
    pub fn new(
        id: AllocationId,
        resource_id: ResourceId,
        project_id: ProjectId,
        allocated_quantity: u32,
        range: DateRange,
    ) -> Self {
        Self {
            id,
            resource_id: Some(resource_id),
            project_id: Some(project_id),
            allocated_quantity: Some(allocated_quantity),
            start_date: Some(range.start()),
            end_date: Some(range.end()),
        }
    }

    /// Returns the allocation id
    pub fn id(&self) -> &AllocationId {
        &self.id
    }

    /// Returns the reserved resource, if recorded
    pub fn resource_id(&self) -> Option<&ResourceId> {
        self.resource_id.as_ref()
    }

    /// Returns the reserving project, if recorded
    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the reserved quantity, if recorded
    pub fn allocated_quantity(&self) -> Option<u32> {
        self.allocated_quantity
    }

    /// Returns the reservation window when both dates are present and ordered
    #[must_use]
    pub fn window(&self) -> Option<DateRange> {
        let start = self.start_date?;
        let end = self.end_date?;
        DateRange::new(start, end).ok()
    }

    /// Returns true if every field detection compares on is present
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        self.resource_id.is_some()
            && self.project_id.is_some()
            && self.allocated_quantity.is_some()
            && self.window().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_resource_type_labels() {
        assert_eq!(ResourceType::Personnel.to_string(), "personnel");
        assert_eq!("vehicle".parse::<ResourceType>().unwrap(), ResourceType::Vehicle);
        assert!("boat".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_resource_type_field_renamed() {
        // The document store calls the category field "type"
        let json = r#"{"id": "r1", "name": "Excavator", "type": "equipment", "totalQuantity": 3}"#;
        let r: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(r.kind(), ResourceType::Equipment);
        assert_eq!(r.total_quantity(), 3);
    }

    #[test]
    fn test_allocation_comparability() {
        let full = ResourceAllocation::new(
            AllocationId::new("a1"),
            ResourceId::new("r1"),
            ProjectId::new("p1"),
            2,
            DateRange::new(date("2024-01-01"), date("2024-01-10")).unwrap(),
        );
        assert!(full.is_comparable());

        let json = r#"{"id": "a2", "resourceId": "r1", "allocatedQuantity": 2}"#;
        let missing_dates: ResourceAllocation = serde_json::from_str(json).unwrap();
        assert!(!missing_dates.is_comparable());
        assert!(missing_dates.window().is_none());

        let json = r#"{"id": "a3", "projectId": "p1", "allocatedQuantity": 2,
                       "startDate": "2024-01-01", "endDate": "2024-01-10"}"#;
        let missing_resource: ResourceAllocation = serde_json::from_str(json).unwrap();
        assert!(!missing_resource.is_comparable());
    }

    #[test]
    fn test_allocation_inverted_dates_not_comparable() {
        let json = r#"{"id": "a4", "resourceId": "r1", "projectId": "p1",
                       "allocatedQuantity": 1,
                       "startDate": "2024-02-01", "endDate": "2024-01-01"}"#;
        let a: ResourceAllocation = serde_json::from_str(json).unwrap();
        assert!(a.window().is_none());
        assert!(!a.is_comparable());
    }
}
