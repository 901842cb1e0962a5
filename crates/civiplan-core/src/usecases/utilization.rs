//! Resource utilization use case
//!
//! Computes, per resource, the quantity reserved on a given day and an
//! availability band for the resources view: fully allocated at 100% or
//! more, limited at 80% or more, otherwise available.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Resource, ResourceAllocation, ResourceId, ResourceType};
use crate::ports::ResourceDirectory;

/// Availability band for a resource on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Under 80% of capacity reserved
    Available,
    /// 80% or more of capacity reserved
    Limited,
    /// At or over capacity
    FullyAllocated,
}

impl Availability {
    /// Classifies a utilization percentage
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 100 {
            Availability::FullyAllocated
        } else if percent >= 80 {
            Availability::Limited
        } else {
            Availability::Available
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Availability::Available => "Available",
            Availability::Limited => "Limited Availability",
            Availability::FullyAllocated => "Fully Allocated",
        };
        write!(f, "{}", s)
    }
}

/// Utilization of one resource on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceUsage {
    /// The resource id
    pub resource_id: ResourceId,
    /// Its display name
    pub name: String,
    /// Its category
    pub kind: ResourceType,
    /// Total capacity
    pub total_quantity: u32,
    /// Quantity reserved on the day
    pub allocated: u32,
    /// Capacity remaining (0 when overallocated)
    pub available: u32,
    /// Percent of capacity reserved, rounded
    pub percent: u32,
    /// Availability band
    pub availability: Availability,
}

/// Quantity of a resource reserved on a given day
///
/// Sums comparable allocations for the resource whose window contains the
/// day; malformed allocation records contribute nothing.
#[must_use]
pub fn allocated_on(
    resource_id: &ResourceId,
    allocations: &[ResourceAllocation],
    day: NaiveDate,
) -> u32 {
    allocations
        .iter()
        .filter(|a| a.resource_id() == Some(resource_id))
        .filter_map(|a| {
            let window = a.window()?;
            let quantity = a.allocated_quantity()?;
            window.contains(day).then_some(quantity)
        })
        .sum()
}

/// Computes one resource's usage on a day
#[must_use]
pub fn usage_on(resource: &Resource, allocations: &[ResourceAllocation], day: NaiveDate) -> ResourceUsage {
    let allocated = allocated_on(resource.id(), allocations, day);
    let total = resource.total_quantity();
    let percent = if total == 0 {
        if allocated > 0 { 100 } else { 0 }
    } else {
        (allocated as f64 / total as f64 * 100.0).round() as u32
    };

    ResourceUsage {
        resource_id: resource.id().clone(),
        name: resource.name().to_string(),
        kind: resource.kind(),
        total_quantity: total,
        allocated,
        available: total.saturating_sub(allocated),
        percent,
        availability: Availability::from_percent(percent),
    }
}

/// Builds the resources view from the resource directory
pub struct UtilizationUseCase {
    resources: Arc<dyn ResourceDirectory>,
}

impl UtilizationUseCase {
    pub fn new(resources: Arc<dyn ResourceDirectory>) -> Self {
        Self { resources }
    }

    /// Computes usage for every resource as of the given day
    pub async fn execute(&self, day: NaiveDate) -> Result<Vec<ResourceUsage>> {
        let resources = self.resources.list_resources().await?;
        let allocations = self.resources.list_allocations().await?;

        let usages: Vec<ResourceUsage> = resources
            .iter()
            .map(|r| usage_on(r, &allocations, day))
            .collect();

        debug!(resources = usages.len(), %day, "Computed resource utilization");

        Ok(usages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AllocationId, DateRange, ProjectId};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn allocation(id: &str, resource: &str, quantity: u32, start: &str, end: &str) -> ResourceAllocation {
        ResourceAllocation::new(
            AllocationId::new(id),
            ResourceId::new(resource),
            ProjectId::new("p1"),
            quantity,
            DateRange::new(date(start), date(end)).unwrap(),
        )
    }

    #[test]
    fn test_allocated_on_counts_only_active_windows() {
        let allocations = vec![
            allocation("a1", "r1", 3, "2024-01-01", "2024-01-10"),
            allocation("a2", "r1", 2, "2024-02-01", "2024-02-10"),
            allocation("a3", "r2", 9, "2024-01-01", "2024-01-10"),
        ];

        assert_eq!(allocated_on(&ResourceId::new("r1"), &allocations, date("2024-01-05")), 3);
        assert_eq!(allocated_on(&ResourceId::new("r1"), &allocations, date("2024-02-05")), 2);
        assert_eq!(allocated_on(&ResourceId::new("r1"), &allocations, date("2024-03-01")), 0);
    }

    #[test]
    fn test_malformed_allocations_contribute_nothing() {
        let json = r#"{"id": "a1", "resourceId": "r1", "projectId": "p1",
                       "allocatedQuantity": 4}"#;
        let dateless: ResourceAllocation = serde_json::from_str(json).unwrap();
        assert_eq!(
            allocated_on(&ResourceId::new("r1"), &[dateless], date("2024-01-01")),
            0
        );
    }

    #[test]
    fn test_availability_bands() {
        assert_eq!(Availability::from_percent(0), Availability::Available);
        assert_eq!(Availability::from_percent(79), Availability::Available);
        assert_eq!(Availability::from_percent(80), Availability::Limited);
        assert_eq!(Availability::from_percent(99), Availability::Limited);
        assert_eq!(Availability::from_percent(100), Availability::FullyAllocated);
        assert_eq!(Availability::from_percent(140), Availability::FullyAllocated);
    }

    #[test]
    fn test_usage_on_overallocated_resource() {
        let resource = Resource::new(ResourceId::new("r1"), "Crane", ResourceType::Equipment, 2);
        let allocations = vec![
            allocation("a1", "r1", 2, "2024-01-01", "2024-01-10"),
            allocation("a2", "r1", 1, "2024-01-05", "2024-01-15"),
        ];

        let usage = usage_on(&resource, &allocations, date("2024-01-07"));
        assert_eq!(usage.allocated, 3);
        assert_eq!(usage.available, 0);
        assert_eq!(usage.percent, 150);
        assert_eq!(usage.availability, Availability::FullyAllocated);
    }

    #[test]
    fn test_usage_on_zero_capacity_resource() {
        let resource = Resource::new(ResourceId::new("r1"), "Retired lift", ResourceType::Equipment, 0);

        let idle = usage_on(&resource, &[], date("2024-01-01"));
        assert_eq!(idle.percent, 0);
        assert_eq!(idle.availability, Availability::Available);

        let reserved = usage_on(
            &resource,
            &[allocation("a1", "r1", 1, "2024-01-01", "2024-01-02")],
            date("2024-01-01"),
        );
        assert_eq!(reserved.percent, 100);
        assert_eq!(reserved.availability, Availability::FullyAllocated);
    }
}
