//! Project domain entity
//!
//! Projects are the central coordination record: a titled piece of work at
//! a free-text location, scheduled over a closed date range, led by one
//! department with any number of collaborators.
//!
//! Snapshot records come from a schemaless document store, so the fields
//! the conflict detector compares on (`location`, `start_date`, `end_date`)
//! are optional here. A project with any of them missing is simply never
//! comparable; see [`Project::schedule`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{DepartmentId, ProjectId};
use super::schedule::{lenient_date, DateRange};

/// Lifecycle status of a project
///
/// Informational only: conflict detection ignores status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not yet started
    #[default]
    Planning,
    /// In progress
    Active,
    /// Behind schedule
    Delayed,
    /// Finished
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Delayed => "delayed",
            ProjectStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(ProjectStatus::Planning),
            "active" => Ok(ProjectStatus::Active),
            "delayed" => Ok(ProjectStatus::Delayed),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// A municipal project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Document-store id
    id: ProjectId,
    /// Display name
    title: String,
    /// Free-text location label, compared for exact equality only
    #[serde(default)]
    location: Option<String>,
    /// First scheduled day (None when absent or unparseable in the record)
    #[serde(default, deserialize_with = "lenient_date")]
    start_date: Option<NaiveDate>,
    /// Last scheduled day (None when absent or unparseable in the record)
    #[serde(default, deserialize_with = "lenient_date")]
    end_date: Option<NaiveDate>,
    /// Lifecycle status
    #[serde(default)]
    status: ProjectStatus,
    /// Department that owns the project
    #[serde(default)]
    lead_department_id: Option<DepartmentId>,
    /// Departments collaborating on the project
    #[serde(default)]
    collaborating_departments: Vec<DepartmentId>,
    /// Budget granted to the project, if tracked
    #[serde(default)]
    budget_allocated: Option<f64>,
    /// Budget spent so far, if tracked
    #[serde(default)]
    budget_used: Option<f64>,
}

impl Project {
    /// Creates a project with the given id and title; everything else unset
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            location: None,
            start_date: None,
            end_date: None,
            status: ProjectStatus::default(),
            lead_department_id: None,
            collaborating_departments: Vec::new(),
            budget_allocated: None,
            budget_used: None,
        }
    }

    /// Sets the location label
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets both schedule dates from a validated range
    #[must_use]
    pub fn with_schedule(mut self, range: DateRange) -> Self {
        self.start_date = Some(range.start());
        self.end_date = Some(range.end());
        self
    }

    /// Sets the lifecycle status
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the lead department
    #[must_use]
    pub fn with_lead_department(mut self, department: DepartmentId) -> Self {
        self.lead_department_id = Some(department);
        self
    }

    /// Adds a collaborating department
    #[must_use]
    pub fn with_collaborator(mut self, department: DepartmentId) -> Self {
        self.collaborating_departments.push(department);
        self
    }

    /// Sets the budget figures
    #[must_use]
    pub fn with_budget(mut self, allocated: f64, used: f64) -> Self {
        self.budget_allocated = Some(allocated);
        self.budget_used = Some(used);
        self
    }

    /// Returns the project id
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the location label, if present
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the first scheduled day, if present
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the last scheduled day, if present
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the lifecycle status
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the lead department, if assigned
    pub fn lead_department_id(&self) -> Option<&DepartmentId> {
        self.lead_department_id.as_ref()
    }

    /// Returns the collaborating departments
    pub fn collaborating_departments(&self) -> &[DepartmentId] {
        &self.collaborating_departments
    }

    /// Returns the budget granted, if tracked
    pub fn budget_allocated(&self) -> Option<f64> {
        self.budget_allocated
    }

    /// Returns the budget spent, if tracked
    pub fn budget_used(&self) -> Option<f64> {
        self.budget_used
    }

    /// Returns the schedule as a range when both dates are present and ordered
    ///
    /// This is the explicit filtering step of the detection contract: a
    /// project without a well-formed schedule is treated as never
    /// conflicting, not as an error.
    #[must_use]
    pub fn schedule(&self) -> Option<DateRange> {
        let start = self.start_date?;
        let end = self.end_date?;
        DateRange::new(start, end).ok()
    }

    /// Returns true if more than one department is involved
    #[must_use]
    pub fn is_inter_departmental(&self) -> bool {
        !self.collaborating_departments.is_empty()
    }

    /// Returns true if the department leads or collaborates on the project
    #[must_use]
    pub fn involves_department(&self, department: &DepartmentId) -> bool {
        self.lead_department_id.as_ref() == Some(department)
            || self.collaborating_departments.contains(department)
    }
}
