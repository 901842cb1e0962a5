//! Project timeline use case
//!
//! Flattens the project set into dated start/end entries for the timeline
//! view, optionally filtered to one department, sorted chronologically.
//! End entries carry an urgency band so the view can badge approaching and
//! overdue completions.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::TimelineConfig;
use crate::domain::{DepartmentId, Project, ProjectRef, Urgency};
use crate::ports::{ProjectDirectory, ProjectFilter};

/// What a timeline entry marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEvent {
    /// The project's first scheduled day
    ProjectStart,
    /// The project's last scheduled day
    ProjectEnd,
}

/// One dated entry in the timeline view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Start or end marker
    pub event: TimelineEvent,
    /// The project the entry belongs to
    pub project: ProjectRef,
    /// Urgency band, set on end entries only
    pub urgency: Option<Urgency>,
}

/// Builds timeline entries from projects, pure and deterministically ordered
///
/// Each present date yields an entry; a project missing one of its dates
/// still contributes the other. Entries sort by date, then project id,
/// then start-before-end, so identical inputs produce identical output.
#[must_use]
pub fn build_timeline(projects: &[Project], today: NaiveDate, bands: &TimelineConfig) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();

    for project in projects {
        let reference = ProjectRef::new(project.id().clone(), project.title());

        if let Some(start) = project.start_date() {
            entries.push(TimelineEntry {
                date: start,
                event: TimelineEvent::ProjectStart,
                project: reference.clone(),
                urgency: None,
            });
        }

        if let Some(end) = project.end_date() {
            entries.push(TimelineEntry {
                date: end,
                event: TimelineEvent::ProjectEnd,
                project: reference.clone(),
                urgency: Some(Urgency::classify_with(
                    end,
                    today,
                    bands.due_soon_days,
                    bands.this_week_days,
                )),
            });
        }
    }

    entries.sort_by(|a, b| {
        (a.date, a.project.id(), event_rank(a.event))
            .cmp(&(b.date, b.project.id(), event_rank(b.event)))
    });
    entries
}

fn event_rank(event: TimelineEvent) -> u8 {
    match event {
        TimelineEvent::ProjectStart => 0,
        TimelineEvent::ProjectEnd => 1,
    }
}

/// Builds the timeline view from the project directory
pub struct TimelineUseCase {
    projects: Arc<dyn ProjectDirectory>,
    bands: TimelineConfig,
}

impl TimelineUseCase {
    pub fn new(projects: Arc<dyn ProjectDirectory>, bands: TimelineConfig) -> Self {
        Self { projects, bands }
    }

    /// Computes the timeline, optionally restricted to one department
    pub async fn execute(
        &self,
        department: Option<DepartmentId>,
        today: NaiveDate,
    ) -> Result<Vec<TimelineEntry>> {
        let mut filter = ProjectFilter::new();
        if let Some(department) = department {
            filter = filter.with_department(department);
        }

        let projects = self.projects.list_projects(&filter).await?;
        let entries = build_timeline(&projects, today, &self.bands);

        debug!(
            projects = projects.len(),
            entries = entries.len(),
            "Built timeline"
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, ProjectId};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn scheduled(id: &str, title: &str, start: &str, end: &str) -> Project {
        Project::new(ProjectId::new(id), title)
            .with_schedule(DateRange::new(date(start), date(end)).unwrap())
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let projects = vec![
            scheduled("p1", "Late", "2024-06-01", "2024-07-01"),
            scheduled("p2", "Early", "2024-01-01", "2024-02-01"),
        ];
        let entries = build_timeline(&projects, date("2024-01-01"), &TimelineConfig::default());

        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2024-01-01"),
                date("2024-02-01"),
                date("2024-06-01"),
                date("2024-07-01"),
            ]
        );
    }

    #[test]
    fn test_start_sorts_before_end_on_same_day() {
        // One project ends the day another starts
        let projects = vec![
            scheduled("p1", "First", "2024-01-01", "2024-03-01"),
            scheduled("p2", "Second", "2024-03-01", "2024-05-01"),
        ];
        let entries = build_timeline(&projects, date("2024-01-01"), &TimelineConfig::default());

        let march: Vec<_> = entries
            .iter()
            .filter(|e| e.date == date("2024-03-01"))
            .collect();
        assert_eq!(march.len(), 2);
        // Ordered by project id first, then start-before-end
        assert_eq!(march[0].project.id().as_str(), "p1");
        assert_eq!(march[0].event, TimelineEvent::ProjectEnd);
        assert_eq!(march[1].event, TimelineEvent::ProjectStart);
    }

    #[test]
    fn test_partial_dates_still_contribute() {
        let json = r#"{"id": "p3", "title": "Open ended", "startDate": "2024-04-01"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        let entries = build_timeline(
            std::slice::from_ref(&project),
            date("2024-01-01"),
            &TimelineConfig::default(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, TimelineEvent::ProjectStart);
        assert!(entries[0].urgency.is_none());
    }

    #[test]
    fn test_end_entries_carry_urgency() {
        let projects = vec![scheduled("p1", "Closing", "2024-01-01", "2024-03-12")];
        let entries = build_timeline(&projects, date("2024-03-10"), &TimelineConfig::default());

        let end = entries
            .iter()
            .find(|e| e.event == TimelineEvent::ProjectEnd)
            .unwrap();
        assert_eq!(end.urgency, Some(Urgency::DueSoon));
    }

    #[test]
    fn test_identical_input_identical_output() {
        let projects = vec![
            scheduled("p2", "B", "2024-01-01", "2024-01-10"),
            scheduled("p1", "A", "2024-01-01", "2024-01-10"),
        ];
        let today = date("2024-01-01");
        let first = build_timeline(&projects, today, &TimelineConfig::default());
        let second = build_timeline(&projects, today, &TimelineConfig::default());
        assert_eq!(first, second);
    }
}
