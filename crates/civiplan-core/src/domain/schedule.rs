//! Calendar scheduling types
//!
//! All scheduling in Civiplan is whole-day granular: a project or an
//! allocation occupies a closed interval of calendar dates, and two
//! intervals overlap when `a.start <= b.end && b.start <= a.end`
//! (inclusive on both ends, so ranges that share a boundary date overlap).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::DomainError;

/// A closed interval of calendar dates
///
/// Both endpoints are part of the range. Construction validates that the
/// start does not come after the end; callers that assemble ranges from
/// untrusted record fields should filter before constructing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a DateRange, validating `start <= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the range
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date of the range
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the two closed ranges share at least one date
    ///
    /// Inclusive on both ends: `[Jan 1, Jan 5]` and `[Jan 5, Jan 10]`
    /// overlap, `[Jan 1, Jan 5]` and `[Jan 6, Jan 10]` do not.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns true if the given date falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// How pressing an approaching end date is, relative to "today"
///
/// Bands match the dashboard's milestone badges: overdue, due within
/// three days, due within the week, or further out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The due date has already passed
    Overdue,
    /// Due within the near-term band (default: 3 days)
    DueSoon,
    /// Due within the week band (default: 7 days)
    ThisWeek,
    /// Due beyond the week band
    Upcoming,
}

impl Urgency {
    /// Default near-term band in days
    pub const DUE_SOON_DAYS: i64 = 3;
    /// Default week band in days
    pub const THIS_WEEK_DAYS: i64 = 7;

    /// Classifies a due date against `today` using the default bands
    #[must_use]
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        Self::classify_with(due, today, Self::DUE_SOON_DAYS, Self::THIS_WEEK_DAYS)
    }

    /// Classifies a due date against `today` with explicit band widths
    #[must_use]
    pub fn classify_with(
        due: NaiveDate,
        today: NaiveDate,
        due_soon_days: i64,
        this_week_days: i64,
    ) -> Self {
        let days_left = (due - today).num_days();
        if days_left < 0 {
            Urgency::Overdue
        } else if days_left <= due_soon_days {
            Urgency::DueSoon
        } else if days_left <= this_week_days {
            Urgency::ThisWeek
        } else {
            Urgency::Upcoming
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Urgency::Overdue => "overdue",
            Urgency::DueSoon => "due_soon",
            Urgency::ThisWeek => "this_week",
            Urgency::Upcoming => "upcoming",
        };
        write!(f, "{}", s)
    }
}

/// Lenient `YYYY-MM-DD` date deserialization for snapshot records
///
/// Document-store exports routinely carry absent or malformed date fields.
/// The detection contract excludes such records instead of failing the
/// whole snapshot load, so any value that is not a well-formed date
/// deserializes to `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_dates() {
        let err = DateRange::new(date("2024-02-01"), date("2024-01-01")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_single_day_range() {
        let r = range("2024-01-05", "2024-01-05");
        assert!(r.contains(date("2024-01-05")));
        assert!(r.overlaps(&r));
    }

    #[test]
    fn test_overlap_partial() {
        let a = range("2024-01-01", "2024-01-10");
        let b = range("2024-01-05", "2024-01-15");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_shared_boundary_date() {
        // Closed intervals: sharing an endpoint counts as overlap
        let a = range("2024-01-01", "2024-01-05");
        let b = range("2024-01-05", "2024-01-10");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_adjacent_days() {
        let a = range("2024-01-01", "2024-01-05");
        let b = range("2024-01-06", "2024-01-10");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = range("2024-01-01", "2024-12-31");
        let inner = range("2024-06-01", "2024-06-30");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_urgency_bands() {
        let today = date("2024-03-10");

        assert_eq!(Urgency::classify(date("2024-03-09"), today), Urgency::Overdue);
        assert_eq!(Urgency::classify(date("2024-03-10"), today), Urgency::DueSoon);
        assert_eq!(Urgency::classify(date("2024-03-13"), today), Urgency::DueSoon);
        assert_eq!(Urgency::classify(date("2024-03-14"), today), Urgency::ThisWeek);
        assert_eq!(Urgency::classify(date("2024-03-17"), today), Urgency::ThisWeek);
        assert_eq!(Urgency::classify(date("2024-03-18"), today), Urgency::Upcoming);
    }

    #[test]
    fn test_urgency_custom_bands() {
        let today = date("2024-03-10");
        let u = Urgency::classify_with(date("2024-03-20"), today, 5, 14);
        assert_eq!(u, Urgency::ThisWeek);
    }

    #[test]
    fn test_lenient_date_parsing() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "lenient_date")]
            when: Option<NaiveDate>,
        }

        let ok: Probe = serde_json::from_str(r#"{"when": "2024-01-15"}"#).unwrap();
        assert_eq!(ok.when, Some(date("2024-01-15")));

        let bad: Probe = serde_json::from_str(r#"{"when": "not a date"}"#).unwrap();
        assert_eq!(bad.when, None);

        let absent: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.when, None);

        let null: Probe = serde_json::from_str(r#"{"when": null}"#).unwrap();
        assert_eq!(null.when, None);
    }
}
