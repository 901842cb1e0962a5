//! Interval clustering
//!
//! Groups date-ranged items into connected components under the inclusive
//! overlap relation: sort by start date, sweep once, and extend the
//! current group while the next item starts on or before the furthest end
//! seen so far. Chains of pairwise overlaps land in one group even when
//! their extremes never touch, which is what lets capacity sums be counted
//! against a resource exactly once per concurrent group.

use civiplan_core::domain::DateRange;

/// A group of transitively-overlapping items
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup<T> {
    /// The items, ordered by start date (ties keep input order)
    pub items: Vec<(DateRange, T)>,
}

impl<T> OverlapGroup<T> {
    /// The union of the group's ranges (well-formed by construction)
    #[must_use]
    pub fn span(&self) -> Option<DateRange> {
        let start = self.items.iter().map(|(r, _)| r.start()).min()?;
        let end = self.items.iter().map(|(r, _)| r.end()).max()?;
        DateRange::new(start, end).ok()
    }
}

/// Partitions items into transitive-overlap groups
///
/// The sweep is O(n log n) in the number of items. Output order is
/// deterministic: groups appear in order of their earliest start, items
/// within a group by start date with input order breaking ties.
#[must_use]
pub fn cluster_overlapping<T>(mut items: Vec<(DateRange, T)>) -> Vec<OverlapGroup<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    // Stable sort keeps input order for identical ranges
    items.sort_by_key(|(range, _)| (range.start(), range.end()));

    let mut groups: Vec<OverlapGroup<T>> = Vec::new();
    let mut current: Vec<(DateRange, T)> = Vec::new();
    let mut furthest_end = None;

    for (range, item) in items {
        let extends_current = match furthest_end {
            Some(end) => range.start() <= end,
            None => false,
        };

        if extends_current {
            furthest_end = furthest_end.map(|end: chrono::NaiveDate| end.max(range.end()));
        } else {
            if !current.is_empty() {
                groups.push(OverlapGroup {
                    items: std::mem::take(&mut current),
                });
            }
            furthest_end = Some(range.end());
        }
        current.push((range, item));
    }

    if !current.is_empty() {
        groups.push(OverlapGroup { items: current });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: &str, end: &str) -> DateRange {
        let parse = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        DateRange::new(parse(start), parse(end)).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let groups = cluster_overlapping::<&str>(Vec::new());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_disjoint_items_each_get_a_group() {
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-05"), "a"),
            (range("2024-02-01", "2024-02-05"), "b"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items[0].1, "a");
        assert_eq!(groups[1].items[0].1, "b");
    }

    #[test]
    fn test_chain_collapses_into_one_group() {
        // a overlaps b, b overlaps c, but a and c never touch
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-10"), "a"),
            (range("2024-01-08", "2024-01-20"), "b"),
            (range("2024-01-18", "2024-01-30"), "c"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 3);
    }

    #[test]
    fn test_shared_boundary_joins_group() {
        // Closed intervals: touching on one date is an overlap
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-05"), "a"),
            (range("2024-01-05", "2024-01-10"), "b"),
        ]);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_adjacent_days_split_groups() {
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-05"), "a"),
            (range("2024-01-06", "2024-01-10"), "b"),
        ]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_contained_range_does_not_shrink_reach() {
        // b sits inside a; c overlaps a's tail and must join the group
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-31"), "a"),
            (range("2024-01-05", "2024-01-08"), "b"),
            (range("2024-01-25", "2024-02-05"), "c"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 3);
    }

    #[test]
    fn test_unsorted_input_is_handled() {
        let groups = cluster_overlapping(vec![
            (range("2024-03-01", "2024-03-10"), "late"),
            (range("2024-01-01", "2024-01-10"), "early"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items[0].1, "early");
    }

    #[test]
    fn test_group_span() {
        let groups = cluster_overlapping(vec![
            (range("2024-01-01", "2024-01-10"), "a"),
            (range("2024-01-08", "2024-01-20"), "b"),
        ]);
        let span = groups[0].span().unwrap();
        assert_eq!(span.start(), NaiveDate::parse_from_str("2024-01-01", "%Y-%m-%d").unwrap());
        assert_eq!(span.end(), NaiveDate::parse_from_str("2024-01-20", "%Y-%m-%d").unwrap());
    }
}
