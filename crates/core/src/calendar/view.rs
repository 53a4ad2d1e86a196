//! Day-record merge and item filtering for the month view
//!
//! The grid builder produces bare cells; this module merges the externally
//! supplied day records into them (by exact ISO-date string match) and
//! applies the tri-state item filter plus the "+N more" truncation policy.

use std::collections::HashMap;

use daybook_domain::constants::MAX_VISIBLE_ITEMS_PER_DAY;
use daybook_domain::{CalendarDayCell, CalendarViewDay, DisplayItem, ItemFilter};

/// Hash index over day records, keyed by ISO date string.
///
/// A linear scan per cell would also be correct, but a month view touches
/// 42 cells per render and the index keeps the merge O(n) overall.
pub struct MonthIndex {
    days: HashMap<String, CalendarViewDay>,
}

impl MonthIndex {
    /// Index the supplied day records. Later duplicates of a date replace
    /// earlier ones.
    pub fn new(days: Vec<CalendarViewDay>) -> Self {
        let days = days.into_iter().map(|day| (day.date_key(), day)).collect();
        Self { days }
    }

    /// The day record merged into `cell`, if the API supplied one.
    pub fn day_for(&self, cell: &CalendarDayCell) -> Option<&CalendarViewDay> {
        self.days.get(&cell.date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Produce the ordered, filtered item list for one day.
///
/// Events come first (when included), then tasks, both wrapped in the shared
/// displayable shape.
pub fn filtered_items(day: &CalendarViewDay, filter: ItemFilter) -> Vec<DisplayItem> {
    let mut items = Vec::new();

    if matches!(filter, ItemFilter::All | ItemFilter::Events) {
        items.extend(day.events.iter().cloned().map(DisplayItem::Event));
    }
    if matches!(filter, ItemFilter::All | ItemFilter::Tasks) {
        items.extend(day.tasks.iter().cloned().map(DisplayItem::Task));
    }

    items
}

/// The visible slice of a day's items plus the overflow count.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItems<'a> {
    pub visible: &'a [DisplayItem],
    pub overflow: usize,
}

impl VisibleItems<'_> {
    /// The "+N more" indicator, when anything is truncated.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// Apply the display truncation policy: at most 3 items are shown, the rest
/// collapse into a "+N more" indicator. This is presentation only; the full
/// list stays available to the caller.
pub fn visible_items(items: &[DisplayItem]) -> VisibleItems<'_> {
    let shown = items.len().min(MAX_VISIBLE_ITEMS_PER_DAY);
    VisibleItems { visible: &items[..shown], overflow: items.len() - shown }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use daybook_domain::{Event, TaskItem};

    use super::*;

    fn sample_day() -> CalendarViewDay {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        CalendarViewDay {
            date,
            events: vec![
                Event {
                    id: "e1".to_string(),
                    title: "Standup".to_string(),
                    start,
                    end: start,
                    location: None,
                },
                Event {
                    id: "e2".to_string(),
                    title: "Review".to_string(),
                    start,
                    end: start,
                    location: None,
                },
            ],
            tasks: vec![TaskItem {
                id: "t1".to_string(),
                title: "Send report".to_string(),
                scheduled_date: Some(date),
                due_date: None,
                completed: false,
            }],
        }
    }

    #[test]
    fn test_all_filter_orders_events_before_tasks() {
        let items = filtered_items(&sample_day(), ItemFilter::All);
        assert_eq!(items.len(), 3);
        assert!(matches!(items[0], DisplayItem::Event(_)));
        assert!(matches!(items[2], DisplayItem::Task(_)));
    }

    #[test]
    fn test_events_filter_excludes_tasks() {
        let items = filtered_items(&sample_day(), ItemFilter::Events);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| matches!(i, DisplayItem::Event(_))));
    }

    #[test]
    fn test_tasks_filter_excludes_events() {
        let items = filtered_items(&sample_day(), ItemFilter::Tasks);
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], DisplayItem::Task(_)));
    }

    #[test]
    fn test_truncation_keeps_three_and_counts_rest() {
        let mut day = sample_day();
        day.tasks.extend((0..4).map(|n| TaskItem {
            id: format!("extra-{n}"),
            title: format!("Task {n}"),
            scheduled_date: None,
            due_date: None,
            completed: false,
        }));

        let items = filtered_items(&day, ItemFilter::All);
        let split = visible_items(&items);
        assert_eq!(split.visible.len(), 3);
        assert_eq!(split.overflow, 4);
        assert_eq!(split.overflow_label().as_deref(), Some("+4 more"));
    }

    #[test]
    fn test_no_overflow_label_when_everything_fits() {
        let items = filtered_items(&sample_day(), ItemFilter::Tasks);
        let split = visible_items(&items);
        assert_eq!(split.overflow, 0);
        assert!(split.overflow_label().is_none());
    }

    #[test]
    fn test_index_lookup_by_date_key() {
        let day = sample_day();
        let index = MonthIndex::new(vec![day.clone()]);
        let cell = CalendarDayCell {
            date: "2024-03-05".to_string(),
            is_current_month: true,
            day_number: 5,
        };
        assert_eq!(index.day_for(&cell), Some(&day));

        let other = CalendarDayCell {
            date: "2024-03-06".to_string(),
            is_current_month: true,
            day_number: 6,
        };
        assert!(index.day_for(&other).is_none());
    }
}
