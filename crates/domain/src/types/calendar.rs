//! Calendar view types: grid cells, day records, and displayable items

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_string_conversions;

/// One cell of the rendered 6x7 month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayCell {
    /// Local calendar date as an ISO `YYYY-MM-DD` string, used as merge key.
    pub date: String,
    pub is_current_month: bool,
    pub day_number: u32,
}

/// A scheduled event supplied by the API layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A task supplied by the API layer.
///
/// Tasks carry dates rather than timestamps; the display projection
/// synthesizes start/end from `scheduled_date` or `due_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// A date plus its events and tasks, as supplied by the API.
///
/// The grid builder does not own this data; it merges it into cells by
/// exact ISO-date string match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarViewDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

impl CalendarViewDay {
    /// The merge key for this day (ISO `YYYY-MM-DD`).
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Tri-state filter for which items a day cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFilter {
    All,
    Events,
    Tasks,
}

impl_domain_string_conversions!(ItemFilter {
    All => "all",
    Events => "events",
    Tasks => "tasks",
});

impl Default for ItemFilter {
    fn default() -> Self {
        Self::All
    }
}

/// A displayable calendar item: either an event or a task.
///
/// Events and tasks keep their own fields; the shared display projection is
/// computed, never stored, so there is no runtime shape-guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayItem {
    Event(Event),
    Task(TaskItem),
}

/// Display-relevant projection of a calendar item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProjection {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DisplayItem {
    pub fn title(&self) -> &str {
        match self {
            Self::Event(event) => &event.title,
            Self::Task(task) => &task.title,
        }
    }

    /// Compute the display projection for this item.
    ///
    /// Tasks synthesize start/end from `scheduled_date` or `due_date`,
    /// falling back to the supplied day date when neither is present.
    pub fn projection(&self, day: NaiveDate) -> ItemProjection {
        match self {
            Self::Event(event) => ItemProjection {
                title: event.title.clone(),
                start: event.start,
                end: event.end,
            },
            Self::Task(task) => {
                let date = task.scheduled_date.or(task.due_date).unwrap_or(day);
                let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
                let stamp = Utc.from_utc_datetime(&midnight);
                ItemProjection { title: task.title.clone(), start: stamp, end: stamp }
            }
        }
    }
}
