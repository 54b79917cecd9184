use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a person is doing on a given day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub location: String,
    /// Source-provided category code (CSV only), empty when absent
    #[serde(default)]
    pub category: String,
}

impl Booking {
    pub fn new(location: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            category: category.into(),
        }
    }
}

/// One person's row: day label ("M/D") -> booking, `None` = unscheduled
pub type DayRow = IndexMap<String, Option<Booking>>;

/// Person -> day -> booking lookup, ordered by first appearance of each person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonSchedule {
    rows: IndexMap<String, DayRow>,
}

impl PersonSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row for `person`, creating it pre-filled with `None` for
    /// every label in `days` if the person is new.
    pub fn row_mut(&mut self, person: &str, days: &[String]) -> &mut DayRow {
        self.rows
            .entry(person.to_string())
            .or_insert_with(|| days.iter().map(|day| (day.clone(), None)).collect())
    }

    pub fn row(&self, person: &str) -> Option<&DayRow> {
        self.rows.get(person)
    }

    /// Booking for `person` on `day`; `None` for unknown people, unknown days
    /// and unscheduled days alike.
    pub fn cell(&self, person: &str, day: &str) -> Option<&Booking> {
        self.rows.get(person)?.get(day)?.as_ref()
    }

    /// Every known person in order of first appearance
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
