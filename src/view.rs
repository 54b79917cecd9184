//! Immutable view-model for the schedule grid.
//!
//! A `ScheduleView` owns the loaded entries, the displayed month, the search
//! term and the person selector, together with the pivot derived from them.
//! Every transition returns a new view; changing the month or the entries
//! re-runs the pivot, changing the search or the selection reuses it.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::parser::ScheduleEntry;
use crate::schedule::{
    all_people, build_person_schedule, filter_people, Booking, CategoryTag, Classifier,
    Direction, MonthCursor, PersonSchedule,
};

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub day: String,
    pub booking: Option<Booking>,
    pub tag: Option<CategoryTag>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub person: String,
    /// First character of the name, shown as an avatar
    pub initial: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub visible_people: usize,
    /// All loaded entries, whatever month they fall in
    pub total_entries: usize,
    pub month_entries: usize,
}

#[derive(Debug, Clone)]
pub struct ScheduleView {
    entries: Arc<[ScheduleEntry]>,
    classifier: Arc<Classifier>,
    cursor: MonthCursor,
    search: String,
    selected_person: String,
    days: Arc<[String]>,
    schedule: Arc<PersonSchedule>,
    all_people: Arc<[String]>,
}

impl ScheduleView {
    pub fn new(entries: impl Into<Arc<[ScheduleEntry]>>, cursor: MonthCursor) -> Self {
        Self::pivot(
            entries.into(),
            Arc::new(Classifier::default()),
            cursor,
            String::new(),
            String::new(),
        )
    }

    fn pivot(
        entries: Arc<[ScheduleEntry]>,
        classifier: Arc<Classifier>,
        cursor: MonthCursor,
        search: String,
        selected_person: String,
    ) -> Self {
        let days = cursor.days();
        let schedule = build_person_schedule(&entries, &days);
        let people = all_people(&schedule);
        debug!(
            month = %cursor,
            entries = entries.len(),
            people = people.len(),
            "rebuilt person schedule"
        );

        Self {
            entries,
            classifier,
            cursor,
            search,
            selected_person,
            days: days.into(),
            schedule: Arc::new(schedule),
            all_people: people.into(),
        }
    }

    pub fn with_classifier(&self, classifier: Classifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
            ..self.clone()
        }
    }

    pub fn with_entries(&self, entries: impl Into<Arc<[ScheduleEntry]>>) -> Self {
        Self::pivot(
            entries.into(),
            self.classifier.clone(),
            self.cursor,
            self.search.clone(),
            self.selected_person.clone(),
        )
    }

    pub fn with_cursor(&self, cursor: MonthCursor) -> Self {
        Self::pivot(
            self.entries.clone(),
            self.classifier.clone(),
            cursor,
            self.search.clone(),
            self.selected_person.clone(),
        )
    }

    /// The neighbouring month; fails only past the end of the calendar
    pub fn navigate(&self, direction: Direction) -> Result<Self> {
        Ok(self.with_cursor(self.cursor.advance(direction)?))
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_selected_person(&self, person: impl Into<String>) -> Self {
        Self {
            selected_person: person.into(),
            ..self.clone()
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn schedule(&self) -> &PersonSchedule {
        &self.schedule
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Everyone seen in any entry, for the person selector
    pub fn all_people(&self) -> &[String] {
        &self.all_people
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_person(&self) -> &str {
        &self.selected_person
    }

    pub fn visible_people(&self) -> Vec<String> {
        filter_people(&self.all_people, &self.search, &self.selected_person)
    }

    /// Dense grid rows for the visible people over the displayed days
    pub fn rows(&self) -> Vec<GridRow> {
        self.visible_people()
            .into_iter()
            .map(|person| {
                let cells = self
                    .days
                    .iter()
                    .map(|day| {
                        let booking = self.schedule.cell(&person, day).cloned();
                        let tag = booking.as_ref().map(|b| self.classifier.classify_booking(b));
                        GridCell {
                            day: day.clone(),
                            booking,
                            tag,
                        }
                    })
                    .collect();

                GridRow {
                    initial: person.chars().next().map(String::from).unwrap_or_default(),
                    person,
                    cells,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            visible_people: self.visible_people().len(),
            total_entries: self.entries.len(),
            month_entries: self
                .entries
                .iter()
                .filter(|e| self.cursor.contains_label(&e.date))
                .count(),
        }
    }
}
