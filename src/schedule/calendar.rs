use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Month navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prev" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            _ => Err(ViewerError::InvalidDirection(s.to_string())),
        }
    }
}

/// Formats a day label the way entries write dates ("7/1", not "07/01")
pub fn day_label(month: u32, day: u32) -> String {
    format!("{}/{}", month, day)
}

/// Number of days in a month, counted as the distance to the first of the
/// following month. Both dates must lie in chrono's calendar range.
fn day_count(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(ViewerError::InvalidYear(year))?;
    let next = if month == 12 {
        year.checked_add(1)
            .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(ViewerError::InvalidYear(year))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn labels(month: u32, count: u32) -> Vec<String> {
    (1..=count).map(|day| day_label(month, day)).collect()
}

/// One "M/D" label per calendar day of the month, ascending.
pub fn days_in_month(year: i32, month: u32) -> Result<Vec<String>> {
    if !(1..=12).contains(&month) {
        return Err(ViewerError::InvalidMonth(month));
    }
    Ok(labels(month, day_count(year, month)?))
}

/// Steps one month forward or back, rolling the year over at the ends.
///
/// Fails with `InvalidYear` only when the rolled-over year does not fit in
/// an `i32`.
pub fn advance(month: u32, year: i32, direction: Direction) -> Result<(u32, i32)> {
    let stepped = match direction {
        Direction::Prev if month <= 1 => year.checked_sub(1).map(|y| (12, y)),
        Direction::Prev => Some((month - 1, year)),
        Direction::Next if month >= 12 => year.checked_add(1).map(|y| (1, y)),
        Direction::Next => Some((month + 1, year)),
    };
    stepped.ok_or(ViewerError::InvalidYear(year))
}

/// A validated (year, month) pair whose every day has a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
    #[serde(skip)]
    day_count: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ViewerError::InvalidMonth(month));
        }
        let day_count = day_count(year, month)?;
        Ok(Self { year, month, day_count })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The neighbouring month, if it is still a valid cursor
    pub fn advance(self, direction: Direction) -> Result<Self> {
        let (month, year) = advance(self.month, self.year, direction)?;
        Self::new(year, month)
    }

    pub fn days(&self) -> Vec<String> {
        labels(self.month, self.day_count)
    }

    /// Whether a day label belongs to this month ("7/14" for July)
    pub fn contains_label(&self, label: &str) -> bool {
        label
            .split_once('/')
            .and_then(|(m, d)| Some((m.parse::<u32>().ok()?, d.parse::<u32>().ok()?)))
            .map(|(m, d)| m == self.month && (1..=self.day_count).contains(&d))
            .unwrap_or(false)
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self {
            year: 2024,
            month: 7,
            day_count: 31,
        }
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年 {}月", self.year, self.month)
    }
}
