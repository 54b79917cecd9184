use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::schedule::Booking;

/// Header fragments recognised in the schedule CSV
const DATE_HEADER: &str = "開催日";
const LOCATION_HEADER: &str = "施策名";
const CATEGORY_HEADER: &str = "プロモ内容";
const DIRECTOR_HEADER: &str = "ディレクター名";
const STAFF_HEADERS: [&str; 4] = ["スタッフ名1", "スタッフ名2", "スタッフ名3", "スタッフ名4"];

/// One scheduled event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label in "M/D" form
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub director: String,
    #[serde(default)]
    pub staff: Vec<String>,
}

impl ScheduleEntry {
    pub fn new(date: &str, location: &str, director: &str, staff: &[&str]) -> Self {
        Self {
            date: date.to_string(),
            location: location.to_string(),
            category: String::new(),
            director: director.to_string(),
            staff: staff.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Director first, then staff in listed order. Duplicates are kept;
    /// blank names are not participants.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.director.as_str())
            .chain(self.staff.iter().map(String::as_str))
            .filter(|name| !name.trim().is_empty())
    }

    pub fn booking(&self) -> Booking {
        Booking::new(self.location.clone(), self.category.clone())
    }
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct Columns {
    date: Option<usize>,
    location: Option<usize>,
    category: Option<usize>,
    director: Option<usize>,
    staff: Vec<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let exact = |name: &str| headers.iter().position(|h| h == name);
        Self {
            date: headers.iter().position(|h| h.contains(DATE_HEADER)),
            location: exact(LOCATION_HEADER),
            category: exact(CATEGORY_HEADER),
            director: exact(DIRECTOR_HEADER),
            staff: STAFF_HEADERS.iter().filter_map(|&name| exact(name)).collect(),
        }
    }
}

fn field(record: &StringRecord, col: Option<usize>) -> &str {
    col.and_then(|c| record.get(c)).unwrap_or("")
}

/// Normalizes a date cell to an "M/D" day label.
///
/// Accepts "2024/07/01", "2024-07-01", "07/01" and "7/1", with an optional
/// trailing weekday note such as "7/1(月)". Anything else is returned as-is
/// and will never match a day of the displayed month.
pub fn normalize_date(raw: &str) -> String {
    let clean = raw
        .split(|c: char| c == '(' || c == '（')
        .next()
        .unwrap_or(raw)
        .trim();

    for format in ["%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(clean, format) {
            return format!("{}/{}", date.month(), date.day());
        }
    }

    if let Some((m, d)) = clean.split_once('/') {
        if let (Ok(month), Ok(day)) = (m.parse::<u32>(), d.parse::<u32>()) {
            return format!("{}/{}", month, day);
        }
    }

    clean.to_string()
}

/// Reads schedule entries from CSV data whose first row holds the headers.
///
/// Rows without a date or a location are skipped; staff columns that are
/// missing from the file are simply not participants.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<ScheduleEntry>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?);
    if columns.date.is_none() || columns.location.is_none() {
        warn!(?columns, "schedule CSV lacks a date or location column, no rows usable");
    }

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (index, result) in reader.records().enumerate() {
        let record = result?;

        let date = field(&record, columns.date);
        let location = field(&record, columns.location);
        if date.is_empty() || location.is_empty() {
            debug!(row = index + 2, "skipping row without date or location");
            skipped += 1;
            continue;
        }

        let staff = columns
            .staff
            .iter()
            .filter_map(|&col| record.get(col))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        entries.push(ScheduleEntry {
            date: normalize_date(date),
            location: location.to_string(),
            category: field(&record, columns.category).to_string(),
            director: field(&record, columns.director).to_string(),
            staff,
        });
    }

    info!(loaded = entries.len(), skipped, "parsed schedule CSV");
    Ok(entries)
}

/// Loads schedule entries from a CSV file
pub fn load_entries<P: AsRef<Path>>(csv_path: P) -> Result<Vec<ScheduleEntry>> {
    let file = std::fs::File::open(csv_path.as_ref())?;
    read_entries(file)
}
