use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

use crate::mock::mock_entries;
use crate::parser::{load_entries, ScheduleEntry};

/// Where schedule entries come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Mock,
    Csv(PathBuf),
}

impl DataSource {
    pub fn from_csv_path(path: Option<PathBuf>) -> Self {
        path.map(DataSource::Csv).unwrap_or(DataSource::Mock)
    }

    pub fn csv_path(&self) -> Option<&PathBuf> {
        match self {
            DataSource::Csv(path) => Some(path),
            DataSource::Mock => None,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Mock => f.write_str("built-in sample data"),
            DataSource::Csv(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads every entry from `source`.
///
/// A CSV that cannot be read or parsed is logged and yields an empty
/// dataset, so callers always get something to render.
pub fn load_dataset(source: &DataSource) -> Vec<ScheduleEntry> {
    match source {
        DataSource::Mock => mock_entries(),
        DataSource::Csv(path) => match load_entries(path) {
            Ok(entries) => {
                info!(path = %path.display(), entries = entries.len(), "loaded schedule");
                entries
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load schedule, showing empty grid");
                Vec::new()
            }
        },
    }
}
