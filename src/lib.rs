//! Staff schedule viewer.
//!
//! Pivots flat schedule entries (date, location, director, staff) into a
//! person-by-day grid for one month, with name search, a person selector and
//! summary counts. Entries come from built-in sample data or a CSV file; the
//! grid is rendered to the terminal, exported as CSV, or served to a browser.

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod mock;
pub mod parser;
pub mod schedule;
pub mod source;
pub mod view;
pub mod web;

pub use error::{Result, ViewerError};
pub use parser::ScheduleEntry;
pub use view::ScheduleView;
