pub mod types;
pub mod calendar;
pub mod pivot;
pub mod filter;
pub mod classify;

pub use types::{Booking, DayRow, PersonSchedule};
pub use calendar::{advance, days_in_month, Direction, MonthCursor};
pub use pivot::{all_people, build_person_schedule};
pub use filter::filter_people;
pub use classify::{CategoryTag, Classifier, Rule};
