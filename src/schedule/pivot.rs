use crate::parser::ScheduleEntry;
use super::types::{Booking, PersonSchedule};

/// Pivots flat entries into a person -> day -> booking lookup.
///
/// Every participant gets a row pre-filled for each label in `days`. The
/// entry's booking is then written at `entry.date` even when that date is not
/// in `days`; such cells are never rendered. A later write to the same
/// person and date replaces the earlier one, and an empty location clears
/// the cell.
pub fn build_person_schedule(entries: &[ScheduleEntry], days: &[String]) -> PersonSchedule {
    let mut schedule = PersonSchedule::new();

    for entry in entries {
        let booking = (!entry.location.is_empty()).then(|| entry.booking());

        for person in entry.participants() {
            let row = schedule.row_mut(person, days);
            row.insert(entry.date.clone(), booking.clone());
        }
    }

    schedule
}

/// Every distinct participant in order of first appearance
pub fn all_people(schedule: &PersonSchedule) -> Vec<String> {
    schedule.people().map(str::to_string).collect()
}

/// Bookings of `person` within `days`, in day order
pub fn bookings_for<'a>(
    schedule: &'a PersonSchedule,
    person: &str,
    days: &'a [String],
) -> Vec<(&'a str, &'a Booking)> {
    days.iter()
        .filter_map(|day| schedule.cell(person, day).map(|b| (day.as_str(), b)))
        .collect()
}
