use csv::WriterBuilder;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::view::ScheduleView;

/// Writes the visible grid as CSV: a `スタッフ名` column followed by one
/// column per day; unscheduled cells are left empty.
pub fn write_grid_csv<W: io::Write>(view: &ScheduleView, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    let mut header = vec!["スタッフ名".to_string()];
    header.extend(view.days().iter().cloned());
    wtr.write_record(&header)?;

    for row in view.rows() {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.person);
        record.extend(
            row.cells
                .into_iter()
                .map(|cell| cell.booking.map(|b| b.location).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the visible grid to a CSV file, replacing any existing file
pub fn export_grid_to_csv(view: &ScheduleView, csv_path: &Path) -> Result<()> {
    let file = std::fs::File::create(csv_path)?;
    write_grid_csv(view, file)
}
