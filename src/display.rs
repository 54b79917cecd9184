use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::schedule::pivot::bookings_for;
use crate::schedule::Booking;
use crate::view::ScheduleView;

const EMPTY_MARK: char = '·';

/// Formats a booking as shown in a grid chip
pub fn format_booking(booking: &Booking) -> String {
    if booking.category.is_empty() {
        format!("📍 {}", booking.location)
    } else {
        format!("📍 {} ({})", booking.location, booking.category)
    }
}

fn day_number(label: &str) -> &str {
    label.split_once('/').map(|(_, d)| d).unwrap_or(label)
}

/// Writes the month as text: a one-character-per-day matrix, each visible
/// person's bookings, and the summary counts.
pub fn write_grid<W: fmt::Write>(out: &mut W, view: &ScheduleView) -> fmt::Result {
    let rows = view.rows();

    writeln!(out, "** {} **", view.cursor())?;

    let header: String = view.days().iter().map(|d| format!("{:>3}", day_number(d))).collect();
    writeln!(out, "{}  スタッフ名", header)?;

    for row in &rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| format!("{:>3}", cell.tag.map(|t| t.marker()).unwrap_or(EMPTY_MARK)))
            .collect();
        writeln!(out, "{}  {}", cells, row.person)?;
    }

    if rows.is_empty() {
        writeln!(out, "(表示するスタッフがいません)")?;
    }

    for person in view.visible_people() {
        let bookings = bookings_for(view.schedule(), &person, view.days());
        writeln!(out, "\n{} ({} days)", person, bookings.len())?;
        for (day, booking) in bookings {
            let tag = view.classifier().classify_booking(booking);
            writeln!(out, "  {:>5}  {} [{}]", day, format_booking(booking), tag)?;
        }
    }

    let summary = view.summary();
    writeln!(
        out,
        "\nスタッフ数: {}  予定数: {} (今月: {})",
        summary.visible_people, summary.total_entries, summary.month_entries
    )?;
    writeln!(out, "P=プロジェクト E=イベント W=ワークショップ S=セミナー *=その他")
}

/// `Display` adapter over `write_grid`
pub struct GridText<'a>(pub &'a ScheduleView);

impl fmt::Display for GridText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0)
    }
}

pub fn render_grid(view: &ScheduleView) -> String {
    GridText(view).to_string()
}

/// Prints the month grid to stdout
pub fn print_month_grid(view: &ScheduleView) {
    print!("{}", GridText(view));
}

/// Writes the rendered month grid to a text file
pub fn write_grid_to_file<P: AsRef<Path>>(view: &ScheduleView, filename: P) -> Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(render_grid(view).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_entries;
    use crate::schedule::MonthCursor;

    #[test]
    fn test_render_grid_contents() {
        let view = ScheduleView::new(mock_entries(), MonthCursor::default()).with_search("花子");
        let text = render_grid(&view);

        assert!(text.starts_with("** 2024年 7月 **\n"));
        assert!(text.contains("佐藤花子"));
        assert!(!text.contains("田中太郎"));
        assert!(text.contains("7/1  📍 プロジェクトA [project]"));
        assert!(text.contains("スタッフ数: 1  予定数: 14 (今月: 14)"));
    }

    #[test]
    fn test_matrix_markers() {
        let view = ScheduleView::new(mock_entries(), MonthCursor::default())
            .with_selected_person("高橋美智子");
        let text = render_grid(&view);
        let row = text.lines().find(|l| l.ends_with("高橋美智子")).unwrap();
        // 7/1 free, 7/2 free, 7/3 workshop
        assert!(row.starts_with(&format!("{:>3}{:>3}{:>3}", '·', '·', 'W')));
    }

    #[test]
    fn test_empty_view_message() {
        let view = ScheduleView::new(mock_entries(), MonthCursor::default()).with_search("zzz");
        assert!(render_grid(&view).contains("(表示するスタッフがいません)"));
    }

    #[test]
    fn test_write_grid_into_any_writer() {
        let view =
            ScheduleView::new(mock_entries(), MonthCursor::default()).with_selected_person("山田次郎");
        let mut out = String::new();
        write_grid(&mut out, &view).unwrap();
        assert_eq!(out, render_grid(&view));
        assert_eq!(out, format!("{}", GridText(&view)));
        assert!(out.ends_with("S=セミナー *=その他\n"));
    }

    #[test]
    fn test_format_booking() {
        assert_eq!(format_booking(&Booking::new("夏祭り", "")), "📍 夏祭り");
        assert_eq!(format_booking(&Booking::new("夏祭り", "イベント")), "📍 夏祭り (イベント)");
    }
}
