use schedule_viewer::cli::{Cli, Commands};
use schedule_viewer::display::print_month_grid;
use schedule_viewer::export::export_grid_to_csv;
use schedule_viewer::schedule::MonthCursor;
use schedule_viewer::source::{load_dataset, DataSource};
use schedule_viewer::{web, ScheduleView};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse_args();
    let source = DataSource::from_csv_path(cli.csv);
    info!(%source, "schedule source");

    match cli.command {
        Some(Commands::Serve { port, static_dir, year, month }) => {
            let cursor = MonthCursor::new(year, month)?;
            println!("Access the schedule at http://localhost:{}", port);
            web::start_server(port, source, static_dir, cursor).await?;
        }
        Some(Commands::Show { year, month, search, person, output }) => {
            let cursor = MonthCursor::new(year, month)?;
            let view = ScheduleView::new(load_dataset(&source), cursor)
                .with_search(search)
                .with_selected_person(person);

            print_month_grid(&view);

            if let Some(path) = output {
                export_grid_to_csv(&view, &path)?;
                println!("Grid saved to {}", path.display());
            }
        }
        None => {
            let view = ScheduleView::new(load_dataset(&source), MonthCursor::default());
            print_month_grid(&view);
        }
    }

    Ok(())
}
