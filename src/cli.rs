use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Staff schedule viewer - per-person monthly calendar grid
#[derive(Parser, Debug)]
#[command(name = "schedule-viewer")]
#[command(about = "View a staff schedule as a person-by-day grid")]
#[command(version)]
pub struct Cli {
    /// Schedule CSV to load (built-in sample data when omitted)
    #[arg(long, global = true, env = "SCHEDULE_CSV")]
    pub csv: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the browser grid and its JSON API
    Serve {
        #[arg(short, long, default_value_t = 8080, env = "PORT")]
        port: u16,

        /// Directory exposed under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Month shown when the page opens
        #[arg(long, default_value_t = 2024)]
        year: i32,

        #[arg(long, default_value_t = 7)]
        month: u32,
    },
    /// Print one month's grid to the terminal
    Show {
        #[arg(long, default_value_t = 2024)]
        year: i32,

        #[arg(long, default_value_t = 7)]
        month: u32,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show only this person
        #[arg(short, long, default_value = "")]
        person: String,

        /// Also export the grid as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["schedule-viewer", "show"]).unwrap();
        match cli.command {
            Some(Commands::Show { year, month, search, person, output }) => {
                assert_eq!((year, month), (2024, 7));
                assert!(search.is_empty());
                assert!(person.is_empty());
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_with_csv() {
        let cli = Cli::try_parse_from([
            "schedule-viewer",
            "serve",
            "--port",
            "9000",
            "--csv",
            "data/schedule-data.csv",
        ])
        .unwrap();
        assert_eq!(cli.csv, Some(PathBuf::from("data/schedule-data.csv")));
        assert!(matches!(cli.command, Some(Commands::Serve { port: 9000, .. })));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
