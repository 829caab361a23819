mod app;
mod commands;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "studyloop",
    about = "A spaced repetition tool for optimal learning and memory retention",
    version
)]
struct Cli {
    /// Schedules directory
    #[arg(long, global = true, default_value = "./schedules")]
    dir: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new schedule from a recurring class timetable
    Create {
        /// Schedule name
        name: String,
    },

    /// Study a schedule's due lessons
    Study {
        /// Schedule name
        name: String,
    },

    /// Move a lesson to another date across the whole snapshot history
    Edit {
        /// Schedule name
        name: String,
        /// Case-insensitive substring of the lesson topic
        query: String,
    },

    /// List all schedules with a 7-day review-load forecast
    List,

    /// Show per-lesson level progression reconstructed from snapshots
    Progress {
        /// Schedule name
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.dir.clone());

    match cli.command {
        Command::Create { name } => commands::create::run(&app, &name)?,
        Command::Study { name } => commands::study::run(&app, &name)?,
        Command::Edit { name, query } => commands::edit::run(&app, &name, &query)?,
        Command::List => commands::list::run(&app, &cli.format)?,
        Command::Progress { name } => commands::progress::run(&app, &name)?,
    }

    Ok(())
}
