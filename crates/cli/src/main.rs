mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use problem_tracker_core::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "problem-tracker")]
#[command(about = "Problem report tracker with weekly spreadsheet export", long_about = None)]
struct Cli {
    /// SQLite database file (overrides PROBLEM_TRACKER_DB_PATH)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    /// Directory for uploaded images (overrides PROBLEM_TRACKER_UPLOAD_DIR)
    #[arg(long, global = true)]
    upload_dir: Option<PathBuf>,
    /// Spreadsheet output path (overrides PROBLEM_TRACKER_EXPORT_PATH)
    #[arg(long, global = true)]
    export_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server and the weekly export scheduler
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Do not start the weekly export task
        #[arg(long)]
        no_scheduler: bool,
    },
    /// Regenerate the spreadsheet once and print its path
    Export,
    /// Print all problems as JSON, newest first
    List,
    /// Print the number of stored problems
    Stats,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if let Some(path) = &self.db_path {
            config.db_path.clone_from(path);
        }
        if let Some(dir) = &self.upload_dir {
            config.upload_dir.clone_from(dir);
        }
        if let Some(path) = &self.export_path {
            config.export_path.clone_from(path);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Commands::Serve { port, host, no_scheduler } => {
            commands::serve::run(&config, &host, port, !no_scheduler).await?;
        },
        Commands::Export => commands::records::run_export(&config)?,
        Commands::List => commands::records::run_list(&config)?,
        Commands::Stats => commands::records::run_stats(&config)?,
    }

    Ok(())
}
