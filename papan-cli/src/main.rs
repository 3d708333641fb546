//! papan CLI - inspiration boards server
//!
//! - `serve`: run the HTTP server (board pages, item uploads)
//! - `init-db`: create the database schema without serving

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "papan",
    author,
    version,
    about = "Public inspiration boards with text and image items"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema if missing (safe to repeat)
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::InitDb(args) => commands::init_db::run_init_db(args).await,
    }
}
