mod commands;
mod routes;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use desk_router::RouterConfig;

#[derive(Parser)]
#[command(name = "deskroute")]
#[command(version, about = "Inspect the helpdesk navigation tree", long_about = None)]
struct Cli {
    /// Path to desk-router.toml (defaults to ./desk-router.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    /// Log resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths and print the matched chain, params and breadcrumbs
    Resolve {
        /// Paths to resolve (e.g. /frappedesk/tickets/42)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the declared route tree
    Routes,

    /// Generate the path of a named route
    Url {
        /// Route name (e.g. DeskTicket)
        name: String,

        /// Parameters as key=value (e.g. ticketId=42)
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = match &cli.config {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::load_default()?,
    };
    let tree = routes::helpdesk()?;

    match cli.command {
        Commands::Resolve { paths } => {
            commands::resolve::execute(&tree, &config.routing, &paths, cli.json)?;
        }
        Commands::Routes => {
            commands::routes::execute(&tree, cli.json)?;
        }
        Commands::Url { name, params } => {
            commands::url::execute(&tree, &config.routing, &name, &params, cli.json)?;
        }
    }

    Ok(())
}
