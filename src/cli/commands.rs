use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::generator::{scan_routes, write_routes_module};
use crate::hot_reload::watch_routes;

/// Command-line interface for chainroute
///
/// Provides route-manifest generation and inspection for projects laying
/// their routes out as a directory tree.
#[derive(Parser)]
#[command(name = "chainroute-gen")]
#[command(about = "chainroute route-manifest generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the route manifest from a routes directory
    Generate {
        /// Directory containing route modules
        #[arg(short, long, default_value = "routes")]
        routes_dir: PathBuf,

        /// File the manifest module is written to
        #[arg(short, long, default_value = "src/generated_routes.rs")]
        output: PathBuf,

        /// Watch the routes directory and regenerate on change
        #[arg(long, default_value_t = false)]
        watch: bool,
    },
    /// List the routes discovered in a routes directory
    Routes {
        /// Directory containing route modules
        #[arg(short, long, default_value = "routes")]
        routes_dir: PathBuf,
    },
}

/// Parse arguments and run the selected command.
pub fn run_cli() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            routes_dir,
            output,
            watch,
        } => {
            let count = write_routes_module(&routes_dir, &output)?;
            println!("wrote {count} route(s) to {}", output.display());
            if watch {
                let _watcher = watch_routes(&routes_dir, output)?;
                info!(dir = %routes_dir.display(), "watching for changes, press Ctrl-C to stop");
                loop {
                    std::thread::park();
                }
            }
            Ok(())
        }
        Commands::Routes { routes_dir } => {
            for route in scan_routes(&routes_dir)? {
                let methods = if route.methods.is_empty() {
                    "-".to_string()
                } else {
                    route.methods.join(",")
                };
                println!("{methods} {} -> {}", route.pattern, route.source);
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
