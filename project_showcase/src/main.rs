//! Project Showcase
//!
//! Serves the showcase page, or runs one loader and prints the rendered
//! container.

use clap::{Parser, Subcommand};
use project_showcase::{
    seed_sample_projects, FileStorage, LoadOutcome, ProjectLoader, ProjectRepository,
    RemoteSource,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Project showcase - project cards from a local cache or a remote endpoint
#[derive(Parser, Debug)]
#[command(name = "project_showcase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the project cache
    #[arg(short, long, env = "PROJECT_SHOWCASE_DATA_DIR", default_value_t = default_data_dir())]
    data_dir: String,

    /// Remote endpoint returning the project list as JSON
    #[arg(
        short,
        long,
        env = "PROJECT_SHOWCASE_ENDPOINT",
        default_value = project_showcase::remote::DEFAULT_ENDPOINT
    )]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the showcase page
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Directory served at the page root for card images and links
        #[arg(long)]
        assets_dir: Option<PathBuf>,
    },
    /// Load projects from the local cache and print the container
    Local,
    /// Load projects from the remote endpoint and print the container
    Remote,
}

/// Returns the default data directory: ~/.local/share/project_showcase
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("project_showcase")
        .to_string_lossy()
        .to_string()
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let data_dir = PathBuf::from(&args.data_dir);

    log::info!("Starting project_showcase...");
    log::info!("Data directory: {}", data_dir.display());

    let storage = Arc::new(FileStorage::new(&data_dir));
    let repository = ProjectRepository::new(storage);

    if let Err(e) = seed_sample_projects(&repository) {
        log::error!("Failed to seed project cache: {}", e);
        std::process::exit(1);
    }

    let loader = Arc::new(ProjectLoader::new(
        repository,
        RemoteSource::new(args.endpoint),
    ));

    match args.command {
        Command::Serve { port, assets_dir } => {
            if let Err(e) =
                project_showcase::web::serve(Arc::clone(&loader), port, assets_dir.as_deref())
                    .await
            {
                log::error!("Web server error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Local => {
            let outcome = loader.load_local();
            print_container(&loader, &outcome);
        }
        Command::Remote => {
            let outcome = loader.load_remote().await;
            print_container(&loader, &outcome);
        }
    }
}

fn print_container(loader: &ProjectLoader, outcome: &LoadOutcome) {
    match loader.container_html() {
        Ok(html) => println!("{}", html),
        Err(e) => {
            log::error!("Failed to render projects: {}", e);
            std::process::exit(1);
        }
    }
    if let LoadOutcome::Failed(reason) = outcome {
        log::warn!("Load failed: {}", reason);
    }
}
