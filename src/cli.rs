use clap::Parser;
use std::path::PathBuf;

/// Aggregate per-project docker.env files into a docker-compose environment.
#[derive(Debug, Parser)]
#[command(name = "dockerize", version, about)]
pub struct Cli {
    /// Directory holding the project folders
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Value for COMPOSE_PROJECT_NAME in the generated environment
    #[arg(long = "project-name")]
    pub project_name: Option<String>,

    /// Per-project environment file name
    #[arg(long = "env-file")]
    pub env_file: Option<String>,
}
