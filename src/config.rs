use crate::cli::Cli;
use std::path::PathBuf;

/// Compose file format version written into a generated manifest.
pub const COMPOSE_VERSION: &str = "3.8";

/// Aggregate environment file written at the base directory.
pub const COMPOSE_ENV_FILE: &str = "docker-compose.env";

/// Manifest path relative to the base directory.
pub const COMPOSE_FILE: &str = "./docker-compose.yml";

pub const DOCKER_FILE_NAME: &str = "Dockerfile";

pub const DEFAULT_ENV_FILE: &str = "docker.env";

pub const DEFAULT_PROJECT_NAME: &str = "project";

/// Directory names never treated as projects.
pub const IGNORE_FOLDERS: &[&str] = &["node_modules", "nginx"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the project folders.
    pub base: PathBuf,
    /// COMPOSE_PROJECT_NAME for the generated environment.
    pub project_name: String,
    /// Per-project environment file name.
    pub env_file: String,
}

pub fn get_config(cli: Cli) -> Config {
    let project_name = cli
        .project_name
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    let env_file = cli
        .env_file
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());

    Config {
        base: cli.dir,
        project_name,
        env_file,
    }
}

impl Config {
    /// Fixed block written once at the top of the aggregate environment.
    pub fn default_envs(&self) -> Vec<(String, String)> {
        vec![
            ("COMPOSE_PROJECT_NAME".to_string(), self.project_name.clone()),
            ("COMPOSE_FILE".to_string(), COMPOSE_FILE.to_string()),
            ("DOCKER_FILE_NAME".to_string(), DOCKER_FILE_NAME.to_string()),
        ]
    }

    pub fn compose_file_path(&self) -> PathBuf {
        self.base.join(COMPOSE_FILE)
    }

    pub fn compose_env_path(&self) -> PathBuf {
        self.base.join(COMPOSE_ENV_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_when_flags_absent() {
        let cfg = get_config(Cli::parse_from(["dockerize"]));
        assert_eq!(cfg.project_name, "project");
        assert_eq!(cfg.env_file, "docker.env");
        assert_eq!(cfg.base, PathBuf::from("."));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = get_config(Cli::parse_from([
            "dockerize",
            "/srv/stack",
            "--project-name",
            "kevsong",
            "--env-file",
            "service.env",
        ]));
        assert_eq!(cfg.base, PathBuf::from("/srv/stack"));
        assert_eq!(cfg.project_name, "kevsong");
        assert_eq!(cfg.env_file, "service.env");
    }

    #[test]
    fn default_envs_order_is_fixed() {
        let cfg = get_config(Cli::parse_from(["dockerize"]));
        let keys: Vec<_> = cfg.default_envs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["COMPOSE_PROJECT_NAME", "COMPOSE_FILE", "DOCKER_FILE_NAME"]
        );
    }
}
