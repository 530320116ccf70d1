use crate::compose;
use crate::config::{Config, COMPOSE_ENV_FILE, COMPOSE_FILE, DOCKER_FILE_NAME, IGNORE_FOLDERS};
use crate::discover;
use crate::dockerfile;
use crate::env::{ProjectEnv, Service};
use crate::error::{DockerizeError, Result};
use crate::term;
use std::path::PathBuf;

struct ProjectRecord {
    path: PathBuf,
    service: Service,
}

/// One full run: discover projects, fold every environment into the
/// aggregate buffer, persist it, then generate the manifest and any missing
/// Dockerfiles.
///
/// The per-project loop is strictly sequential and nothing is written until
/// every project has parsed and validated. A fatal project aborts the run
/// with no outputs at all.
pub async fn run(cfg: &Config) -> Result<()> {
    let compose_path = cfg.compose_file_path();
    let compose_existed = tokio::fs::try_exists(&compose_path).await?;

    let mut project_dirs = discover::discover(&cfg.base, IGNORE_FOLDERS).await?;
    project_dirs.sort();

    term::info(&format!(
        "Detected valid project directories: \n{}",
        project_dirs
            .iter()
            .map(|d| format!("- {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    ));
    println!();

    term::info(&format!(
        "Creating docker-compose env: \n{}",
        cfg.default_envs()
            .iter()
            .map(|(k, v)| format!("- {k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join("\n")
    ));
    println!();

    let mut buffer = compose::seed_buffer(cfg);
    let mut records = Vec::new();

    for dir in &project_dirs {
        let project_path = cfg.base.join(dir);
        let env_path = project_path.join(&cfg.env_file);
        let text = tokio::fs::read_to_string(&env_path).await.map_err(|source| {
            DockerizeError::EnvFileRead {
                dir: dir.clone(),
                file: cfg.env_file.clone(),
                source,
            }
        })?;

        let mut env = ProjectEnv::parse(dir, &cfg.env_file, &text)?;
        let service = env.service()?;
        env.derive_replica_ports()?;
        buffer.push_str(&env.render_block(&service));

        records.push(ProjectRecord {
            path: project_path,
            service,
        });
    }

    tokio::fs::write(cfg.compose_env_path(), &buffer).await?;
    println!();
    term::success(&format!("Created {COMPOSE_ENV_FILE}!"));

    if compose_existed {
        println!();
        term::done(&format!(
            "Looks like {COMPOSE_FILE} already exists. Skipping creation."
        ));
    } else {
        let mut manifest = compose::manifest_header();
        for record in &records {
            manifest.push('\n');
            manifest.push_str(&compose::service_stanza(&record.service));
        }
        tokio::fs::write(&compose_path, manifest).await?;
        println!();
        term::done(&format!("{COMPOSE_FILE} was created!"));
    }

    for record in &records {
        if !dockerfile::write_dockerfile(&record.path).await? {
            println!();
            term::done(&format!(
                "Looks like {DOCKER_FILE_NAME} already exists for project {}. Skipping Dockerfile creation.",
                record.service.ident
            ));
        }
    }

    term::success("\nDONE!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(base: &Path) -> Config {
        Config {
            base: base.to_path_buf(),
            project_name: "project".to_string(),
            env_file: "docker.env".to_string(),
        }
    }

    fn add_project(base: &Path, dir: &str, env: &str) {
        let path = base.join(dir);
        fs::create_dir(&path).unwrap();
        fs::write(path.join("docker.env"), env).unwrap();
    }

    #[tokio::test]
    async fn run_writes_env_manifest_and_dockerfiles() {
        let tmp = TempDir::new().unwrap();
        add_project(tmp.path(), "alpha", "NAME=svc-a\nPORT=3000\n");
        add_project(tmp.path(), "beta", "NAME=svc-b\nPORT=4000\n");

        run(&config_for(tmp.path())).await.unwrap();

        let env = fs::read_to_string(tmp.path().join("docker-compose.env")).unwrap();
        assert!(env.starts_with("###>> DOCKER-COMPOSE CONFIGURE <<###\n"));
        assert!(env.contains("PORT_SVC_A=\"3000\"\n"));
        assert!(env.contains("PORT_SVC_B=\"4000\"\n"));

        let manifest = fs::read_to_string(tmp.path().join("docker-compose.yml")).unwrap();
        assert!(manifest.starts_with("version: '3.8'\n\nservices:\n"));
        assert!(manifest.contains("  svc_a:\n"));
        assert!(manifest.contains("  svc_b:\n"));

        assert!(tmp.path().join("alpha/Dockerfile").exists());
        assert!(tmp.path().join("beta/Dockerfile").exists());
    }

    #[tokio::test]
    async fn existing_manifest_is_untouched() {
        let tmp = TempDir::new().unwrap();
        add_project(tmp.path(), "alpha", "NAME=svc-a\nPORT=3000\n");
        let manifest_path = tmp.path().join("docker-compose.yml");
        fs::write(&manifest_path, "# hand-written\n").unwrap();

        run(&config_for(tmp.path())).await.unwrap();

        assert_eq!(
            fs::read_to_string(&manifest_path).unwrap(),
            "# hand-written\n"
        );
        assert!(tmp.path().join("docker-compose.env").exists());
    }

    #[tokio::test]
    async fn fatal_project_leaves_no_outputs() {
        let tmp = TempDir::new().unwrap();
        add_project(tmp.path(), "alpha", "NAME=svc-a\nPORT=3000\n");
        add_project(tmp.path(), "beta", "NAME=svc-b\nPORT=abc\n");

        let err = run(&config_for(tmp.path())).await.unwrap_err();
        assert!(matches!(err, DockerizeError::InvalidPort { ref dir, .. } if dir == "beta"));

        assert!(!tmp.path().join("docker-compose.env").exists());
        assert!(!tmp.path().join("docker-compose.yml").exists());
        assert!(!tmp.path().join("alpha/Dockerfile").exists());
    }

    #[tokio::test]
    async fn missing_env_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        add_project(tmp.path(), "alpha", "NAME=svc-a\nPORT=3000\n");
        fs::create_dir(tmp.path().join("empty-project")).unwrap();

        let err = run(&config_for(tmp.path())).await.unwrap_err();
        assert!(
            matches!(err, DockerizeError::EnvFileRead { ref dir, .. } if dir == "empty-project")
        );
        assert!(!tmp.path().join("docker-compose.env").exists());
    }
}
