use crate::error::{DockerizeError, Result};
use indexmap::IndexMap;

/// Naming pair derived from a project's NAME: the compose service name
/// (original case, hyphens rewritten) and the namespacing identity
/// (upper-cased form of the same).
#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,
    pub ident: String,
}

/// One project's environment, parsed from its docker.env file.
///
/// Keys keep file order; replica port keys are appended at the end.
#[derive(Debug)]
pub struct ProjectEnv {
    dir: String,
    vars: IndexMap<String, String>,
}

impl ProjectEnv {
    /// Parse dotenv text (`KEY=VALUE` lines, `#` comments, quoted values)
    /// for the project directory `dir`. Later duplicates win.
    pub fn parse(dir: &str, file: &str, text: &str) -> Result<Self> {
        let mut vars = IndexMap::new();
        for item in dotenvy::from_read_iter(text.as_bytes()) {
            let (key, value) = item.map_err(|source| DockerizeError::EnvParse {
                dir: dir.to_string(),
                file: file.to_string(),
                source,
            })?;
            vars.insert(key, value);
        }
        Ok(ProjectEnv {
            dir: dir.to_string(),
            vars,
        })
    }

    /// Derive the service naming pair from NAME (hyphens rewritten to
    /// underscores). Absent or empty NAME is fatal.
    pub fn service(&self) -> Result<Service> {
        let name = self
            .vars
            .get("NAME")
            .map(|raw| raw.replace('-', "_"))
            .unwrap_or_default();
        if name.is_empty() {
            return Err(DockerizeError::MissingName {
                dir: self.dir.clone(),
            });
        }
        let ident = name.to_uppercase();
        Ok(Service { name, ident })
    }

    /// Validate PORT and REPLICAS, then append one `PORT_<i>` key per extra
    /// replica, numbered from the base port: replica i gets `PORT + i`.
    /// The base `PORT` entry is left untouched.
    pub fn derive_replica_ports(&mut self) -> Result<()> {
        let port_raw = self
            .vars
            .get("PORT")
            .ok_or_else(|| DockerizeError::InvalidPort {
                dir: self.dir.clone(),
                value: "<missing>".to_string(),
            })?;
        let port: i64 = port_raw
            .parse()
            .map_err(|_| DockerizeError::InvalidPort {
                dir: self.dir.clone(),
                value: port_raw.clone(),
            })?;

        let replicas: i64 = match self.vars.get("REPLICAS") {
            Some(raw) => raw.parse().map_err(|_| DockerizeError::InvalidReplicas {
                dir: self.dir.clone(),
                value: raw.clone(),
            })?,
            None => 1,
        };

        for i in 1..replicas {
            self.vars.insert(format!("PORT_{i}"), (port + i).to_string());
        }
        Ok(())
    }

    /// Render this project's namespaced block for the aggregate buffer:
    /// a section header, then `KEY_<IDENT>="value"` per key in map order,
    /// then a blank separator line. Values go inside the quotes verbatim;
    /// embedded quotes are not escaped.
    pub fn render_block(&self, service: &Service) -> String {
        let mut block = format!("### FOR PROJECT: {} ###\n", self.dir);
        for (key, value) in &self.vars {
            block.push_str(&format!(
                "{}_{}=\"{}\"\n",
                key.to_uppercase(),
                service.ident,
                value
            ));
        }
        block.push('\n');
        block
    }
}
