use crate::config::{Config, COMPOSE_VERSION};
use crate::env::Service;

/// Seed the aggregate buffer: banner comment, the global defaults
/// (`KEY="value"`, key upper-cased), then two blank lines before the first
/// project block.
pub fn seed_buffer(cfg: &Config) -> String {
    let mut buffer = String::from("###>> DOCKER-COMPOSE CONFIGURE <<###\n");
    for (key, value) in cfg.default_envs() {
        buffer.push_str(&format!("{}=\"{}\"\n", key.to_uppercase(), value));
    }
    buffer.push_str("\n\n");
    buffer
}

pub fn manifest_header() -> String {
    format!("version: '{COMPOSE_VERSION}'\n\nservices:\n")
}

/// One service stanza, indented to sit under `services:`. Every value is a
/// `${...}` reference into the aggregate environment rather than a literal.
pub fn service_stanza(service: &Service) -> String {
    let name = &service.name;
    let id = &service.ident;
    format!(
        "  {name}:
    image: ${{NAME_{id}}}:latest
    build:
      context: ./${{BUILD_CONTEXT_{id}}}
      dockerfile: Dockerfile
      args:
        - NAME=${{NAME_{id}}}
        - TYPE=${{TYPE_{id}}}
        - PORT=${{PORT_{id}}}
        - WORKDIR=${{WORKDIR_{id}}}
    deploy:
      replicas: 1
      restart_policy:
        condition: on-failure
        delay: 60s
        max_attempts: 10
        window: 60s
    ports:
      - ${{PORT_{id}}}:${{PORT_{id}}}
"
    )
}
