use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions. None of these are retried: the first one aborts the
/// whole run and no aggregate file is written.
#[derive(Error, Debug)]
pub enum DockerizeError {
    #[error("cannot read projects directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {file} for project \"{dir}\": {source}")]
    EnvFileRead {
        dir: String,
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {file} for project \"{dir}\": {source}")]
    EnvParse {
        dir: String,
        file: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("no project name in \"{dir}\"")]
    MissingName { dir: String },

    #[error("invalid \"PORT\" value in \"{dir}\": {value}")]
    InvalidPort { dir: String, value: String },

    #[error("the \"REPLICAS\" value in \"{dir}\" is not a number: {value}")]
    InvalidReplicas { dir: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DockerizeError>;
