use crate::config::DOCKER_FILE_NAME;
use crate::error::Result;
use std::path::Path;

/// Static build file. Parameterized only through the NAME/TYPE/PORT/WORKDIR
/// build args the manifest passes in; NAME, PORT and WORKDIR are mandatory
/// at build time.
const DOCKERFILE: &str = "FROM node:16-alpine

ARG NAME
ARG TYPE
ARG PORT
ARG WORKDIR

ENV \\
   NAME=${NAME:?error} \\
   TYPE=${TYPE:-main} \\
   PORT=${PORT:?${NAME}_error} \\
   WORKDIR=${WORKDIR:?${NAME}_error}

WORKDIR ${WORKDIR}

COPY . .

RUN npm install

CMD [\"npm\", \"run\", \"start\"]

EXPOSE ${PORT}
";

/// Write a Dockerfile into the project directory unless one is already
/// there. Returns whether a file was written.
pub async fn write_dockerfile(project_path: &Path) -> Result<bool> {
    let path = project_path.join(DOCKER_FILE_NAME);
    if tokio::fs::try_exists(&path).await? {
        return Ok(false);
    }
    tokio::fs::write(&path, DOCKERFILE).await?;
    Ok(true)
}
