use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::{debug, error};
use maud::{html, DOCTYPE};

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no front matter block in {path:?}")]
    MissingFrontMatter { path: PathBuf },
    #[error("project {0:?} does not exist")]
    NotFound(String),
    #[error("failed to render template")]
    Template(#[from] handlebars::RenderError),
    #[error("blocking task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            // a project file that vanished is a missing project, not a server fault
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            return Error::NotFound(name);
        }
        Error::Io { path, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub(crate) fn render_error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (status.as_u16()) " " (reason) }
                link rel="stylesheet" href="/public/style.css";
            }
            body.error-page {
                h1 { (status.as_u16()) }
                p { (reason) }
                a href="/" { "Back to projects" }
            }
        }
    }
    .into_string()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{:#}", anyhow::Error::from(self));
        } else {
            debug!("{self}");
        }
        (status, Html(render_error_page(status))).into_response()
    }
}
