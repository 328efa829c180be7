use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{Level, debug, info, instrument, warn};

use crate::{config::FolioConfig, http::AppError};
use common::route::resolve_known;

pub const SHELL_FILE: &str = "index.html";

#[derive(Clone, Debug)]
struct ShellState {
    doc_root: PathBuf,
}

// local preview of the built site
//
// files that exist under the document root are served as-is.  every other path
// belongs to the single page app, so it gets the app shell, with the status the
// app itself would show: 200 for a known page, 404 for anything else
pub fn router(doc_root: &Path) -> Router {
    let state = ShellState {
        doc_root: doc_root.to_path_buf(),
    };

    let serve_dir = ServeDir::new(doc_root).fallback(spa_shell.with_state(state));

    Router::new()
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}

#[instrument(level = Level::DEBUG, skip(state))]
async fn spa_shell(State(state): State<ShellState>, uri: Uri) -> Result<Response, AppError> {
    let page = resolve_known(uri.path());

    // the shell is re-read on every request so a rebuild shows up without a restart
    let shell = tokio::fs::read_to_string(state.doc_root.join(SHELL_FILE))
        .await
        .context("failed to read app shell")?;

    let status = StatusCode::from_u16(page.status()).unwrap_or(StatusCode::OK);

    debug!(%page, %status, "serving app shell");

    Ok((
        status,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        shell,
    )
        .into_response())
}

pub async fn serve_http(config: Arc<FolioConfig>) -> anyhow::Result<()> {
    let socket: SocketAddr = config
        .http
        .socket
        .parse()
        .with_context(|| format!("failed to parse http socket {}", config.http.socket))?;

    let doc_root = &config.http.doc_root;

    if !doc_root.join(SHELL_FILE).is_file() {
        return Err(anyhow::Error::msg(format!(
            "{} has no {SHELL_FILE}; build the webapp first",
            doc_root.display()
        )));
    }

    let listener = TcpListener::bind(socket)
        .await
        .with_context(|| format!("failed to bind {socket}"))?;

    info!("serving {} at http://{socket}", doc_root.display());

    axum::serve(listener, router(doc_root))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("http server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down"),
        Err(err) => warn!("failed to listen for ctrl-c: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::Request;
    use tower::ServiceExt;

    use super::*;

    const SHELL: &str = "<!doctype html><div id=\"main\"></div>";

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SHELL_FILE), SHELL).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/site.css"), "body{}").unwrap();
        dir
    }

    async fn get(dir: &Path, path: &str) -> (StatusCode, String) {
        let response = router(dir)
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_existing_files_are_served() {
        let dir = site();

        assert_eq!(
            get(dir.path(), "/assets/site.css").await,
            (StatusCode::OK, "body{}".to_owned())
        );
    }

    #[tokio::test]
    async fn test_app_routes_get_the_shell() {
        let dir = site();

        for path in ["/", "/about", "/about/", "/projects?q=react", "/blog/modern-css-techniques-2024"] {
            assert_eq!(
                get(dir.path(), path).await,
                (StatusCode::OK, SHELL.to_owned()),
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_paths_get_the_shell_with_404() {
        let dir = site();

        for path in [
            "/nope",
            "/blog/does-not-exist",
            "/assets/missing.png",
            "/about//",
            "/blog//modern-css-techniques-2024",
        ] {
            assert_eq!(
                get(dir.path(), path).await,
                (StatusCode::NOT_FOUND, SHELL.to_owned()),
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn test_missing_shell_is_a_server_error() {
        let dir = tempfile::tempdir().unwrap();

        let (status, _) = get(dir.path(), "/about").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
