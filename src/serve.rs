use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub const DEFAULT_SITE_ROOT: &str = "dist";
pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:3000";

const SITE_ROOT_VAR: &str = "LEPTOS_SITE_ROOT";
const SITE_ADDR_VAR: &str = "LEPTOS_SITE_ADDR";

/// Where the built bundle lives and which address serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub site_root: PathBuf,
    pub site_addr: SocketAddr,
}

impl ServeConfig {
    /// Reads `LEPTOS_SITE_ROOT` and `LEPTOS_SITE_ADDR` through `lookup`, falling back to the
    /// Trunk output directory on port 3000. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServeError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_root = var(SITE_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));
        let addr = var(SITE_ADDR_VAR).unwrap_or_else(|| DEFAULT_SITE_ADDR.to_string());
        let site_addr = addr
            .trim()
            .parse()
            .map_err(|e| ServeError::Config(format!("{SITE_ADDR_VAR}={addr}: {e}")))?;

        Ok(Self {
            site_root,
            site_addr,
        })
    }

    pub fn from_env() -> Result<Self, ServeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Serves the built bundle. Unknown paths get `index.html` so the client router decides.
pub fn router(site_root: impl Into<PathBuf>) -> Router {
    let site_root = site_root.into();
    let index = site_root.join("index.html");
    let files = ServeDir::new(&site_root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(files)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn run() -> Result<(), ServeError> {
    let ServeConfig {
        site_root,
        site_addr: addr,
    } = ServeConfig::from_env()?;
    if !site_root.join("index.html").is_file() {
        tracing::warn!(site_root = %site_root.display(), "no index.html; run `trunk build` first");
    }

    let app = router(&site_root);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, site_root = %site_root.display(), "serving portfolio");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn repo_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_config_defaults_to_trunk_output() {
        let conf = ServeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(conf.site_root, PathBuf::from("dist"));
        assert_eq!(conf.site_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());

        // blank values are ignored
        let conf = ServeConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(conf.site_root, PathBuf::from("dist"));
    }

    #[test]
    fn test_config_overrides() {
        let conf = ServeConfig::from_lookup(|key| match key {
            "LEPTOS_SITE_ROOT" => Some("public".to_string()),
            "LEPTOS_SITE_ADDR" => Some("127.0.0.1:8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(conf.site_root, PathBuf::from("public"));
        assert_eq!(conf.site_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_config_rejects_bad_addr() {
        let err = ServeConfig::from_lookup(|key| {
            (key == "LEPTOS_SITE_ADDR").then(|| "localhost".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ServeError::Config(msg) if msg.contains("localhost")));
    }

    #[tokio::test]
    async fn test_serves_index() {
        let res = router(repo_root())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let res = router(repo_root())
            .oneshot(Request::get("/no/such/page").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let res = router(repo_root())
            .oneshot(
                Request::get("/content/profile.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
