//! Static asset server for the Trunk build output.

use crate::log::{log_event, set_max_level, LogLevel};
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, time::Instant};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, 65_535);

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| (PORT_BOUNDS.0..=PORT_BOUNDS.1).contains(value))
            .unwrap_or(DEFAULT_PORT);
        let static_dir = parse_non_empty(lookup("STATIC_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = LogLevel::parse_or(lookup("LOG_LEVEL").as_deref(), DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

fn parse_non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Serves `static_dir`, falling back to its `index.html` for unknown paths.
pub fn router(static_dir: &std::path::Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(log_requests))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if path.ends_with(".wasm") {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        );
    }

    log_event(
        LogLevel::Debug,
        "request_served",
        json!({
            "method": method.as_str(),
            "path": path,
            "status": response.status().as_u16(),
            "elapsedMs": started.elapsed().as_millis() as u64,
        }),
    );
    response
}

pub async fn serve(listener: TcpListener, static_dir: PathBuf) -> Result<(), BoxError> {
    let app = router(&static_dir);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn run() -> Result<(), BoxError> {
    let config = ServerConfig::from_env();
    set_max_level(config.log_level);

    if !config.static_dir.is_dir() {
        log_event(
            LogLevel::Info,
            "static_dir_missing",
            json!({ "staticDir": config.static_dir.display().to_string() }),
        );
    }

    let bind_address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(bind_address).await?;
    log_event(
        LogLevel::Info,
        "server_started",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "staticDir": config.static_dir.display().to_string(),
        }),
    );

    serve(listener, config.static_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("alden-portfolio-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    async fn spawn_server(static_dir: PathBuf) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let address = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = serve(listener, static_dir).await;
        });
        address
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("STATIC_DIR", "   "),
            ("LOG_LEVEL", "chatty"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.log_level, LogLevel::Info);

        let overflow = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")]));
        assert_eq!(overflow.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_values_are_used() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("STATIC_DIR", "public"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[tokio::test]
    async fn serves_assets_and_falls_back_to_index() {
        let dir = scratch_dir("assets");
        std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.join("main.css"), "body {}").expect("write css");

        let address = spawn_server(dir.clone()).await;
        let client = reqwest::Client::new();

        let css = client
            .get(format!("http://{address}/main.css"))
            .send()
            .await
            .expect("css response");
        assert!(css.status().is_success());
        assert_eq!(css.text().await.expect("css body"), "body {}");

        let deep_link = client
            .get(format!("http://{address}/projects"))
            .send()
            .await
            .expect("fallback response");
        assert!(deep_link
            .text()
            .await
            .expect("fallback body")
            .contains("id=\"app\""));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn wasm_bundles_get_cache_header() {
        let dir = scratch_dir("wasm");
        std::fs::write(dir.join("index.html"), "<html></html>").expect("write index");
        std::fs::write(dir.join("site_bg.wasm"), [0u8, 97, 115, 109]).expect("write wasm");

        let address = spawn_server(dir.clone()).await;
        let response = reqwest::get(format!("http://{address}/site_bg.wasm"))
            .await
            .expect("wasm response");

        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=3600")
        );

        let _ = std::fs::remove_dir_all(dir);
    }
}
