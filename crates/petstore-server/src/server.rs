// Rust guideline compliant 2026-10-17

//! HTTP server runtime for Petstore.

use crate::handlers;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use petstore_app::{AppError, PetService};
use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Runtime options for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Optional root holding the `.petstore` directory.
    pub root: Option<PathBuf>,
    /// Bind address overriding the configured `listen_addr`.
    pub listen_addr: Option<String>,
    /// Logging level.
    pub log_level: String,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
    /// Whether to allow cross-origin requests.
    pub cors: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            root: None,
            listen_addr: None,
            log_level: "info".to_string(),
            log_file: None,
            cors: true,
        }
    }
}

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO errors during runtime setup.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Invalid bind address provided.
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
    /// Store or configuration errors.
    #[error(transparent)]
    App(#[from] AppError),
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pet operations over the opened store.
    pub service: Arc<PetService>,
    /// Whether permissive CORS headers are added.
    pub cors: bool,
}

impl AppState {
    /// Wraps a service with CORS enabled.
    #[must_use]
    pub fn new(service: PetService) -> Self {
        Self {
            service: Arc::new(service),
            cors: true,
        }
    }
}

/// Builds the Petstore router.
///
/// Images are served from the configured image directory when the
/// configured link is a local path such as `/images/`.
pub fn router(state: AppState) -> Router {
    let config = state.service.config();
    let body_limit = config.max_upload_bytes;
    let images_mount = local_mount(&config.images_link);
    let images_dir = state.service.images_dir().to_path_buf();
    let cors = state.cors;

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/pet", post(handlers::add_pet).put(handlers::update_pet))
        .route("/pet/findByStatus", get(handlers::find_by_status))
        .route(
            "/pet/:id",
            get(handlers::get_pet)
                .post(handlers::update_pet_with_form)
                .delete(handlers::delete_pet),
        )
        .route("/pet/:id/uploadImage", post(handlers::upload_image))
        .with_state(Arc::new(state));

    if let Some(mount) = images_mount {
        app = app.nest_service(&mount, ServeDir::new(images_dir));
    }

    let app = app
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http());

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Returns the route prefix for a local images link, or `None` for remote links.
fn local_mount(link: &str) -> Option<String> {
    if !link.starts_with('/') {
        return None;
    }
    let mount = link.trim_end_matches('/');
    if mount.is_empty() {
        None
    } else {
        Some(mount.to_string())
    }
}

/// Runs the HTTP server until interrupted.
///
/// # Arguments
///
/// * `options` - Server runtime options
///
/// # Returns
///
/// Ok if the server shuts down gracefully.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, the address cannot be
/// bound, or the runtime fails.
pub fn run(options: ServerOptions) -> Result<(), ServerError> {
    let _guard = init_tracing(&options)?;

    let service = PetService::open(options.root.as_deref())?;
    let addr = resolve_addr(&options, &service)?;
    let state = AppState {
        service: Arc::new(service),
        cors: options.cors,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(addr = %addr, "Petstore listening");
        axum::serve(listener, router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Petstore stopped");
        Ok(())
    })
}

fn resolve_addr(options: &ServerOptions, service: &PetService) -> Result<SocketAddr, ServerError> {
    match &options.listen_addr {
        Some(raw) => raw
            .parse()
            .map_err(|_| ServerError::InvalidAddress(raw.clone())),
        None => service
            .config()
            .socket_addr()
            .map_err(|e| ServerError::App(AppError::Core(e))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

fn init_tracing(options: &ServerOptions) -> Result<Option<WorkerGuard>, ServerError> {
    let level = parse_log_level(&options.log_level)?;

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level, ServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ServerError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use petstore_app::StoreContext;
    use petstore_core::Config;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "petstore-boundary";

    fn app_for(temp: &TempDir) -> Router {
        let context = StoreContext::init(temp.path()).expect("Failed to init store");
        let service = PetService::from_context(context).expect("Failed to open service");
        router(AppState::new(service))
    }

    fn app_with_limit(temp: &TempDir, max_upload_bytes: usize) -> Router {
        let context = StoreContext::init(temp.path()).expect("Failed to init store");
        let config = Config {
            max_upload_bytes,
            ..Config::default()
        };
        let service = PetService::with_config(context, config).expect("Failed to open service");
        router(AppState::new(service))
    }

    fn pet_body(id: i64, name: &str, status: &str) -> Value {
        json!({
            "id": id,
            "category": {"id": 1, "name": "Dogs"},
            "name": name,
            "photoUrls": [],
            "tags": [{"id": 1, "name": "friendly"}],
            "status": status
        })
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn multipart_request(uri: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"additionalMetadata\"\r\n\r\nfront view\r\n",
        );
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request")
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);

        let (status, created) =
            send(&app, json_request(Method::POST, "/pet", &pet_body(1, "Rex", "available"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], "Rex");

        let (status, fetched) = send(&app, empty_request(Method::GET, "/pet/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);

        let (status, body) = send(&app, empty_request(Method::GET, "/pet/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");

        let (status, body) = send(&app, empty_request(Method::GET, "/pet/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_id");

        let (status, _) =
            send(&app, json_request(Method::POST, "/pet", &pet_body(2, "Tom", "lost"))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let mut missing = pet_body(3, "Tom", "available");
        missing.as_object_mut().unwrap().remove("photoUrls");
        let (status, body) = send(&app, json_request(Method::POST, "/pet", &missing)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "missing_field");

        let request = Request::builder()
            .method(Method::POST)
            .uri("/pet")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_update_requires_existing_pet() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);

        let (status, _) =
            send(&app, json_request(Method::PUT, "/pet", &pet_body(5, "Rex", "sold"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app, json_request(Method::POST, "/pet", &pet_body(5, "Rex", "available"))).await;
        let (status, body) =
            send(&app, json_request(Method::PUT, "/pet", &pet_body(5, "Rex", "sold"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sold");
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        send(&app, json_request(Method::POST, "/pet", &pet_body(1, "A", "available"))).await;
        send(&app, json_request(Method::POST, "/pet", &pet_body(2, "B", "sold"))).await;
        send(&app, json_request(Method::POST, "/pet", &pet_body(3, "C", "pending"))).await;

        let (status, body) =
            send(&app, empty_request(Method::GET, "/pet/findByStatus?status=sold&status=available")).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|pet| pet["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 1]);

        let (status, body) = send(&app, empty_request(Method::GET, "/pet/findByStatus")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) =
            send(&app, empty_request(Method::GET, "/pet/findByStatus?status=lost")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_status_value");
    }

    #[tokio::test]
    async fn test_update_with_form() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        send(&app, json_request(Method::POST, "/pet", &pet_body(4, "Rex", "available"))).await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/pet/4")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Max&status=pending"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Max");
        assert_eq!(body["status"], "pending");

        let (status, _) = send(&app, empty_request(Method::POST, "/pet/4")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_delete_checks_api_key() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        send(&app, json_request(Method::POST, "/pet", &pet_body(8, "Rex", "available"))).await;

        let (status, body) = send(&app, empty_request(Method::DELETE, "/pet/8")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_api_key");

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/pet/8")
            .header("api_key", "special-key")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "Pet deleted");

        let (status, _) = send(&app, empty_request(Method::GET, "/pet/8")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_image_and_serve_it() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        send(&app, json_request(Method::POST, "/pet", &pet_body(6, "Rex", "available"))).await;

        let request = multipart_request("/pet/6/uploadImage", "rex.png", "image/png", b"PNGDATA");
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "file was uploaded to rex.png");

        let (_, pet) = send(&app, empty_request(Method::GET, "/pet/6")).await;
        assert_eq!(pet["photoUrls"], json!(["/images/rex.png"]));

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/images/rex.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"PNGDATA");
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_input() {
        let temp = TempDir::new().unwrap();
        let app = app_for(&temp);
        send(&app, json_request(Method::POST, "/pet", &pet_body(6, "Rex", "available"))).await;

        let (status, body) = send(&app, empty_request(Method::POST, "/pet/6/uploadImage")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "missing_file");

        let request = multipart_request("/pet/6/uploadImage", "notes.txt", "text/plain", b"hi");
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "unsupported_image");

        let request = multipart_request("/pet/77/uploadImage", "rex.png", "image/png", b"x");
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_bodies_get_error_envelope() {
        let temp = TempDir::new().unwrap();
        let app = app_with_limit(&temp, 64);

        let mut big = pet_body(1, "Rex", "available");
        big["name"] = json!("x".repeat(200));
        let (status, body) = send(&app, json_request(Method::POST, "/pet", &big)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "payload_too_large");
        assert_eq!(body["details"]["limit"], 64);

        let (status, body) = send(&app, json_request(Method::PUT, "/pet", &big)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "payload_too_large");

        let request = multipart_request("/pet/1/uploadImage", "rex.png", "image/png", &[7u8; 500]);
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], "payload_too_large");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert!(matches!(
            parse_log_level("loud"),
            Err(ServerError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_local_mount() {
        assert_eq!(local_mount("/images/").as_deref(), Some("/images"));
        assert_eq!(local_mount("/"), None);
        assert_eq!(local_mount("https://cdn.example.com/pets/"), None);
    }
}
