//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode, Uri};
use axum::response::Response;
use axum::{Json, Router};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cinematch_api::config::ServerConfig;
use cinematch_api::routes;
use cinematch_api::state::AppState;
use cinematch_catalog::CatalogClient;

/// Base URL for tests that never reach the catalog. Port 9 (discard)
/// refuses connections immediately, and the deck engine treats that as
/// an empty page.
pub const UNUSED_CATALOG: &str = "http://127.0.0.1:9";

/// First movie id served by the fake catalog; page entries count up
/// from here.
pub const FAKE_MOVIE_ID_BASE: i64 = 9001;

/// Build a test `ServerConfig` pointed at the given catalog base URL.
pub fn test_config(catalog_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        tmdb_base_url: catalog_base_url.to_string(),
        tmdb_api_key: "test-key".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and catalog base URL.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, catalog_base_url: &str) -> Router {
    let config = test_config(catalog_base_url);
    let catalog = Arc::new(CatalogClient::new(
        config.tmdb_base_url.clone(),
        config.tmdb_api_key.clone(),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        catalog,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a session through the API and return its code.
pub async fn create_session(app: Router) -> String {
    let response = post_json(app, "/api/v1/sessions", serde_json::json!({})).await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true, "session creation should succeed");
    json["session_code"]
        .as_str()
        .expect("session_code should be a string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Fake catalog server
// ---------------------------------------------------------------------------

/// Handle to an in-process stand-in for the upstream catalog API.
pub struct FakeCatalog {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
    movie_count: Arc<AtomicUsize>,
}

impl FakeCatalog {
    /// Number of page requests served so far.
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Paths requested so far, in order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    /// Change how many movies subsequent pages carry.
    pub fn set_movie_count(&self, count: usize) {
        self.movie_count.store(count, Ordering::SeqCst);
    }
}

#[derive(Clone)]
struct FakeCatalogState {
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
    movie_count: Arc<AtomicUsize>,
}

/// Start a local HTTP server imitating the upstream catalog's paged
/// movie listings. Every page serves `movie_count` movies with ids
/// counting up from [`FAKE_MOVIE_ID_BASE`].
pub async fn spawn_fake_catalog(movie_count: usize) -> FakeCatalog {
    let state = FakeCatalogState {
        hits: Arc::new(AtomicUsize::new(0)),
        paths: Arc::new(Mutex::new(Vec::new())),
        movie_count: Arc::new(AtomicUsize::new(movie_count)),
    };

    let app = Router::new()
        .route("/movie/{category}", axum::routing::get(serve_page))
        .route("/trending/movie/{window}", axum::routing::get(serve_page))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCatalog {
        base_url: format!("http://{addr}"),
        hits: state.hits,
        paths: state.paths,
        movie_count: state.movie_count,
    }
}

async fn serve_page(State(state): State<FakeCatalogState>, uri: Uri) -> Json<serde_json::Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.paths.lock().unwrap().push(uri.path().to_string());

    let count = state.movie_count.load(Ordering::SeqCst) as i64;
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": FAKE_MOVIE_ID_BASE + i,
                "title": format!("Movie {}", i + 1),
                "poster_path": format!("/poster-{}.jpg", i + 1),
                "release_date": "2021-06-15",
                "vote_average": 7.5,
                "overview": format!("Overview {}", i + 1),
                "genre_ids": [28, 12],
                "popularity": 100.0
            })
        })
        .collect();

    Json(serde_json::json!({
        "page": 1,
        "results": results,
        "total_pages": 500,
        "total_results": 10_000
    }))
}
