use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use complaint_api::config;
use complaint_api::handlers::{complaints, users};
use complaint_api::middleware::jwt_auth_middleware;
use complaint_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up COMPLAINT_JWT_SECRET etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Complaint API in {:?} mode", config.environment);

    let state = AppState::in_memory();

    // Baseline accounts must exist before any login can succeed
    state
        .auth
        .seed_default_users()
        .await
        .expect("seed default users");

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("COMPLAINT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Complaint API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        .merge(complaint_routes())
        .with_state(state)
        // Complaint form is served from arbitrary origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn user_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        .route("/api/users/login", post(users::login))
        .route("/api/users/register", post(users::register))
}

fn complaint_routes() -> Router<AppState> {
    use axum::middleware::from_fn;
    use axum::routing::{post, put};

    Router::new()
        .route(
            "/api/complaints",
            post(complaints::create).get(complaints::list),
        )
        .route(
            "/api/complaints/:id",
            get(complaints::get_by_id)
                .put(complaints::update_status)
                .delete(complaints::delete),
        )
        .route(
            "/api/complaints/:id/resolve",
            put(complaints::resolve).layer(from_fn(jwt_auth_middleware)),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Complaint API",
            "version": version,
            "endpoints": {
                "login": "POST /api/users/login (public)",
                "register": "POST /api/users/register (public)",
                "complaints": "/api/complaints[/:id] (public)",
                "resolve": "PUT /api/complaints/:id/resolve (ADMIN bearer token)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
