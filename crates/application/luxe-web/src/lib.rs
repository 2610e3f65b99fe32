//! # Luxe Web
//!
//! Server-rendered screens and a read-only JSON API over the Luxe Stay
//! catalog.
//!
//! ```text
//!   Router ── CookieManagerLayer ── TraceLayer ── CorsLayer
//!     │
//!     ├── handlers   HTML screens, booking wizard, mock session
//!     ├── api        /api/* JSON
//!     └── templates  format!-built pages
//! ```
//!
//! The current user travels in a cookie; booking wizard state travels in
//! hidden form fields. The only server-side mutable state is the per-process
//! trips map in [`AppState`].

pub mod api;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Result type for luxe-web operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fixtures(#[from] luxe_fixtures::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pages = Router::new()
        .route("/", get(handlers::index))
        .route("/hotels", get(handlers::hotels))
        .route("/hotels/{id}", get(handlers::hotel_detail))
        .route("/destinations", get(handlers::destinations))
        .route("/destinations/{slug}", get(handlers::destination_detail))
        .route("/deals", get(handlers::deals))
        .route("/booking", get(handlers::booking_start).post(handlers::booking_step))
        .route("/dashboard", get(handlers::dashboard))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/register", post(handlers::register_submit))
        .route("/logout", post(handlers::logout))
        .route("/static/style.css", get(handlers::style_css));

    let api = Router::new()
        .route("/api/health", get(api::health))
        .route("/api/hotels", get(api::hotels))
        .route("/api/hotels/{id}", get(api::hotel))
        .route("/api/hotels/{id}/reviews", get(api::reviews))
        .route("/api/hotels/{id}/reviews/stats", get(api::review_stats))
        .route("/api/deals", get(api::deals))
        .route("/api/destinations", get(api::destinations));

    Router::new()
        .merge(pages)
        .merge(api)
        .fallback(handlers::fallback)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!("Luxe Stay listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(Error::Serve)?;
    Ok(())
}
