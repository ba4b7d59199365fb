use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::hotspot_routes;
use crate::index;
use crate::spot_routes;

// No state is shared between requests: every endpoint generates its payload
// from scratch, so the router is built without any AppState.
pub fn create_app() -> Router {
    let mut app = Router::new()
        .route("/", get(index::get_index))
        .nest("/api/hotspots", hotspot_routes::routes())
        .nest("/api/spot", spot_routes::routes())
        .layer(TraceLayer::new_for_http());

    let assets_path = "assets";
    log::debug!("serving assets from {}", assets_path);
    let assets_service = ServeDir::new(assets_path);
    app = app.fallback_service(assets_service);
    app
}
