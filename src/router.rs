use crate::handlers::{
    executive::get_executive, forecast::get_forecast, graph::get_graph, health::get_health,
    impact::get_impact, status::status_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/status", get(status_check))
        // Analytics snapshots, paths as the dashboard expects them
        .route("/api/forecast/", get(get_forecast))
        .route("/api/health/", get(get_health))
        .route("/api/executive/", get(get_executive))
        .route("/api/impact/", get(get_impact))
        .route("/api/graph/", get(get_graph))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
