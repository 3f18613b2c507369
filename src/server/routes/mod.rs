mod health;

pub fn create_router() -> axum::Router {
    axum::Router::new().route("/health", axum::routing::get(health::healthcheck))
}
