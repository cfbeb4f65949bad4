pub mod division;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod quiz;
pub mod reflection;
pub mod rejections;
pub mod resources;
pub mod session;
pub mod share;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

#[derive(Clone)]
pub struct AppState {
    pub htmx_src: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            htmx_src: names::DEFAULT_HTMX_SRC.to_string(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::lesson::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::reflection::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .fallback(|| async { rejections::AppError::NotFound })
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) && !extractors::is_htmx(req.headers()) {
        tracing::warn!("refused {} {} without HX-Request", req.method(), req.uri());
        return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
    }

    next.run(req).await
}
