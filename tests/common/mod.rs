#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use division_dash::{router, AppState};
use tower::ServiceExt;

pub fn app() -> axum::Router {
    router(AppState::default())
}

pub async fn get(uri: &str, htmx: bool) -> Response {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if htmx {
        req = req.header("HX-Request", "true");
    }
    app()
        .oneshot(req.body(Body::empty()).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

/// Posts a urlencoded form the way htmx does.
pub async fn post_form(uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("HX-Request", "true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("request build should succeed");
    app().oneshot(req).await.expect("router should respond")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
