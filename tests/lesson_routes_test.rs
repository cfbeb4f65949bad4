mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{body_text, get, post_form};
use tower::ServiceExt;

#[tokio::test]
async fn lesson_page_renders_defaults() {
    let resp = get("/", false).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("The Animal Kingdom Division Dash"));
    assert!(html.contains("There are 25 🍓 for 5 🐻s."));
    assert!(html.contains("Quick Understanding Check"));
    assert!(html.contains("Khan Academy: Division"));
    assert!(html.contains("unpkg.com/htmx.org"));
}

#[tokio::test]
async fn lesson_page_reads_query_fallback() {
    let html = body_text(get("/?name=Ada&avatar=rabbit&treats=17&animals=3", false).await).await;
    assert!(html.contains("There are 17 🍓 for 3 🐻s."));
    assert!(html.contains("Welcome, Ada the 🐰 Rabbit!"));
    assert!(html.contains("<svg"));
}

#[tokio::test]
async fn lesson_page_clamps_out_of_range_sliders() {
    let html = body_text(get("/?treats=400&animals=1", false).await).await;
    assert!(html.contains("There are 50 🍓 for 2 🐻s."));
}

#[tokio::test]
async fn htmx_request_gets_a_fragment() {
    let html = body_text(get("/", true).await).await;
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.starts_with("<title>"));
}

#[tokio::test]
async fn explore_recomputes_the_share() {
    let resp = post_form("/explore", "name=&avatar=bear&treats=20&animals=5").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.starts_with(r#"<div id="explorer-results">"#));
    assert!(html.contains("There are 20 🍓 for 5 🐻s."));
    assert!(html.contains("4 🍓"));
    assert!(html.contains("0 🍓"));
    assert!(!html.contains("Welcome, "));
}

#[tokio::test]
async fn explore_greets_named_learner() {
    let html = body_text(post_form("/explore", "name=Sam&avatar=fox&treats=23&animals=4").await).await;
    assert!(html.contains("Welcome, Sam the 🦊 Fox!"));
    assert!(html.contains("5 🍓"));
    assert!(html.contains("3 🍓"));
}

#[tokio::test]
async fn posts_without_htmx_header_are_refused() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/explore")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("treats=20&animals=5"))
        .expect("request build should succeed");
    let resp = common::app().oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn resource_tabs_swap_in_place() {
    let resp = get("/resources/1", true).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.starts_with(r#"<div id="resource-tabs">"#));
    assert!(html.contains("Fun Facts About Animals and Sharing"));
    assert!(!html.contains("Khan Academy: Division"));
}

#[tokio::test]
async fn resource_tab_without_htmx_renders_the_page() {
    let html = body_text(get("/resources/1", false).await).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Fun Facts About Animals and Sharing"));
}

#[tokio::test]
async fn unknown_resource_tab_is_not_found() {
    assert_eq!(get("/resources/5", true).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(get("/nowhere", false).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_files_are_served() {
    let resp = get("/static/index.css", false).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "text/css");

    let resp = get("/static/celebrate.js", false).await;
    assert_eq!(resp.headers()["content-type"], "text/javascript");

    assert_eq!(get("/static/missing.css", false).await.status(), StatusCode::NOT_FOUND);
}
