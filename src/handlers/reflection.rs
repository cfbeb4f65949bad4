use axum::{
    extract::Form,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::{
    names,
    reflection::{ReflectionOutcome, CELEBRATE_EVENT},
    session::LessonState,
    views, AppState,
};

const HX_TRIGGER: &str = "hx-trigger";

pub fn routes() -> Router<AppState> {
    Router::new().route(names::REFLECTION_URL, post(submit_reflection))
}

#[derive(Deserialize)]
struct ReflectionBody {
    #[serde(default)]
    reflection: String,
}

/// A blank reflection is not an error: the learner gets a nudge and may try again.
async fn submit_reflection(Form(body): Form<ReflectionBody>) -> Response {
    let lesson = LessonState::default().with_reflection(&body.reflection);
    let page = views::reflection::feedback(&lesson);

    if lesson.reflection.is_some_and(ReflectionOutcome::celebrates) {
        tracing::info!(chars = body.reflection.trim().chars().count(), "reflection accepted");
        ([(HX_TRIGGER, CELEBRATE_EVENT)], page).into_response()
    } else {
        tracing::info!("blank reflection rejected");
        page.into_response()
    }
}
