use axum::{
    extract::{Form, Path},
    routing::post,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{quiz, rejections::AppError, session::LessonState, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quiz/{question_idx}/check", post(check_answer))
}

#[derive(Deserialize)]
struct CheckAnswerBody {
    #[serde(default)]
    option: Option<String>,
}

async fn check_answer(
    Path(question_idx): Path<usize>,
    Form(body): Form<CheckAnswerBody>,
) -> Result<Markup, AppError> {
    let question = quiz::question(question_idx)?;

    let mut lesson = LessonState::default();
    if let Some(option) = body.option {
        lesson = lesson.with_selection(question_idx, option)?;
    }
    let lesson = lesson.with_check(question_idx)?;
    let attempt = lesson.attempt(question_idx)?;

    match attempt.verdict() {
        Some(correct) => tracing::info!(
            question = question_idx + 1,
            option = attempt.selected(),
            correct,
            "quiz answer checked"
        ),
        None => tracing::info!(question = question_idx + 1, "quiz checked without a selection"),
    }

    Ok(views::quiz::feedback(question, question_idx, attempt))
}
