use axum::{
    extract::{Form, Path, Query, State},
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    session::{LessonInputs, LessonState},
    views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::LESSON_URL, get(lesson_page))
        .route(names::EXPLORE_URL, post(explore))
        .route("/resources/{tab}", get(resource_tab))
}

fn render_lesson(
    lesson: &LessonState,
    is_htmx: bool,
    state: &AppState,
) -> Result<Markup, AppError> {
    let division = lesson.division().reject("could not divide treats")?;
    Ok(views::render(
        is_htmx,
        "Lesson",
        views::lesson::lesson(lesson, &division),
        &state.htmx_src,
    ))
}

async fn lesson_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Query(inputs): Query<LessonInputs>,
) -> Result<Markup, AppError> {
    let lesson = LessonState::default().with_inputs(inputs);
    tracing::debug!(treats = lesson.treats, animals = lesson.animals, "rendering lesson");
    render_lesson(&lesson, is_htmx, &state)
}

async fn explore(Form(inputs): Form<LessonInputs>) -> Result<Markup, AppError> {
    let lesson = LessonState::default().with_inputs(inputs);
    let division = lesson.division().reject("could not divide treats")?;

    tracing::debug!(
        treats = division.dividend,
        animals = division.divisor,
        quotient = division.quotient,
        remainder = division.remainder,
        "recomputed fair share"
    );

    Ok(views::lesson::explorer(&lesson, &division))
}

async fn resource_tab(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(tab): Path<usize>,
) -> Result<Markup, AppError> {
    let lesson = LessonState::default().with_resource_tab(tab)?;

    if is_htmx {
        Ok(views::resources::tabs(lesson.resource_tab))
    } else {
        render_lesson(&lesson, false, &state)
    }
}
