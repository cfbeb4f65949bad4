use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::{quiz::QuizError, resources::ResourceError, views};

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Input(&'static str),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Input(_) => "INPUT_ERROR",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Input(reason) => tracing::warn!("rejected input: {reason}"),
            AppError::Internal(reason) => tracing::error!("internal error: {reason}"),
            AppError::NotFound => {}
        }
        (self.status(), error_page(self.message())).into_response()
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        tracing::warn!("quiz lookup failed: {err}");
        match err {
            QuizError::QuestionNotFound(_) => AppError::NotFound,
            QuizError::OptionNotFound { .. } => AppError::Input("unknown quiz option"),
        }
    }
}

impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        tracing::warn!("{err}");
        AppError::NotFound
    }
}

/// Turns any displayable error into an [`AppError`], logging the cause.
pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }

    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Input(message)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to the lesson" } }
        },
        None,
    )
}
