use maud::{html, Markup};

use crate::{
    names,
    quiz::{QuizAttempt, QuizQuestion, QUESTIONS},
    session::LessonState,
    views::components,
};

/// Verdict shown under a question after its check button was pressed.
pub fn feedback(question: &QuizQuestion, question_idx: usize, attempt: &QuizAttempt) -> Markup {
    match attempt {
        QuizAttempt::Evaluated { correct: true, .. } => components::callout(
            "success",
            html! { "✅ Correct! " (question.explanation) },
        ),
        QuizAttempt::Evaluated { correct: false, .. } => components::callout(
            "error",
            html! { "❌ Try again! " (question.explanation) },
        ),
        QuizAttempt::Unanswered => components::callout(
            "warning",
            html! { "Pick an answer for question " (question_idx + 1) " first." },
        ),
        QuizAttempt::Selected { .. } => html! {},
    }
}

fn question(question_idx: usize, q: &QuizQuestion, attempt: &QuizAttempt) -> Markup {
    let number = question_idx + 1;
    let feedback_id = names::quiz_feedback_id(question_idx);
    let clear_feedback = format!("document.getElementById('{feedback_id}').innerHTML = ''");

    html! {
        article.quiz-question {
            p { strong { "Question " (number) ":" } " " (q.prompt) }
            form hx-post=(names::quiz_check_url(question_idx))
                 hx-target=(format!("#{feedback_id}"))
                 hx-swap="innerHTML" {
                fieldset {
                    legend { "Select your answer for Q" (number) ":" }
                    @for option in q.options {
                        label {
                            input type="radio"
                                  name="option"
                                  value=(option)
                                  onchange=(clear_feedback)
                                  checked[attempt.selected() == Some(option)];
                            (option)
                        }
                    }
                }
                button type="submit" { "Check Answer " (number) }
            }
            div id=(feedback_id) aria-live="polite" {
                @if attempt.verdict().is_some() {
                    (feedback(q, question_idx, attempt))
                }
            }
        }
    }
}

pub fn quiz(state: &LessonState) -> Markup {
    html! {
        section id="quiz" {
            h2 { "🎲 Quick Understanding Check" }
            @for (idx, (q, attempt)) in QUESTIONS.iter().zip(&state.quiz).enumerate() {
                (question(idx, q, attempt))
            }
        }
    }
}
