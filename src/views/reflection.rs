use maud::{html, Markup};

use crate::{names, reflection::ReflectionOutcome, session::LessonState, views::components};

pub fn acknowledgment(outcome: ReflectionOutcome) -> Markup {
    let kind = match outcome {
        ReflectionOutcome::Accepted => "success",
        ReflectionOutcome::Rejected => "warning",
    };
    components::callout(kind, html! { (outcome.message()) })
}

/// Acknowledgment for the last submission, if there was one.
pub fn feedback(state: &LessonState) -> Markup {
    html! {
        @if let Some(outcome) = state.reflection {
            (acknowledgment(outcome))
        }
    }
}

pub fn reflection(state: &LessonState) -> Markup {
    html! {
        section id="reflection" {
            h2 { "🧾 Reflection" }
            form hx-post=(names::REFLECTION_URL)
                 hx-target=(format!("#{}", names::REFLECTION_FEEDBACK_ID))
                 hx-swap="innerHTML" {
                label {
                    "What is one thing you learned about division today? Describe a real-life \
                     situation where you would use division with a remainder."
                    textarea name="reflection" rows="4" {}
                }
                button type="submit" { "Submit Reflection" }
            }
            div id=(names::REFLECTION_FEEDBACK_ID) aria-live="polite" {
                (feedback(state))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_lesson_has_no_acknowledgment() {
        let html = reflection(&LessonState::default()).into_string();
        assert!(html.contains("Submit Reflection"));
        assert!(!html.contains("callout"));
    }

    #[test]
    fn outcomes_render_their_messages() {
        let accepted = acknowledgment(ReflectionOutcome::Accepted).into_string();
        assert!(accepted.contains("callout-success"));
        assert!(accepted.contains("thinking like a mathematician"));

        let rejected = acknowledgment(ReflectionOutcome::Rejected).into_string();
        assert!(rejected.contains("callout-warning"));
        assert!(rejected.contains("Please share your thoughts"));
    }
}
