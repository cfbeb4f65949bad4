use maud::{html, Markup};

use crate::{
    division::Division,
    names,
    session::{Avatar, LessonState},
    share::Proportions,
    views::{chart, components, quiz, reflection, resources},
};

fn intro() -> Markup {
    html! {
        h1 { "🐾 The Animal Kingdom Division Dash" }
        p {
            "Welcome to the Animal Kingdom! Here, we learn about "
            strong { "division" } " by helping animals share their treats."
        }
        p {
            "Division is all about " strong { "fair sharing" }
            " and figuring out if anything is left over. It's a key math skill used every day, \
             from sharing a pizza to organizing a team."
        }
        hr;
        h3 { "🎯 Objective:" }
        p { "By the end of this lesson, you'll be able to:" }
        ul {
            li { "Understand division as fair sharing among groups." }
            li {
                "Identify the " strong { "quotient" } " (the result of sharing) and the "
                strong { "remainder" } " (what's left over)."
            }
            li { "Apply division to solve real-world problems." }
            li { "Relate these concepts to Common Core math standards." }
        }
        (components::callout("info", html! {
            "📚 " strong { "Common Core Alignment:" }
            " This lesson aligns with elementary school math standards, specifically focusing on \
             Operations and Algebraic Thinking and Number and Operations in Base Ten \
             (e.g., 3.OA.A.2, 4.NBT.B.6)."
        }))
    }
}

fn slider(label: &str, name: &str, min: u32, max: u32, value: u32) -> Markup {
    html! {
        label {
            (label)
            input type="range" name=(name) min=(min) max=(max) step="1" value=(value)
                  oninput="this.nextElementSibling.value = this.value";
            output { (value) }
        }
    }
}

/// Name, guide and the two sliders. Without JavaScript the form falls back
/// to reloading the page with the inputs in the query string.
pub fn inputs(state: &LessonState) -> Markup {
    html! {
        form id="lesson-inputs"
             action=(names::LESSON_URL)
             method="get"
             hx-post=(names::EXPLORE_URL)
             hx-trigger="input delay:150ms, change"
             hx-sync="this:replace"
             hx-target=(format!("#{}", names::EXPLORER_RESULTS_ID))
             hx-swap="outerHTML" {
            label {
                "Enter your name:"
                input type="text" name="name" value=(state.name) autocomplete="given-name";
            }
            label {
                "Choose your animal guide:"
                select name="avatar" {
                    @for avatar in Avatar::ALL {
                        option value=(avatar.key()) selected[avatar == state.avatar] {
                            (avatar.label())
                        }
                    }
                }
            }
            hr;
            h2 { "🔍 Sharing is Caring: An Interactive Division Story" }
            p {
                "Use the sliders below to change the number of tasty treats and the number of \
                 hungry animals. The program will show you how to divide them fairly!"
            }
            div.grid {
                (slider(
                    "Total Tasty Treats (e.g., Berries)",
                    "treats",
                    names::TREATS_MIN,
                    names::TREATS_MAX,
                    state.treats,
                ))
                (slider(
                    "Number of Hungry Animals",
                    "animals",
                    names::ANIMALS_MIN,
                    names::ANIMALS_MAX,
                    state.animals,
                ))
            }
            noscript {
                button type="submit" { "Share the treats" }
            }
        }
    }
}

/// Everything that follows from the sliders: greeting, story, metrics, chart.
pub fn explorer(state: &LessonState, division: &Division) -> Markup {
    let treat = names::TREAT_EMOJI;
    let pie = Proportions::from(division).pie();

    html! {
        div id=(names::EXPLORER_RESULTS_ID) {
            @if let Some(greeting) = state.greeting() {
                (components::callout("success", html! { (greeting) }))
            }
            h3 {
                "Story Time: There are " (division.dividend) " " (treat) " for "
                (division.divisor) " " (names::ANIMAL_EMOJI) "s."
            }
            div.grid {
                (components::metric("Each Animal Gets", html! { (division.quotient) " " (treat) }))
                (components::metric("Treats Left Over", html! { (division.remainder) " " (treat) }))
                (components::metric("Total Treats Shared", html! { (division.dividend) }))
            }
            h2 { "📈 Visualizing the Division" }
            p { "This chart shows the fair share for each animal and any treats that were left over." }
            @if let Some(slices) = pie {
                (chart::pie(&slices))
            }
        }
    }
}

fn summary() -> Markup {
    html! {
        h2 { "🎓 What You've Learned" }
        p { strong { "Congratulations!" } " You've explored:" }
        ul.checklist {
            li { "✅ " strong { "Division as fair sharing" } " using a fun animal theme." }
            li {
                "✅ The difference between the " strong { "quotient" } " and the "
                strong { "remainder" } "."
            }
            li {
                "✅ How to visualize division and apply it to "
                strong { "real-world problems" } "."
            }
        }
    }
}

/// The whole lesson, rendered from one state snapshot.
pub fn lesson(state: &LessonState, division: &Division) -> Markup {
    html! {
        (intro())
        hr;
        (inputs(state))
        (explorer(state, division))
        hr;
        (quiz::quiz(state))
        (reflection::reflection(state))
        (summary())
        hr;
        h2 { "📚 Additional Resources" }
        (resources::tabs(state.resource_tab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LessonInputs;

    fn render(state: &LessonState) -> String {
        let division = state.division().unwrap();
        lesson(state, &division).into_string()
    }

    #[test]
    fn defaults_render_the_story() {
        let html = render(&LessonState::default());
        assert!(html.contains("There are 25 🍓 for 5 🐻s."));
        assert!(html.contains("Each Animal Gets"));
        assert!(html.contains("5 🍓"));
        assert!(html.contains(r#"name="treats" min="10" max="50" step="1" value="25""#));
        assert!(html.contains(r#"name="animals" min="2" max="10" step="1" value="5""#));
        assert!(!html.contains("Welcome, "));
    }

    #[test]
    fn explorer_shows_remainder() {
        let state = LessonState::default().with_inputs(LessonInputs {
            treats: Some(17),
            animals: Some(3),
            ..Default::default()
        });
        let html = explorer(&state, &state.division().unwrap()).into_string();
        assert!(html.contains("2 🍓"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn greeting_appears_once_named() {
        let state = LessonState::default().with_inputs(LessonInputs {
            name: Some("Mia".to_string()),
            avatar: Some(Avatar::Hedgehog),
            ..Default::default()
        });
        let html = render(&state);
        assert!(html.contains("Welcome, Mia the 🦔 Hedgehog!"));
        assert!(html.contains(r#"<option value="hedgehog" selected>"#));
    }

    #[test]
    fn zero_treats_skip_the_chart() {
        let state = LessonState {
            treats: 0,
            ..LessonState::default()
        };
        let html = explorer(&state, &state.division().unwrap()).into_string();
        assert!(!html.contains("<svg"));
        assert!(html.contains("Total Treats Shared"));
    }
}
