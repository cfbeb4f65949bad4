pub const LESSON_URL: &str = "/";
pub const EXPLORE_URL: &str = "/explore";
pub const REFLECTION_URL: &str = "/reflection";

pub fn quiz_check_url(question_idx: usize) -> String {
    format!("/quiz/{question_idx}/check")
}

pub fn resource_tab_url(tab: usize) -> String {
    format!("/resources/{tab}")
}

// Element ids targeted by htmx swaps
pub const EXPLORER_RESULTS_ID: &str = "explorer-results";
pub const REFLECTION_FEEDBACK_ID: &str = "reflection-feedback";
pub const RESOURCE_TABS_ID: &str = "resource-tabs";

pub fn quiz_feedback_id(question_idx: usize) -> String {
    format!("quiz-feedback-{question_idx}")
}

// Slider ranges
pub const TREATS_MIN: u32 = 10;
pub const TREATS_MAX: u32 = 50;
pub const DEFAULT_TREATS: u32 = 25;
pub const ANIMALS_MIN: u32 = 2;
pub const ANIMALS_MAX: u32 = 10;
pub const DEFAULT_ANIMALS: u32 = 5;

pub const TREAT_EMOJI: &str = "🍓";
pub const ANIMAL_EMOJI: &str = "🐻";

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";
pub const DEFAULT_HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";
