//! Per-learner lesson state.
//!
//! The server keeps nothing between requests: each request rebuilds a
//! [`LessonState`] from what the browser sent and every interaction yields a
//! new snapshot that the views render.

use serde::Deserialize;

use crate::{
    division::{self, Division, DivisionError},
    names,
    quiz::{self, QuizAttempt, QuizError, QUESTION_COUNT},
    reflection::{self, ReflectionOutcome},
    resources::{self, ResourceError},
    share::Proportions,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Avatar {
    #[default]
    Bear,
    Rabbit,
    Fox,
    Hedgehog,
}

impl Avatar {
    pub const ALL: [Avatar; 4] = [Avatar::Bear, Avatar::Rabbit, Avatar::Fox, Avatar::Hedgehog];

    /// Form value.
    pub fn key(self) -> &'static str {
        match self {
            Avatar::Bear => "bear",
            Avatar::Rabbit => "rabbit",
            Avatar::Fox => "fox",
            Avatar::Hedgehog => "hedgehog",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Avatar::Bear => "🐻 Bear",
            Avatar::Rabbit => "🐰 Rabbit",
            Avatar::Fox => "🦊 Fox",
            Avatar::Hedgehog => "🦔 Hedgehog",
        }
    }
}

/// Learner-controlled inputs as submitted by the lesson form. Missing fields
/// keep the current value.
#[derive(Debug, Default, Deserialize)]
pub struct LessonInputs {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub treats: Option<u32>,
    #[serde(default)]
    pub animals: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonState {
    pub name: String,
    pub avatar: Avatar,
    pub treats: u32,
    pub animals: u32,
    pub quiz: [QuizAttempt; QUESTION_COUNT],
    pub reflection: Option<ReflectionOutcome>,
    pub resource_tab: usize,
}

impl Default for LessonState {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: Avatar::default(),
            treats: names::DEFAULT_TREATS,
            animals: names::DEFAULT_ANIMALS,
            quiz: Default::default(),
            reflection: None,
            resource_tab: 0,
        }
    }
}

impl LessonState {
    pub fn with_inputs(self, inputs: LessonInputs) -> Self {
        Self {
            name: inputs.name.unwrap_or(self.name),
            avatar: inputs.avatar.unwrap_or(self.avatar),
            treats: inputs
                .treats
                .map_or(self.treats, |t| t.clamp(names::TREATS_MIN, names::TREATS_MAX)),
            animals: inputs
                .animals
                .map_or(self.animals, |a| a.clamp(names::ANIMALS_MIN, names::ANIMALS_MAX)),
            ..self
        }
    }

    pub fn with_selection(
        mut self,
        question_idx: usize,
        option: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let attempt = self.attempt_mut(question_idx)?;
        *attempt = std::mem::take(attempt).select(option);
        Ok(self)
    }

    pub fn with_check(mut self, question_idx: usize) -> Result<Self, QuizError> {
        let attempt = self.attempt_mut(question_idx)?;
        *attempt = std::mem::take(attempt).check(question_idx)?;
        Ok(self)
    }

    pub fn with_reflection(self, text: &str) -> Self {
        Self {
            reflection: Some(reflection::submit(text)),
            ..self
        }
    }

    pub fn with_resource_tab(self, tab: usize) -> Result<Self, ResourceError> {
        resources::category(tab)?;
        Ok(Self {
            resource_tab: tab,
            ..self
        })
    }

    pub fn attempt(&self, question_idx: usize) -> Result<&QuizAttempt, QuizError> {
        self.quiz
            .get(question_idx)
            .ok_or(QuizError::QuestionNotFound(question_idx))
    }

    fn attempt_mut(&mut self, question_idx: usize) -> Result<&mut QuizAttempt, QuizError> {
        // validates against the question bank, not just the attempt slots
        quiz::question(question_idx)?;
        self.quiz
            .get_mut(question_idx)
            .ok_or(QuizError::QuestionNotFound(question_idx))
    }

    pub fn division(&self) -> Result<Division, DivisionError> {
        division::divide(self.treats, self.animals)
    }

    pub fn proportions(&self) -> Result<Proportions, DivisionError> {
        self.division().map(|d| Proportions::from(&d))
    }

    pub fn greeting(&self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(format!(
            "Welcome, {name} the {}! Let's start our division adventure.",
            self.avatar.label()
        ))
    }
}
