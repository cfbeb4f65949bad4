use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("no quiz question at index {0}")]
    QuestionNotFound(usize),
    #[error("'{option}' is not an option of question {question}")]
    OptionNotFound { question: usize, option: String },
}

#[derive(Debug)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_index]
    }

    pub fn option_index(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| *o == option)
    }
}

pub const QUESTION_COUNT: usize = 3;

pub static QUESTIONS: [QuizQuestion; QUESTION_COUNT] = [
    QuizQuestion {
        prompt: "If 20 🍓 are divided among 5 🐻s, how many does each animal get?",
        options: ["3", "4", "5", "25"],
        correct_index: 1,
        explanation: "20 divided by 5 is 4. Each animal gets 4 treats.",
    },
    QuizQuestion {
        prompt: "What is the remainder if you divide 17 by 3?",
        options: ["1", "2", "3", "0"],
        correct_index: 1,
        explanation: "17 divided by 3 is 5 with a remainder of 2.",
    },
    QuizQuestion {
        prompt: "If each of 8 animals gets 3 treats, how many total treats were there?",
        options: ["11", "24", "8", "3"],
        correct_index: 1,
        explanation:
            "This is multiplication! 8 animals times 3 treats each equals 24 treats total.",
    },
];

pub fn question(index: usize) -> Result<&'static QuizQuestion, QuizError> {
    QUESTIONS.get(index).ok_or(QuizError::QuestionNotFound(index))
}

pub fn evaluate(question_index: usize, selected: &str) -> Result<bool, QuizError> {
    let q = question(question_index)?;
    let picked = q
        .option_index(selected)
        .ok_or_else(|| QuizError::OptionNotFound {
            question: question_index,
            option: selected.to_string(),
        })?;
    Ok(picked == q.correct_index)
}

/// Where a learner is with one question. Re-selecting after a check starts
/// over from `Selected`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizAttempt {
    #[default]
    Unanswered,
    Selected {
        option: String,
    },
    Evaluated {
        option: String,
        correct: bool,
    },
}

impl QuizAttempt {
    pub fn select(self, option: impl Into<String>) -> Self {
        QuizAttempt::Selected {
            option: option.into(),
        }
    }

    /// Checking without a selection leaves the attempt unanswered.
    pub fn check(self, question_index: usize) -> Result<Self, QuizError> {
        match self {
            QuizAttempt::Unanswered => Ok(QuizAttempt::Unanswered),
            QuizAttempt::Selected { option } | QuizAttempt::Evaluated { option, .. } => {
                let correct = evaluate(question_index, &option)?;
                Ok(QuizAttempt::Evaluated { option, correct })
            }
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            QuizAttempt::Unanswered => None,
            QuizAttempt::Selected { option } | QuizAttempt::Evaluated { option, .. } => {
                Some(option)
            }
        }
    }

    pub fn verdict(&self) -> Option<bool> {
        match self {
            QuizAttempt::Evaluated { correct, .. } => Some(*correct),
            _ => None,
        }
    }
}
