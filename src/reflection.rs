pub const ACCEPTED_MESSAGE: &str = "✅ Excellent! You're thinking like a mathematician.";
pub const REJECTED_MESSAGE: &str = "Please share your thoughts to complete the reflection.";

/// Name of the client-side event fired when a reflection is accepted.
pub const CELEBRATE_EVENT: &str = "celebrate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionOutcome {
    Accepted,
    Rejected,
}

impl ReflectionOutcome {
    pub fn message(self) -> &'static str {
        match self {
            ReflectionOutcome::Accepted => ACCEPTED_MESSAGE,
            ReflectionOutcome::Rejected => REJECTED_MESSAGE,
        }
    }

    pub fn celebrates(self) -> bool {
        self == ReflectionOutcome::Accepted
    }
}

/// Anything but whitespace counts. Nothing is stored.
pub fn submit(text: &str) -> ReflectionOutcome {
    if text.trim().is_empty() {
        ReflectionOutcome::Rejected
    } else {
        ReflectionOutcome::Accepted
    }
}
