//! Non-interactive prompter replaying canned answers.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::prompt::{Choice, PromptError, Prompter};

/// A prompt that a [`ScriptedPrompter`] was asked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptRecord {
    /// A free-text (or secret) prompt.
    Text {
        /// The prompt message.
        message: String,
    },
    /// A single-choice prompt.
    Select {
        /// The prompt message.
        message: String,
        /// Labels of the offered options, in order.
        labels: Vec<String>,
    },
    /// A status line.
    Info {
        /// The reported message.
        message: String,
    },
}

#[derive(Debug, Default)]
struct Script {
    texts: VecDeque<String>,
    choices: VecDeque<usize>,
    records: Vec<PromptRecord>,
}

/// A [`Prompter`] that answers from queues and records every interaction.
///
/// Text answers and choice indices are consumed in the order they were
/// added. Running out of answers yields [`PromptError::Exhausted`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: Mutex<Script>,
}

impl ScriptedPrompter {
    /// Creates a prompter with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a free-text answer.
    #[must_use]
    pub fn with_text(self, answer: impl Into<String>) -> Self {
        self.lock().texts.push_back(answer.into());
        self
    }

    /// Queues a choice index.
    #[must_use]
    pub fn with_choice(self, index: usize) -> Self {
        self.lock().choices.push_back(index);
        self
    }

    /// Returns every interaction so far.
    #[must_use]
    pub fn records(&self) -> Vec<PromptRecord> {
        self.lock().records.clone()
    }

    /// Returns only the single-choice prompts asked so far.
    #[must_use]
    pub fn select_prompts(&self) -> Vec<PromptRecord> {
        self.records()
            .into_iter()
            .filter(|r| matches!(r, PromptRecord::Select { .. }))
            .collect()
    }

    /// Returns only the free-text prompts asked so far.
    #[must_use]
    pub fn text_prompts(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                PromptRecord::Text { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Returns the status lines reported so far.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                PromptRecord::Info { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, message: &str) -> Result<String, PromptError> {
        let mut script = self.lock();
        script.records.push(PromptRecord::Text {
            message: message.to_string(),
        });
        script.texts.pop_front().ok_or_else(|| PromptError::Exhausted {
            message: message.to_string(),
        })
    }

    fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
        let mut script = self.lock();
        script.records.push(PromptRecord::Select {
            message: message.to_string(),
            labels: choices.iter().map(|c| c.label.clone()).collect(),
        });
        script.choices.pop_front().ok_or_else(|| PromptError::Exhausted {
            message: message.to_string(),
        })
    }

    fn info(&self, message: &str) {
        self.lock().records.push(PromptRecord::Info {
            message: message.to_string(),
        });
    }
}
