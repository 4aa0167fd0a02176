//! Interactive prompting.
//!
//! The onboarding flow only needs two capabilities from a terminal: asking
//! for free text and asking to pick one of several labeled options. They sit
//! behind the [`Prompter`] trait so that resolution logic can run against a
//! [`ScriptedPrompter`] in tests and a [`TerminalPrompter`] for real users.
//!
//! # Example
//!
//! ```rust
//! use crystallize_onboard::prompt::{choose, Choice, Prompter, ScriptedPrompter};
//!
//! let prompter = ScriptedPrompter::new().with_text("demo").with_choice(1);
//!
//! assert_eq!(prompter.text("Tenant identifier").unwrap(), "demo");
//!
//! let choices = [Choice::new("English", "en"), Choice::new("Norsk", "no")];
//! let picked = choose(&prompter, "Select a language", &choices).unwrap();
//! assert_eq!(picked.value, "no");
//! ```

mod scripted;
mod spinner;
mod terminal;

pub use scripted::{PromptRecord, ScriptedPrompter};
pub use spinner::Spinner;
pub use terminal::TerminalPrompter;

use thiserror::Error;

/// A labeled option in a single-choice prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,
    /// Value the caller acts on.
    pub value: String,
}

impl Choice {
    /// Creates a choice.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Errors raised while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal prompt failed (closed stdin, not a TTY, ...).
    #[error("Interactive prompt error: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A scripted prompter ran out of answers.
    #[error("No scripted answer left for prompt '{message}'")]
    Exhausted {
        /// The prompt that had no answer.
        message: String,
    },

    /// A selection was requested with nothing to choose from.
    #[error("Nothing to choose from for prompt '{message}'")]
    NoChoices {
        /// The prompt message.
        message: String,
    },

    /// The selected index is outside the option list.
    #[error("Selection {index} is out of range for {len} options")]
    InvalidChoice {
        /// The index returned by the prompter.
        index: usize,
        /// The number of options offered.
        len: usize,
    },
}

/// The interactive capabilities the onboarding flow relies on.
pub trait Prompter {
    /// Asks for a line of free text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if no answer can be obtained.
    fn text(&self, message: &str) -> Result<String, PromptError>;

    /// Asks for a value that should not be echoed. Defaults to [`text`](Self::text).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if no answer can be obtained.
    fn secret(&self, message: &str) -> Result<String, PromptError> {
        self.text(message)
    }

    /// Asks the user to pick one of `choices`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if no answer can be obtained.
    fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError>;

    /// Reports a status line to the user.
    fn info(&self, message: &str);

    /// Starts a transient progress indicator. Defaults to a hidden one.
    fn spinner(&self, message: &str) -> Spinner {
        let _ = message;
        Spinner::hidden()
    }
}

/// Asks `prompter` to pick one of `choices` and returns the picked choice.
///
/// # Errors
///
/// Returns [`PromptError::NoChoices`] for an empty list and
/// [`PromptError::InvalidChoice`] if the prompter answers out of range.
pub fn choose<'a, P>(
    prompter: &P,
    message: &str,
    choices: &'a [Choice],
) -> Result<&'a Choice, PromptError>
where
    P: Prompter + ?Sized,
{
    if choices.is_empty() {
        return Err(PromptError::NoChoices {
            message: message.to_string(),
        });
    }
    let index = prompter.select(message, choices)?;
    choices.get(index).ok_or(PromptError::InvalidChoice {
        index,
        len: choices.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_rejects_empty_list() {
        let prompter = ScriptedPrompter::new().with_choice(0);
        let result = choose(&prompter, "Pick", &[]);
        assert!(matches!(result, Err(PromptError::NoChoices { .. })));
        assert!(prompter.records().is_empty());
    }

    #[test]
    fn test_choose_rejects_out_of_range_answer() {
        let prompter = ScriptedPrompter::new().with_choice(5);
        let choices = [Choice::new("a", "1"), Choice::new("b", "2")];
        let result = choose(&prompter, "Pick", &choices);
        assert!(matches!(
            result,
            Err(PromptError::InvalidChoice { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_choose_works_through_trait_object() {
        let prompter = ScriptedPrompter::new().with_choice(0);
        let dyn_prompter: &dyn Prompter = &prompter;
        let choices = [Choice::new("only", "x")];
        assert_eq!(choose(dyn_prompter, "Pick", &choices).unwrap().value, "x");
    }
}
