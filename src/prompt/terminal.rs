//! Terminal prompts backed by dialoguer.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::prompt::{Choice, PromptError, Prompter, Spinner};

/// Prompts the user on the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Creates a prompter using dialoguer's colorful theme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn text(&self, message: &str) -> Result<String, PromptError> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .interact_text()?;
        Ok(answer)
    }

    fn secret(&self, message: &str) -> Result<String, PromptError> {
        let answer = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .interact()?;
        Ok(answer)
    }

    fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
        let items: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn info(&self, message: &str) {
        eprintln!("{} {}", "→".cyan(), message);
    }

    fn spinner(&self, message: &str) -> Spinner {
        Spinner::start(message)
    }
}
