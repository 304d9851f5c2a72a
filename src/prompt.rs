use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use tracing::info;

use crate::error::Result;

/// Yes/no question gating a season refresh.
pub trait Confirm {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Terminal prompt. Without a terminal on stdin the default answer is taken.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !io::stdin().is_terminal() {
            info!(question, default, "No terminal attached, using default answer");
            return Ok(default);
        }
        let answer = dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact_opt()?;
        // Esc or q leaves the question unanswered
        Ok(answer.unwrap_or(default))
    }
}
