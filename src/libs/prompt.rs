use super::error::Result;
use super::messages::Message;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Yes/no question asked before a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &Message) -> Result<bool>;
}

/// Asks on the terminal; the default answer is "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, message: &Message) -> Result<bool> {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .default(false)
            .interact()?)
    }
}

/// Answers every question with a fixed value, for `--yes` and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&self, _message: &Message) -> Result<bool> {
        Ok(self.0)
    }
}
