//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{AddAnyError, Result};

use super::Prompt;

/// Convert dialoguer errors to AddAnyError.
fn map_dialoguer_err(e: dialoguer::Error) -> AddAnyError {
    AddAnyError::Io(e.into())
}

/// Prompt the user for a line of text.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(&prompt.question)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}
