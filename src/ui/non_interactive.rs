//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{AddAnyError, Result};

use super::{OutputMode, Prompt, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "ADDANY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `ADDANY_PROMPT_<KEY>` environment variables
/// and fail otherwise.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(value.clone());
        }

        Err(AddAnyError::Other(anyhow::anyhow!(
            "Cannot prompt for '{}' in non-interactive mode (set {}{})",
            prompt.key,
            PROMPT_ENV_PREFIX,
            prompt.key.to_uppercase()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_fails_without_override() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::new("name", "File name");
        let err = ui.prompt(&prompt).unwrap_err();
        assert!(err.to_string().contains("non-interactive"));
        assert!(err.to_string().contains("ADDANY_PROMPT_NAME"));
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("ADDANY_PROMPT_NAME".to_string(), "Order.cs".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::new("name", "File name");
        assert_eq!(ui.prompt(&prompt).unwrap(), "Order.cs");
    }

    #[test]
    fn keeps_output_mode() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
