//! Interactive prompt implementation backed by the `inquire` crate.
//!
//! This module provides the terminal-facing side of cloud-picker: yes/no
//! confirmation, a filterable single-select list and an autocomplete text
//! field. Rendering, filtering and key handling are `inquire`'s concern;
//! this module only adapts its surface to the prompt capability consumed
//! by the selection flows.
//!
//! # User Interface
//!
//! The prompts support:
//! - Arrow keys to navigate, typing to filter the select list
//! - Enter to confirm the highlighted entry
//! - Escape to cancel, surfaced to the flows as an error

// Export public items from submodules
pub mod autocomplete;

// Re-exports for convenience
pub use autocomplete::SourceCompleter;

use cloud_picker_core::error::{Error, Result};
use cloud_picker_core::selection::{
    Choice, ChoiceSource, Prompt, FILTERED_PAGE_SIZE, SELECT_PAGE_SIZE,
};
use inquire::error::InquireError;
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

/// Prompt implementation that talks to the terminal through `inquire`.
pub struct InquirePrompt;

fn format_message(message: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("[{prefix}] {message}"),
        None => message.to_string(),
    }
}

fn map_inquire_error(error: InquireError) -> Error {
    match error {
        InquireError::NotTTY => Error::NotInteractive,
        InquireError::OperationCanceled => Error::Cancelled,
        InquireError::OperationInterrupted => Error::Interrupted,
        InquireError::IO(original) => Error::Stdio(original),
        // Custom errors originate from our own choice sources; unwrap them
        // back into the crate error where possible
        InquireError::Custom(custom) => match custom.downcast::<Error>() {
            Ok(inner) => *inner,
            Err(other) => Error::Prompt(other.to_string()),
        },
        InquireError::InvalidConfiguration(message) => Error::Prompt(message),
    }
}

impl Prompt for InquirePrompt {
    fn confirm(&self, message: &str, prefix: Option<&str>) -> Result<bool> {
        let message = format_message(message, prefix);

        Confirm::new(&message)
            .with_default(true)
            .prompt()
            .map_err(map_inquire_error)
    }

    fn select_one<V: Clone>(
        &self,
        message: &str,
        choices: &[Choice<V>],
        prefix: Option<&str>,
    ) -> Result<V> {
        let message = format_message(message, prefix);
        let labels: Vec<String> = choices.iter().map(|choice| choice.label.clone()).collect();

        // raw_prompt keeps the row index, so duplicate labels resolve to
        // the right value
        let selected = Select::new(&message, labels)
            .with_page_size(SELECT_PAGE_SIZE)
            .raw_prompt()
            .map_err(map_inquire_error)?;

        choices
            .get(selected.index)
            .map(|choice| choice.value.clone())
            .ok_or(Error::ChoiceOutOfRange(selected.index))
    }

    fn select_one_filtered(
        &self,
        message: &str,
        source: Option<ChoiceSource>,
        prefix: Option<&str>,
        suggest_only: bool,
    ) -> Result<String> {
        let message = format_message(message, prefix);
        let completer = SourceCompleter::new(source.clone());

        let mut text = Text::new(&message)
            .with_autocomplete(completer)
            .with_page_size(FILTERED_PAGE_SIZE);

        if !suggest_only {
            // Reject input that matches none of the current candidates
            text = text.with_validator(move |input: &str| {
                let candidates = match &source {
                    Some(source) => source(input)
                        .map_err(|error| -> inquire::CustomUserError { Box::new(error) })?,
                    None => Vec::new(),
                };

                if candidates.iter().any(|candidate| candidate == input) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        "Value must match one of the suggestions.".into(),
                    ))
                }
            });
        }

        text.prompt().map_err(map_inquire_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_without_prefix() {
        assert_eq!(format_message("Select an account:", None), "Select an account:");
    }

    #[test]
    fn test_format_message_with_prefix() {
        assert_eq!(
            format_message("Select an account:", Some("auth")),
            "[auth] Select an account:"
        );
    }

    #[test]
    fn test_map_not_tty() {
        let mapped = map_inquire_error(InquireError::NotTTY);
        assert!(matches!(mapped, Error::NotInteractive));
    }

    #[test]
    fn test_map_cancel_and_interrupt() {
        assert!(matches!(
            map_inquire_error(InquireError::OperationCanceled),
            Error::Cancelled
        ));
        assert!(matches!(
            map_inquire_error(InquireError::OperationInterrupted),
            Error::Interrupted
        ));
    }

    #[test]
    fn test_map_custom_unwraps_crate_error() {
        let custom = InquireError::Custom(Box::new(Error::NoCurrentAccount));
        let mapped = map_inquire_error(custom);
        assert!(matches!(mapped, Error::NoCurrentAccount));
    }

    #[test]
    fn test_map_invalid_configuration() {
        let mapped = map_inquire_error(InquireError::InvalidConfiguration("bad".to_string()));
        assert!(matches!(mapped, Error::Prompt(message) if message == "bad"));
    }
}
