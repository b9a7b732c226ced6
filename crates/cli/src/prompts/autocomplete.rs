use cloud_picker_core::selection::ChoiceSource;
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::CustomUserError;

/// Bridges a choice source to inquire's autocompletion.
///
/// The source is re-invoked with the current input on every keystroke, so
/// the candidate list always reflects what the user has typed so far. No
/// source means no suggestions for any input.
#[derive(Clone)]
pub struct SourceCompleter {
    source: Option<ChoiceSource>,
}

impl SourceCompleter {
    #[must_use]
    pub fn new(source: Option<ChoiceSource>) -> Self {
        Self { source }
    }
}

impl Autocomplete for SourceCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        match &self.source {
            Some(source) => source(input).map_err(|error| -> CustomUserError { Box::new(error) }),
            None => Ok(Vec::new()),
        }
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}
