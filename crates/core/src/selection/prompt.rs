//! The prompt capability consumed by the selection flows.
//!
//! Implementations own all terminal rendering and key handling. The flows
//! only ever ask three questions: yes/no, pick one of these, and pick one
//! from a recomputed candidate list. The `cloud-picker-cli` crate provides
//! the interactive implementation; tests script their own.

use crate::error::Result;

use super::types::{Choice, ChoiceSource};

/// Visible rows in a single-select list
pub const SELECT_PAGE_SIZE: usize = 6;
/// Visible rows in a filtered prompt's suggestion list
pub const FILTERED_PAGE_SIZE: usize = 12;

pub trait Prompt {
    /// Asks a yes/no question. The default answer is yes.
    ///
    /// # Errors
    ///
    /// Fails only on an input-channel error, which is propagated untouched.
    fn confirm(&self, message: &str, prefix: Option<&str>) -> Result<bool>;

    /// Asks the user to pick one entry from a filterable list, showing at
    /// most [`SELECT_PAGE_SIZE`] rows at a time.
    ///
    /// Assumes a non-empty list. Checking emptiness beforehand is the
    /// caller's responsibility; flows encode the empty case as a `None`
    /// result instead of prompting.
    fn select_one<V: Clone>(
        &self,
        message: &str,
        choices: &[Choice<V>],
        prefix: Option<&str>,
    ) -> Result<V>;

    /// Asks for free-text input, recomputing candidates from `source` on
    /// every keystroke.
    ///
    /// An absent `source` means the candidate list is empty for every
    /// input. With `suggest_only` set, a value matching no candidate is
    /// accepted verbatim; otherwise it is rejected.
    fn select_one_filtered(
        &self,
        message: &str,
        source: Option<ChoiceSource>,
        prefix: Option<&str>,
        suggest_only: bool,
    ) -> Result<String>;
}
