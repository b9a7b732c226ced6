//! The project selection decision procedure.

use log::debug;

use crate::error::{Error, Result};
use crate::providers::{AuthProvider, ProjectRegistry};
use crate::records::{Account, Project};

use super::prompt::Prompt;
use super::types::Choice;

/// Selects one project visible to an account.
///
/// Uses `account` when given, otherwise the provider's current account.
/// An empty registry listing selects nothing without prompting. The chosen
/// project ID is mapped back to the full record from the original listing.
///
/// # Errors
///
/// Fails with [`Error::NoCurrentAccount`] when no account is given and
/// none is active. Registry and prompt failures propagate to the caller
/// unrecovered; callers own any retry policy.
pub fn select_project<P: Prompt, A: AuthProvider, R: ProjectRegistry>(
    prompt: &P,
    auth: &A,
    registry: &R,
    account: Option<&Account>,
) -> Result<Option<Project>> {
    let account = match account {
        Some(account) => account.clone(),
        None => auth.get_account()?.ok_or(Error::NoCurrentAccount)?,
    };

    let listing = registry.get_projects(&account)?;

    let choices: Vec<Choice<String>> = listing
        .results
        .iter()
        .map(|project| Choice::new(project.to_string(), project.project_id.clone()))
        .collect();

    if choices.is_empty() {
        debug!("No projects visible to {}; nothing to select", account.email);
        return Ok(None);
    }

    let selected_id = prompt.select_one("Select a project:", &choices, None)?;

    Ok(listing.find_by_id(&selected_id).cloned())
}
