//! The account selection decision procedure.

use log::debug;

use crate::error::{Error, Result};
use crate::providers::AuthProvider;

use super::prompt::Prompt;
use super::types::{AccountSelection, Choice};

/// Selects one authenticated account, the "all accounts" entry, or nothing.
///
/// The decision procedure, evaluated in order over the fetched account
/// list when `prompt_to_add` is set:
///
/// - exactly one account: offer to add another. Declining selects that
///   account immediately, skipping every later step including the
///   `allow_all` entry.
/// - zero accounts: offer to add one. Declining selects nothing. After a
///   successful enrollment that leaves exactly one account, that account
///   is selected immediately without another confirmation.
///
/// Otherwise the (possibly refreshed) accounts are offered as a list, with
/// the "all" entry prepended when `allow_all` is set.
///
/// Choice values are positions in the entry list built at prompt time, not
/// stable account keys. The entry list is local to this call and cannot
/// change between choice construction and resolution, which is what makes
/// the positional coupling safe.
///
/// # Errors
///
/// Provider and prompt failures propagate to the caller unrecovered,
/// including a cancelled prompt and a failed enrollment. An account
/// enrolled before a later failure is not rolled back.
pub fn select_account<P: Prompt, A: AuthProvider>(
    prompt: &P,
    auth: &A,
    allow_all: bool,
    prompt_to_add: bool,
) -> Result<Option<AccountSelection>> {
    let mut accounts = auth.get_accounts()?;

    if prompt_to_add {
        // Only one account, so default to that one unless another is added
        if accounts.len() == 1 {
            let add_another = prompt.confirm(
                "You only have one account to select from. Add another account?",
                None,
            )?;

            if !add_another {
                return Ok(accounts.pop().map(AccountSelection::Account));
            }

            auth.auth_with_browser()?;
            accounts = auth.get_accounts()?;
        }

        // No accounts, so ask to add one
        if accounts.is_empty() {
            let add_one = prompt.confirm(
                "No accounts found - would you like to add a new account?",
                None,
            )?;

            if !add_one {
                return Ok(None);
            }

            auth.auth_with_browser()?;
            accounts = auth.get_accounts()?;

            // The lone account was added just now; select it without
            // asking again
            if accounts.len() == 1 {
                return Ok(accounts.pop().map(AccountSelection::Account));
            }
        }
    }

    let mut entries: Vec<AccountSelection> = Vec::with_capacity(accounts.len() + 1);
    if allow_all {
        entries.push(AccountSelection::All);
    }
    entries.extend(accounts.into_iter().map(AccountSelection::Account));

    if entries.is_empty() {
        debug!("No accounts to offer; nothing to select");
        return Ok(None);
    }

    let choices: Vec<Choice<usize>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Choice::new(entry.to_string(), index))
        .collect();

    let selected_index = prompt.select_one("Select an account:", &choices, Some("auth"))?;

    if selected_index >= entries.len() {
        return Err(Error::ChoiceOutOfRange(selected_index));
    }

    Ok(Some(entries.swap_remove(selected_index)))
}
