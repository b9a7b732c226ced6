//! Type definitions for the selection flows.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::error::Result;
use crate::records::Account;

use super::ALL_ACCOUNTS_LABEL;

/// Candidate source for a filtered prompt.
///
/// Invoked with the current input on every keystroke to recompute the
/// candidate list. The call may block (a lookup against a remote API, for
/// example); the prompt waits for it.
pub type ChoiceSource = Arc<dyn Fn(&str) -> Result<Vec<String>> + Send + Sync>;

/// One entry offered to the user in a selection prompt.
///
/// The order of a sequence of choices controls rendering order. Labels need
/// not be unique; values must be unique within one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<V> {
    pub label: String,
    pub value: V,
}

impl<V> Choice<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Outcome of the account selection flow.
///
/// Either one real account or the synthetic "every account" entry, which is
/// distinct from any real account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSelection {
    All,
    Account(Account),
}

impl Display for AccountSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountSelection::All => f.write_str(ALL_ACCOUNTS_LABEL),
            AccountSelection::Account(account) => write!(f, "{account}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account() -> Account {
        Account {
            key: "work".to_string(),
            email: "work@example.com".to_string(),
        }
    }

    #[test]
    fn test_choice_new() {
        let choice = Choice::new("label", 3usize);
        assert_eq!(choice.label, "label");
        assert_eq!(choice.value, 3);
    }

    #[test]
    fn test_choice_order_is_preserved() {
        let choices = vec![
            Choice::new("b", "b-value".to_string()),
            Choice::new("a", "a-value".to_string()),
        ];
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn test_account_selection_display_all() {
        assert_eq!(format!("{}", AccountSelection::All), "all");
    }

    #[test]
    fn test_account_selection_display_account() {
        let selection = AccountSelection::Account(create_test_account());
        assert_eq!(format!("{selection}"), "work@example.com");
    }

    #[test]
    fn test_account_selection_all_is_distinct_from_accounts() {
        let selection = AccountSelection::Account(create_test_account());
        assert_ne!(selection, AccountSelection::All);
    }
}
