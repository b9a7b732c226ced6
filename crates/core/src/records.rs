use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub key: String,
    pub email: String,
}

impl Display for Account {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.email)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub project_id: String,
    pub display_name: String,
}

impl Display for Project {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.display_name == self.project_id {
            // Avoids rendering `id (id)` when the name just repeats the ID
            formatter.write_str(&self.project_id)
        } else {
            write!(formatter, "{} ({})", self.display_name, self.project_id)
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListing {
    pub results: Vec<Project>,
}

impl ProjectListing {
    /// Looks up a project by exact ID match.
    #[must_use]
    pub fn find_by_id(&self, project_id: &str) -> Option<&Project> {
        self.results
            .iter()
            .find(|project| project.project_id == project_id)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AccountManifest {
    /// Key of the account treated as the currently active one
    pub current: Option<String>,
    pub accounts: Vec<Account>,
}

impl AccountManifest {
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        let current = self.current.as_ref()?;
        self.accounts.iter().find(|account| &account.key == current)
    }
}
