use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The login helper exited with a non-success code.")]
    LoginHelperExit,

    #[error("Error with login helper process: {}", _0)]
    LoginHelper(#[from] std::io::Error),

    #[error("No login helper command is configured, so a new account cannot be added.")]
    LoginHelperNotConfigured,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Selection cancelled.")]
    Cancelled,

    #[error("Selection interrupted.")]
    Interrupted,

    #[error("Interactive prompts require a terminal.")]
    NotInteractive,

    #[error("Prompt error: {}", .0)]
    Prompt(String),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("No account is currently active. Log in first or pass an account explicitly.")]
    NoCurrentAccount,

    #[error("No account matches `{}`.", .0)]
    AccountNotFound(String),

    #[error("The prompt returned index {} which is outside the offered choices.", .0)]
    ChoiceOutOfRange(usize),

    #[error("Found a non-unique account key: `{}`", .0)]
    NonUniqueAccountKey(String),

    #[error("Found a non-unique project ID for account {}: `{}`", .0, .1)]
    NonUniqueProjectId(String, String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
