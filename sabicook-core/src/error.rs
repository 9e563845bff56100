use thiserror::Error;

use crate::selection::MAX_SELECTIONS;

/// Rejections raised by the ingredient selection store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("You can select up to {max} ingredients")]
    MaxReached { max: usize },

    #[error("Cannot select {requested} ingredients, the limit is {max}")]
    TooMany { requested: usize, max: usize },
}

/// Local validation failures for a generation request.
///
/// These are the only failures a caller of the generation pipeline ever sees;
/// everything that goes wrong talking to the service degrades to fallback data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejected {
    #[error("Please select at least 2 ingredients")]
    TooFewIngredients { selected: usize },

    #[error("Please select {} or fewer ingredients", MAX_SELECTIONS)]
    TooManyIngredients { selected: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Rejected(#[from] InputRejected),

    #[error("A generation request is already in progress")]
    AlreadyInProgress,
}

/// Why a service response could not be turned into domain records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("No JSON found in response")]
    NoJson,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Response contained no usable records")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("No user logged in")]
    NotSignedIn,
}
