use thiserror::Error;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Free text extraction kept peeling tokens without settling
    #[error("free text extraction did not settle within {0} iterations")]
    ParseLoopExceeded(usize),

    #[error("cannot parse option label: {0}")]
    Label(#[from] Box<pest::error::Error<Rule>>),

    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error(transparent)]
    Poll(#[from] PollError),
}

/// Reasons a poll can't be created from the parsed request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("there's {options} options but there's no question")]
    MissingQuestion { options: usize },

    #[error("you need at least more than one option")]
    SingleOption,

    #[error("you can only have {limit} options or less, you have {count}")]
    TooManyOptions { limit: usize, count: usize },

    #[error("you can't have a duplicate emote ({0}) for a reaction")]
    DuplicateEmote(String),
}
