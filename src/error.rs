use thiserror::Error;

/// Errors returned while talking to a dynamic store
#[derive(Debug, Error)]
pub enum Error {
    /// The DNS key pattern matched no key in the store
    #[error("no configurable network services found")]
    NoServices,

    /// A key pattern could not be compiled as a regular expression
    #[error("invalid key pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
