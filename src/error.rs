//! Crate-wide error types

use thiserror::Error;

/// Errors raised by the toolkit
///
/// Layout computation never produces these; they come from sinks, from
/// misuse of the renderer protocol, and from parsing configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to a display sink failed
    #[error("display I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A constructor received an argument it cannot accept
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A renderer was added to a multi-renderer that already started rendering
    #[error("cannot add a renderer after rendering has started")]
    RendererAlreadyInitialized,

    /// `render_next_line` was called before `has_more_lines` started the renderer
    #[error("renderer has not been initialized; query `has_more_lines` first")]
    NotInitialized,

    /// `render_next_line` was called on a renderer with no output left
    #[error("renderer has no more lines")]
    NoMoreLines,

    /// Compact thickness notation could not be parsed
    #[error("invalid thickness `{0}`: expected 1, 2 or 4 non-negative integers")]
    ParseThickness(String),

    /// Alignment name could not be parsed
    #[error("invalid horizontal alignment `{0}`")]
    ParseAlignment(String),

    /// Color name or hex value could not be parsed
    #[error("invalid color `{0}`")]
    ParseColor(String),

    /// Configuration file is not valid TOML for the expected schema
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be written back as TOML
    #[error("cannot serialize configuration: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    /// Another process already holds the named instance lock
    #[error("another instance of `{0}` is already running")]
    AlreadyRunning(String),

    /// The prompt input stream ended before a value was read
    #[error("input stream closed before a value was entered")]
    InputClosed,
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
