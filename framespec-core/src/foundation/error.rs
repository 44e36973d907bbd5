/// Convenience result type used across framespec.
pub type FrameResult<T> = Result<T, FrameError>;

/// Error taxonomy for frame parsing, sequence construction and expansion.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    /// A spec string does not match `start<-end<xstep>>`, or has no tokens.
    #[error("malformed spec: {0}")]
    MalformedSpec(String),

    /// A numeric range has a step below 1 or a negative start.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Nothing to build a sequence from.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A hash template without any `#` run.
    #[error("empty template: {0}")]
    EmptyTemplate(String),

    /// A placeholder or token template could not be expanded.
    #[error("template error: {0}")]
    Template(String),

    /// Invalid job frame configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameError {
    /// Build a [`FrameError::MalformedSpec`] value.
    pub fn malformed_spec(msg: impl Into<String>) -> Self {
        Self::MalformedSpec(msg.into())
    }

    /// Build a [`FrameError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`FrameError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`FrameError::EmptyTemplate`] value.
    pub fn empty_template(msg: impl Into<String>) -> Self {
        Self::EmptyTemplate(msg.into())
    }

    /// Build a [`FrameError::Template`] value.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Build a [`FrameError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
