use std::{fmt, io};

/// [`Result`][std::result::Result] alias for [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that can occur while building or rendering a view.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved view file does not exist.
    #[error("the `{name}` view does not exist (resolved to `{path}`)")]
    NotFound { name: String, path: String },

    /// A view was used in a state that does not allow the operation, e.g. nested sections.
    #[error("{0}")]
    Logic(String),

    /// A dynamic call that is neither a macro nor a `with` accessor.
    #[error("method {ty}::{method} does not exist")]
    UnknownMethod { method: String, ty: &'static str },

    /// Invalid argument given to a helper.
    #[error("{0}")]
    InvalidArgument(String),

    /// Reading a data key that was never set.
    #[error("undefined view data `{0}`")]
    Undefined(String),

    /// Rendering a view that has no template bound.
    #[error("no template bound to this view")]
    Unbound,

    /// Views extending or including each other too deep, usually a cycle.
    #[error("view `{name}` exceeded the render depth of {depth}, does it extend itself?")]
    Recursion { name: String, depth: usize },

    /// Failure raised by a template body.
    #[error(transparent)]
    Body(Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

impl Error {
    /// Create a [`Error::Body`] from any error or message.
    pub fn body(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Body(err.into())
    }

    /// Convert error to [`io::Error`].
    ///
    /// Non io errors will become [`io::ErrorKind::Other`].
    pub fn into_io(self) -> io::Error {
        match self {
            Error::Io(error) => error,
            error => io::Error::other(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Failing;

    impl fmt::Write for Failing {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn write_failing() -> Result<()> {
        fmt::Write::write_str(&mut Failing, "x")?;
        Ok(())
    }

    #[test]
    fn fmt_error_kept() {
        let err = write_failing().unwrap_err();
        assert!(matches!(err, Error::Fmt(fmt::Error)));
        assert!(matches!(err.into_io().kind(), io::ErrorKind::Other));
    }
}
