use thiserror::Error as ThisError;

/// Enum listing possible errors from mysqltuner.
#[derive(ThisError, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The error message.
    #[error("{0}")]
    Message(String),
    /// An any errors.
    #[error("AnyError")]
    AnyError,
}

/// Change the error returned when a connection fails.
///
/// The full failure message is always kept in
/// [`MySqlServer::last_error`](crate::MySqlServer::last_error); the level only
/// decides what the returned [`Error`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorLevel {
    /// No error returned, always return `Result::Ok(())`.
    /// Failures are only visible through `last_error`.
    AlwaysOk,
    /// This is the level that should be set at release.
    Release,
    /// This is the level that should be set during development.
    Develop,

    #[cfg(debug_assertions)]
    /// Also include the client library's message.
    /// &#x26a0;&#xfe0f; **Not available when Release build**
    Debug,
}

impl Default for ErrorLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ErrorLevel::Develop
        } else {
            ErrorLevel::Release
        }
    }
}

pub(crate) const CONNECT_FAILED: &str = "cannot connect to MySQL server";

impl ErrorLevel {
    /// What `open` returns after a failed connect, `cause` being the client library's message.
    #[allow(unused_variables)]
    pub(crate) fn connect_failure(&self, cause: &str) -> Result<(), Error> {
        match self {
            ErrorLevel::AlwaysOk => Ok(()),
            ErrorLevel::Release  => Err(Error::AnyError),
            ErrorLevel::Develop  => Err(Error::Message(CONNECT_FAILED.to_string())),
            #[cfg(debug_assertions)]
            ErrorLevel::Debug    => Err(Error::Message(format!("{}: {}", CONNECT_FAILED, cause))),
        }
    }
}
