//! [`Error`]-related definitions.

use std::fmt;

use common::define_kind;
use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::infra::database;
use tracerr::{Trace, Traced};

/// Defines a new error type convertible into an [`Error`].
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[kind = $kind:ident]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            kind: $crate::error::Kind::$kind,
                            message: $message.to_owned(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

define_kind! {
    #[doc = "Kind of an [`Error`]."]
    enum Kind {
        #[doc = "First token of a line is not a known command."]
        UnknownCommand = 1,

        #[doc = "Provided token doesn't grant super-user rights."]
        Unauthorized = 2,

        #[doc = "Referenced entity doesn't exist."]
        NotFound = 3,

        #[doc = "Arguments are missing, redundant or malformed."]
        InvalidArgument = 4,

        #[doc = "Entity is not in a state allowing the operation."]
        PreconditionFailed = 5,

        #[doc = "Unexpected failure of the registry itself."]
        Internal = 6,
    }
}

/// Console [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Kind`] of this [`Error`].
    pub kind: Kind,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Creates a new [`Error`] of the provided [`Kind`].
    #[must_use]
    pub fn new(kind: Kind, msg: &impl ToString) -> Self {
        Self {
            kind,
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Creates a new [`Error`] representing an internal failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self::new(Kind::Internal, msg)
    }

    /// Creates a new [`Error`] representing a lack of super-user rights.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(Kind::Unauthorized, &"Super-user rights required")
    }

    /// Returns a [`Display`]able rendering of this [`Error`] along with its
    /// backtrace, if any.
    ///
    /// [`Display`]: fmt::Display
    #[must_use]
    pub fn with_backtrace(&self) -> impl fmt::Display + '_ {
        struct Detailed<'e>(&'e Error);

        impl fmt::Display for Detailed<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}{}",
                    self.0,
                    self.0
                        .backtrace
                        .iter()
                        .format_with("", |t, f| f(&format_args!("\n{t}"))),
                )
            }
        }

        Detailed(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            backtrace: _,
            message,
        } = self;

        write!(f, "[{kind}]: {message}")
    }
}

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError + fmt::Display> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().as_error();
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

#[cfg(test)]
mod spec {
    use super::{AsError as _, Error, Kind};

    define_error! {
        enum Sample {
            #[kind = NotFound]
            #[message = "Owner not found"]
            OwnerNotFound,
        }
    }

    #[test]
    fn displays_kind_and_message() {
        let err = Error::from(Sample::OwnerNotFound);

        assert_eq!(err.kind, Kind::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND]: Owner not found");
        assert_eq!(
            Error::unauthorized().to_string(),
            "[UNAUTHORIZED]: Super-user rights required",
        );
    }

    #[test]
    fn falls_back_to_internal() {
        let err = tracerr::new!(service::infra::database::Error::from(
            service::infra::memory::Error::Committed,
        ))
        .into_error();

        assert_eq!(err.kind, Kind::Internal);
        assert!(err.backtrace.is_some());
        assert!(err.to_string().starts_with("[INTERNAL]: "));
    }
}
