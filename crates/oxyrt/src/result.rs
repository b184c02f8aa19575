//! Exception-free failure signaling.
//!
//! An [`ErrorResult`] is either a payload or a [`Diagnostic`], never both.
//! Callers that follow the text protocol compare
//! [`diagnostic`](ErrorResult::diagnostic) against [`NO_ERROR`]; the payload
//! is only reachable through [`payload`](ErrorResult::payload) when the
//! operation succeeded.
use bstr::BStr;

use crate::Diagnostic;

/// The diagnostic text reported by a successful [`ErrorResult`].
pub const NO_ERROR: &str = "NoError";

/// The outcome of a fallible operation: a success payload or a diagnostic.
///
/// # Examples
///
/// ```rust
/// use oxyrt::{Diagnostic, ErrorResult, NO_ERROR};
///
/// let ok = ErrorResult::success(42);
/// assert_eq!(ok.diagnostic(), NO_ERROR);
/// assert_eq!(ok.payload(), Some(&42));
///
/// let failed: ErrorResult<i32> = ErrorResult::failure(Diagnostic::custom("Overflow"));
/// assert_eq!(failed.diagnostic(), "Overflow");
/// assert_eq!(failed.payload(), None);
/// ```
#[must_use = "an ErrorResult may hold a diagnostic that should be inspected"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorResult<T> {
    /// The operation produced its payload.
    Success(T),
    /// The operation failed.
    Failure(Diagnostic),
}

impl<T> ErrorResult<T> {
    /// A successful result carrying `payload`.
    pub fn success(payload: T) -> Self {
        Self::Success(payload)
    }

    /// A failed result carrying `diagnostic`.
    pub fn failure(diagnostic: Diagnostic) -> Self {
        Self::Failure(diagnostic)
    }

    /// Returns `true` if this is a [`Success`](ErrorResult::Success).
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a [`Failure`](ErrorResult::Failure).
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The payload, if the operation succeeded.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the result, returning the payload if the operation succeeded.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// The diagnostic, if the operation failed.
    #[must_use]
    pub fn error(&self) -> Option<&Diagnostic> {
        match self {
            Self::Success(_) => None,
            Self::Failure(diagnostic) => Some(diagnostic),
        }
    }

    /// The diagnostic text: [`NO_ERROR`] on success, otherwise the
    /// diagnostic's [`code`](Diagnostic::code).
    #[must_use]
    pub fn diagnostic(&self) -> &BStr {
        match self {
            Self::Success(_) => BStr::new(NO_ERROR),
            Self::Failure(diagnostic) => diagnostic.code(),
        }
    }

    /// Maps the payload, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ErrorResult<U> {
        match self {
            Self::Success(payload) => ErrorResult::Success(f(payload)),
            Self::Failure(diagnostic) => ErrorResult::Failure(diagnostic),
        }
    }

    /// Converts into a standard [`Result`] so that `?` can propagate the
    /// diagnostic.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic if the operation failed.
    pub fn into_result(self) -> Result<T, Diagnostic> {
        self.into()
    }
}

impl<T> From<ErrorResult<T>> for Result<T, Diagnostic> {
    fn from(value: ErrorResult<T>) -> Self {
        match value {
            ErrorResult::Success(payload) => Ok(payload),
            ErrorResult::Failure(diagnostic) => Err(diagnostic),
        }
    }
}

impl<T> From<Result<T, Diagnostic>> for ErrorResult<T> {
    fn from(value: Result<T, Diagnostic>) -> Self {
        match value {
            Ok(payload) => Self::Success(payload),
            Err(diagnostic) => Self::Failure(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorResult, NO_ERROR};
    use crate::Diagnostic;

    #[test]
    fn success_exposes_payload() {
        let r = ErrorResult::success('x');
        assert!(r.is_success());
        assert_eq!(r.diagnostic(), NO_ERROR);
        assert_eq!(r.error(), None);
        assert_eq!(r.into_payload(), Some('x'));
    }

    #[test]
    fn failure_hides_payload() {
        let r: ErrorResult<&u8> =
            ErrorResult::failure(Diagnostic::IndexOutOfBounds { index: 3, len: 3 });
        assert!(r.is_failure());
        assert_eq!(r.payload(), None);
        assert_eq!(r.diagnostic(), "IndexOutOfBounds");
        assert!(matches!(
            r.error(),
            Some(Diagnostic::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn failure_with_no_error_text_is_still_a_failure() {
        let r: ErrorResult<()> = ErrorResult::failure(Diagnostic::custom(NO_ERROR));
        assert_eq!(r.diagnostic(), NO_ERROR);
        assert!(r.is_failure());
    }

    #[test]
    fn map_and_result_conversions() {
        let r = ErrorResult::success(2).map(|n| n * 10);
        assert_eq!(r.into_result(), Ok(20));
        let back: ErrorResult<i32> = Err(Diagnostic::custom("E")).into();
        assert_eq!(back.diagnostic(), "E");
        assert_eq!(
            back.map(|n| n + 1).into_result(),
            Err(Diagnostic::custom("E"))
        );
    }
}
