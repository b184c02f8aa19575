use bstr::BStr;
use thiserror::Error;

use crate::OwnedString;

/// Why a fallible [`OwnedString`] operation did not produce its payload.
///
/// Every diagnostic has a text [`code`](Diagnostic::code), which is what
/// [`ErrorResult::diagnostic`](crate::ErrorResult::diagnostic) reports.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// An index was not below the length of the string it addressed.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length at the time of the request.
        len: usize,
    },
    /// A caller-defined failure, identified only by its text.
    #[error("{0}")]
    Custom(OwnedString),
}

impl Diagnostic {
    /// Code reported for [`Diagnostic::IndexOutOfBounds`].
    pub const INDEX_OUT_OF_BOUNDS: &'static str = "IndexOutOfBounds";

    /// Builds a [`Diagnostic::Custom`] from text.
    #[must_use]
    pub fn custom(text: impl AsRef<[u8]>) -> Self {
        Self::Custom(OwnedString::new(text.as_ref()))
    }

    /// The text code identifying this failure.
    #[must_use]
    pub fn code(&self) -> &BStr {
        match self {
            Self::IndexOutOfBounds { .. } => BStr::new(Self::INDEX_OUT_OF_BOUNDS),
            Self::Custom(text) => text.as_bstr(),
        }
    }
}

/// The handle passed to [`DynArray::remove`](crate::DynArray::remove) is not
/// stored in the array.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("element not found in array")]
pub struct NotFound;
