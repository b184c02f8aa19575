//! Manually managed runtime primitives.
//!
//! Three small building blocks that own their memory explicitly:
//!
//! - [`DynArray`], a growable array of non-owned [`Handle`]s with amortized
//!   doubling growth,
//! - [`OwnedString`], an owned, sentinel-terminated byte string,
//! - [`ErrorResult`], a success payload or a [`Diagnostic`] carrying a text
//!   code, returned by fallible accessors such as [`OwnedString::char_at`].
//!
//! ```rust
//! use oxyrt::{DynArray, OwnedString, NO_ERROR};
//!
//! let mut s = OwnedString::from("hi");
//! s.append(b" world!");
//! assert_eq!(s, "hi world!");
//!
//! let at = s.char_at(3);
//! assert_eq!(at.diagnostic(), NO_ERROR);
//! assert_eq!(at.payload(), Some(&&b'w'));
//!
//! let (a, b, c) = (1u32, 2u32, 3u32);
//! let mut arr = DynArray::new();
//! arr.extend([&a, &b, &c]);
//! arr.remove(&b).unwrap();
//! assert_eq!(arr.as_slice(), &[&a, &c]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod report;

mod array;
mod error;
mod handle;
mod options;
mod raw_buf;
mod replacement;
mod result;
mod string;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use array::DynArray;
pub use error::{Diagnostic, NotFound};
pub use handle::Handle;
pub use options::{ArrayOptions, DEFAULT_INITIAL_CAPACITY};
pub use replacement::{ReplacementNode, ReplacementTable};
pub use result::{ErrorResult, NO_ERROR};
pub use string::OwnedString;
