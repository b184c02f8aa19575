//! Owned, sentinel-terminated byte strings.
//!
//! An [`OwnedString`] keeps its content in an exactly sized buffer followed
//! by a single `0` byte, and caches the content length. Input is read up to
//! its first `0` byte, so the content itself never contains the sentinel
//! and [`OwnedString::as_c_str`] is always valid.
//!
//! Content is treated as bytes. Nothing here assumes UTF-8; `Display` and
//! `Debug` go through [`bstr`], which substitutes U+FFFD for invalid
//! sequences.
use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};

use bstr::{BStr, ByteSlice};

use crate::{Diagnostic, ErrorResult, raw_buf::RawBuf};

const SENTINEL: u8 = 0;

/// The part of `bytes` before its first sentinel byte.
fn until_sentinel(bytes: &[u8]) -> &[u8] {
    match bytes.find_byte(SENTINEL) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// An owned, growable byte string stored in a sentinel-terminated buffer.
///
/// Every instance owns its buffer; [`Clone`] copies it.
///
/// # Examples
///
/// ```rust
/// use oxyrt::OwnedString;
///
/// let mut s = OwnedString::new(b"hi");
/// s.append(b" world!");
/// assert_eq!(s.len(), 9);
/// assert_eq!(s.as_bytes(), b"hi world!");
/// assert!(s.equals(b"hi world!"));
/// assert_eq!(s.char_at(9).diagnostic(), "IndexOutOfBounds");
/// ```
pub struct OwnedString {
    /// `len` content bytes, then the sentinel. Capacity is exactly `len + 1`.
    buf: RawBuf<u8>,
    len: usize,
}

impl OwnedString {
    /// Copies `bytes`, up to the first `0` byte if there is one, into a new
    /// string.
    #[must_use]
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_content(until_sentinel(bytes.as_ref()))
    }

    /// Builds a string from content already known to be sentinel-free.
    fn from_content(content: &[u8]) -> Self {
        debug_assert!(content.find_byte(SENTINEL).is_none());
        let len = content.len();
        let mut buf = RawBuf::copy_from(content, len + 1);
        buf.write(len, SENTINEL);
        Self { buf, len }
    }

    /// Number of content bytes, excluding the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string has no content bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A view of the content, excluding the sentinel.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: the first `len` bytes are always written.
        unsafe { self.buf.slice(self.len) }
    }

    /// A view of the content followed by the sentinel.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // SAFETY: the buffer holds exactly `len + 1` written bytes.
        unsafe { self.buf.slice(self.len + 1) }
    }

    /// The buffer as a C string.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: the buffer ends with the only sentinel it contains.
        unsafe { CStr::from_bytes_with_nul_unchecked(self.as_bytes_with_nul()) }
    }

    /// The content as a [`BStr`].
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Appends `bytes`, up to their first `0` byte, to the end of the
    /// string.
    ///
    /// The string moves to a new buffer of exactly the combined size and the
    /// previous buffer is released. Appending nothing leaves the buffer
    /// alone.
    ///
    /// ```rust
    /// use oxyrt::OwnedString;
    ///
    /// let mut s = OwnedString::new("a");
    /// s.append("b").append("c");
    /// assert_eq!(s, "abc");
    /// ```
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        let extra = until_sentinel(bytes.as_ref());
        if extra.is_empty() {
            return self;
        }

        // Both lengths fit in `isize`, so neither addition can wrap; the
        // allocator rejects sizes above `isize::MAX`.
        let len = self.len + extra.len();
        let mut buf = RawBuf::copy_from(self.as_bytes(), len + 1);
        buf.write_slice(self.len, extra);
        buf.write(len, SENTINEL);

        self.buf = buf;
        self.len = len;
        self
    }

    /// Replaces the content with `bytes`, up to their first `0` byte,
    /// releasing the previous buffer.
    pub fn assign(&mut self, bytes: impl AsRef<[u8]>) {
        *self = Self::new(bytes);
    }

    /// Bounds-checked access to the byte at `index`.
    ///
    /// Succeeds for `index < len()`. Any larger index yields
    /// [`Diagnostic::IndexOutOfBounds`] and no payload.
    pub fn char_at(&self, index: usize) -> ErrorResult<&u8> {
        match self.as_bytes().get(index) {
            Some(byte) => ErrorResult::success(byte),
            None => ErrorResult::failure(Diagnostic::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Panics unless the buffer holds exactly the content followed by a
    /// single sentinel.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self) {
        assert_eq!(self.buf.capacity(), self.len + 1, "buffer is not exact");
        assert_eq!(
            self.as_bytes_with_nul().find_byte(SENTINEL),
            Some(self.len),
            "sentinel is not the last byte"
        );
    }

    /// Whether the content equals `bytes` up to their first `0` byte.
    ///
    /// This is the comparison that matches [`OwnedString::new`]: for any
    /// input `x`, `OwnedString::new(x).equals(x)` holds. Bytes after the
    /// candidate's first `0` are not part of it, so `"ab"` equals
    /// `b"ab\0cd"` even though the two slices differ in length. Without a
    /// `0` in the candidate, strings of different lengths never compare
    /// equal. For an exact comparison use `==`.
    ///
    /// ```rust
    /// use oxyrt::OwnedString;
    ///
    /// let s = OwnedString::new("ab");
    /// assert!(s.equals(b"ab\0cd"));
    /// assert!(!s.equals("abc"));
    /// assert_ne!(s, b"ab\0cd");
    /// ```
    #[must_use]
    pub fn equals(&self, bytes: impl AsRef<[u8]>) -> bool {
        self.as_bytes() == until_sentinel(bytes.as_ref())
    }
}

impl Default for OwnedString {
    fn default() -> Self {
        Self::from_content(b"")
    }
}

impl Clone for OwnedString {
    fn clone(&self) -> Self {
        Self::from_content(self.as_bytes())
    }
}

impl fmt::Debug for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl AsRef<[u8]> for OwnedString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for OwnedString {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<&str> for OwnedString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&CStr> for OwnedString {
    fn from(value: &CStr) -> Self {
        Self::from_content(value.to_bytes())
    }
}

impl PartialEq for OwnedString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for OwnedString {}

impl PartialEq<[u8]> for OwnedString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for OwnedString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for OwnedString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for OwnedString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for OwnedString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for OwnedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for OwnedString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OwnedString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for OwnedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
