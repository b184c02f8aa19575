use core::ptr::{self, NonNull};

/// An opaque element handle stored by [`DynArray`](crate::DynArray).
///
/// Handles are `Copy`, so the array never runs a destructor for them: the
/// referent's lifetime stays the caller's business. Two handles are
/// [`same`](Handle::same) when they identify the same referent, which for
/// references and pointers means the same address, not equal contents.
///
/// ```rust
/// use oxyrt::Handle;
///
/// let (x, y) = (5, 5);
/// assert!((&x).same(&x));
/// assert!(!(&x).same(&y));
/// assert!(7usize.same(7));
/// ```
pub trait Handle: Copy {
    /// Whether `self` and `other` identify the same referent.
    fn same(self, other: Self) -> bool;
}

impl<T: ?Sized> Handle for &T {
    #[inline]
    fn same(self, other: Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T: ?Sized> Handle for *const T {
    #[inline]
    fn same(self, other: Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T: ?Sized> Handle for *mut T {
    #[inline]
    fn same(self, other: Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T: ?Sized> Handle for NonNull<T> {
    #[inline]
    fn same(self, other: Self) -> bool {
        ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

macro_rules! id_handle {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Handle for $ty {
                #[inline]
                fn same(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

// Integer ids are handles into some caller-owned table.
id_handle!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
