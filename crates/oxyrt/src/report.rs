/// Reports a non-fatal diagnostic line on stderr, prefixed with the
/// component that raised it.
///
/// Compiles to nothing without the `std` feature; arguments are still
/// type-checked.
macro_rules! report {
    ($component:literal, $($arg:tt)+) => {{
        #[cfg(feature = "std")]
        {
            ::std::eprintln!("[{}]: {}", $component, ::core::format_args!($($arg)+));
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}
