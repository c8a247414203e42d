//! eqcheck-assert - non-fatal semantic equality assertions.
//!
//! Compares values through [`Equatable`] instead of `PartialEq`, so two
//! representations of the same value (an IPv4 address and its mapped IPv6
//! form, one instant in two offsets, `1e1` and `10`) pass. A mismatch is
//! recorded on the injected [`Reporter`] and the assertion returns `false`;
//! the test body keeps running.
//!
//! For assertions that stop the test on failure see `eqcheck-require`.
//!
//! # Example
//!
//! ```
//! use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
//! use eqcheck_assert::{assert_equal, Recorder};
//!
//! let mut t = Recorder::new();
//! let v4 = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
//!
//! assert!(assert_equal!(t, v4, IpAddr::V6(Ipv4Addr::UNSPECIFIED.to_ipv6_mapped())));
//! assert!(!assert_equal!(t, v4, IpAddr::V6(Ipv6Addr::UNSPECIFIED), "resolving {}", "localhost"));
//!
//! assert_eq!(t.messages().len(), 1);
//! assert!(t.messages()[0].contains("Messages: resolving localhost"));
//! ```

mod assertions;
mod compare;
mod reporter;

pub use assertions::{check_equal, check_not_equal, equal, not_equal};
pub use compare::{EqualityError, Expectation};
pub use eqcheck_equatable::Equatable;
pub use reporter::{Panicking, Recorder, Reporter};

#[doc(hidden)]
pub use compare::{compare, fail};

/// Asserts semantic equality; evaluates to `true` on success.
///
/// `assert_equal!(t, expected, actual)` or
/// `assert_equal!(t, expected, actual, "format", args...)`. The reporter and
/// both values are borrowed.
#[macro_export]
macro_rules! assert_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equal(&mut $t, &$expected, &$actual, ::core::option::Option::None)
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::equal(
            &mut $t,
            &$expected,
            &$actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts semantic inequality; evaluates to `true` on success.
#[macro_export]
macro_rules! assert_not_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_equal(&mut $t, &$expected, &$actual, ::core::option::Option::None)
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_equal(
            &mut $t,
            &$expected,
            &$actual,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
