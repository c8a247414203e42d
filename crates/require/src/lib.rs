//! eqcheck-require - fatal semantic equality requirements.
//!
//! Same comparison and failure text as `eqcheck-assert`, but a mismatch also
//! calls [`FatalReporter::fail_now`]. With [`Panicking`] that unwinds out of
//! the test body, so nothing after a failed requirement runs.
//!
//! # Example
//!
//! ```
//! use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
//! use eqcheck_require::{require_not_equal, Recorder};
//!
//! let mut t = Recorder::new();
//! require_not_equal!(t, IpAddr::V4(Ipv4Addr::UNSPECIFIED), IpAddr::V6(Ipv6Addr::UNSPECIFIED));
//! assert!(!t.failed());
//!
//! require_not_equal!(t, IpAddr::V4(Ipv4Addr::UNSPECIFIED), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
//! assert!(t.aborted());
//! ```

use std::fmt::{self, Debug};

use eqcheck_assert::{compare, fail, EqualityError, Expectation};

pub use eqcheck_assert::{Equatable, Panicking, Recorder, Reporter};

/// A [`Reporter`] that can also stop the current test.
pub trait FatalReporter: Reporter {
    /// Aborts the current test. Implementations are expected to unwind;
    /// fakes may just record the request.
    fn fail_now(&mut self);
}

impl<R: FatalReporter + ?Sized> FatalReporter for &mut R {
    #[inline]
    fn fail_now(&mut self) {
        (**self).fail_now();
    }
}

impl FatalReporter for Recorder {
    fn fail_now(&mut self) {
        Recorder::fail_now(self);
    }
}

impl FatalReporter for Panicking {
    fn fail_now(&mut self) {
        Panicking::fail_now(self)
    }
}

/// Requires that `expected` and `actual` are semantically equal, aborting the
/// test through `t` otherwise.
pub fn equal<T, R>(t: &mut R, expected: &T, actual: &T, msg: Option<fmt::Arguments<'_>>)
where
    T: Equatable + Debug + ?Sized,
    R: FatalReporter + ?Sized,
{
    enforce(t, compare(Expectation::Equal, expected, actual), msg);
}

/// Requires that `expected` and `actual` are not semantically equal.
pub fn not_equal<T, R>(t: &mut R, expected: &T, actual: &T, msg: Option<fmt::Arguments<'_>>)
where
    T: Equatable + Debug + ?Sized,
    R: FatalReporter + ?Sized,
{
    enforce(t, compare(Expectation::NotEqual, expected, actual), msg);
}

fn enforce<R>(t: &mut R, outcome: Result<(), EqualityError>, msg: Option<fmt::Arguments<'_>>)
where
    R: FatalReporter + ?Sized,
{
    if let Err(failure) = outcome {
        fail(t, &failure, msg);
        log::debug!("requirement failed, aborting test");
        t.fail_now();
    }
}

/// Requires semantic equality; aborts the test on mismatch.
///
/// `require_equal!(t, expected, actual)` or
/// `require_equal!(t, expected, actual, "format", args...)`.
#[macro_export]
macro_rules! require_equal {
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

/// Requires semantic inequality; aborts the test on a match.
#[macro_export]
macro_rules! require_not_equal {
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
