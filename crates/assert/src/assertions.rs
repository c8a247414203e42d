use std::fmt::{self, Debug};

use eqcheck_equatable::Equatable;

use crate::compare::{compare, fail, EqualityError, Expectation};
use crate::reporter::Reporter;

/// Asserts that `expected` and `actual` are semantically equal.
///
/// On mismatch the failure, followed by `msg` when given, is recorded on `t`
/// and `false` is returned. Execution always continues.
pub fn equal<T, R>(t: &mut R, expected: &T, actual: &T, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Equatable + Debug + ?Sized,
    R: Reporter + ?Sized,
{
    report(t, compare(Expectation::Equal, expected, actual), msg)
}

/// Asserts that `expected` and `actual` are not semantically equal.
pub fn not_equal<T, R>(t: &mut R, expected: &T, actual: &T, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Equatable + Debug + ?Sized,
    R: Reporter + ?Sized,
{
    report(t, compare(Expectation::NotEqual, expected, actual), msg)
}

/// Like [`equal`], for tests that return `Result` and propagate with `?`.
pub fn check_equal<T>(expected: &T, actual: &T) -> Result<(), EqualityError>
where
    T: Equatable + Debug + ?Sized,
{
    compare(Expectation::Equal, expected, actual)
}

/// Like [`not_equal`], for tests that return `Result` and propagate with `?`.
pub fn check_not_equal<T>(expected: &T, actual: &T) -> Result<(), EqualityError>
where
    T: Equatable + Debug + ?Sized,
{
    compare(Expectation::NotEqual, expected, actual)
}

fn report<R>(t: &mut R, outcome: Result<(), EqualityError>, msg: Option<fmt::Arguments<'_>>) -> bool
where
    R: Reporter + ?Sized,
{
    match outcome {
        Ok(()) => true,
        Err(failure) => {
            fail(t, &failure, msg);
            false
        }
    }
}
