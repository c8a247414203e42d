//! eqcheck-equatable - the semantic equality capability.
//!
//! A type is [`Equatable`] when it can answer "is this value the same as that
//! one" under its own rules, which may be looser than structural `==`:
//!
//! - an IPv4 address equals its IPv4-mapped IPv6 form,
//! - two timestamps in different offsets are equal when they denote the same
//!   instant (feature `chrono`),
//! - two decimals with different scale are equal when their numeric value is
//!   (feature `bigdecimal`).
//!
//! The assertion crates are generic over this trait and never look at the
//! concrete type.
//!
//! # Example
//!
//! ```
//! use std::net::{IpAddr, Ipv4Addr};
//! use eqcheck_equatable::Equatable;
//!
//! let short = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
//! let mapped = IpAddr::V6(Ipv4Addr::UNSPECIFIED.to_ipv6_mapped());
//!
//! assert!(short.equal(&mapped));
//! assert_ne!(short, mapped);
//! ```

mod composite;
#[cfg(feature = "chrono")]
mod datetime;
#[cfg(feature = "bigdecimal")]
mod decimal;
mod net;
mod time;

/// Values that define their own notion of sameness.
///
/// Implementations should be reflexive (`a.equal(&a)` holds). Nothing checks
/// this; a non-reflexive implementation is a bug in the implementing type.
pub trait Equatable {
    /// Returns `true` when `self` and `other` denote the same value.
    fn equal(&self, other: &Self) -> bool;

    #[inline]
    fn not_equal(&self, other: &Self) -> bool {
        !self.equal(other)
    }
}

/// Implements [`Equatable`] for each listed type by delegating to `PartialEq`.
///
/// ```
/// use eqcheck_equatable::{impl_equatable_via_eq, Equatable};
///
/// #[derive(PartialEq)]
/// struct Port(u16);
///
/// impl_equatable_via_eq!(Port);
///
/// assert!(Port(80).equal(&Port(80)));
/// ```
#[macro_export]
macro_rules! impl_equatable_via_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Equatable for $ty {
                #[inline]
                fn equal(&self, other: &Self) -> bool {
                    ::core::cmp::PartialEq::eq(self, other)
                }
            }
        )+
    };
}

// Floats are left out: `NaN != NaN` breaks reflexivity.
impl_equatable_via_eq!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, str, String,
);

#[cfg(test)]
mod tests {
    use super::*;

    struct Parity(u32);

    impl Equatable for Parity {
        fn equal(&self, other: &Self) -> bool {
            self.0 % 2 == other.0 % 2
        }
    }

    #[test]
    fn test_custom_implementation() {
        assert!(Parity(1).equal(&Parity(7)));
        assert!(!Parity(1).equal(&Parity(2)));
    }

    #[test]
    fn test_not_equal_is_negation() {
        assert!(Parity(1).not_equal(&Parity(2)));
        assert!(!Parity(4).not_equal(&Parity(0)));
    }

    #[test]
    fn test_primitives_delegate_to_partial_eq() {
        assert!(42u64.equal(&42));
        assert!(!'a'.equal(&'b'));
        assert!("abc".equal("abc"));
        assert!(String::from("x").not_equal(&String::from("y")));
    }
}
