use crate::Equatable;

impl<T: Equatable + ?Sized> Equatable for &T {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        T::equal(*self, *other)
    }
}

impl<T: Equatable + ?Sized> Equatable for Box<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        T::equal(&**self, &**other)
    }
}

/// `None` equals `None`; `Some` values compare with their own rule.
impl<T: Equatable> Equatable for Option<T> {
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equal(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Equatable> Equatable for [T] {
    fn equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other).all(|(a, b)| a.equal(b))
    }
}

impl<T: Equatable> Equatable for Vec<T> {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.as_slice().equal(other.as_slice())
    }
}

impl<T: Equatable, const N: usize> Equatable for [T; N] {
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.as_slice().equal(other.as_slice())
    }
}

impl<A: Equatable, B: Equatable> Equatable for (A, B) {
    fn equal(&self, other: &Self) -> bool {
        self.0.equal(&other.0) && self.1.equal(&other.1)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use super::*;

    fn v4_zero() -> IpAddr {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }

    fn v4_zero_mapped() -> IpAddr {
        IpAddr::V6(Ipv4Addr::UNSPECIFIED.to_ipv6_mapped())
    }

    #[test]
    fn test_option() {
        assert!(None::<IpAddr>.equal(&None));
        assert!(Some(v4_zero()).equal(&Some(v4_zero_mapped())));
        assert!(!Some(v4_zero()).equal(&None));
        assert!(!None::<IpAddr>.equal(&Some(v4_zero())));
    }

    #[test]
    fn test_vec_uses_element_rule() {
        let a = vec![v4_zero(), IpAddr::V6(Ipv6Addr::LOCALHOST)];
        let b = vec![v4_zero_mapped(), IpAddr::V6(Ipv6Addr::LOCALHOST)];
        assert!(a.equal(&b));
        assert!(a != b);
    }

    #[test]
    fn test_slice_length_mismatch() {
        let a = [1u8, 2, 3];
        assert!(!a[..].equal(&a[..2]));
        assert!(Vec::<u8>::new().equal(&Vec::new()));
    }

    #[test]
    fn test_array_and_tuple() {
        assert!([v4_zero()].equal(&[v4_zero_mapped()]));
        assert!((v4_zero(), 80u16).equal(&(v4_zero_mapped(), 80)));
        assert!(!(v4_zero(), 80u16).equal(&(v4_zero_mapped(), 81)));
    }

    #[test]
    fn test_references_and_boxes() {
        let a = v4_zero();
        let b = v4_zero_mapped();
        assert!(<&IpAddr as Equatable>::equal(&&a, &&b));
        assert!(Box::new(a).equal(&Box::new(b)));
    }
}
