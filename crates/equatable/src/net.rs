use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::Equatable;

/// Addresses compare by their canonical form, so an IPv4 address equals its
/// IPv4-mapped IPv6 encoding. The unspecified IPv4 address and `::` differ.
impl Equatable for IpAddr {
    fn equal(&self, other: &Self) -> bool {
        self.to_canonical() == other.to_canonical()
    }
}

/// Same rule as [`IpAddr`] for the address; ports must match exactly.
/// Flow info and scope id are ignored.
impl Equatable for SocketAddr {
    fn equal(&self, other: &Self) -> bool {
        self.port() == other.port() && self.ip().equal(&other.ip())
    }
}

crate::impl_equatable_via_eq!(Ipv4Addr, Ipv6Addr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_equals_mapped_form() {
        let short = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        let mapped = IpAddr::V6(Ipv4Addr::UNSPECIFIED.to_ipv6_mapped());
        assert!(short.equal(&mapped));
        assert!(mapped.equal(&short));
    }

    #[test]
    fn test_ipv4_zero_differs_from_ipv6_zero() {
        let v4 = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        let v6 = IpAddr::V6(Ipv6Addr::UNSPECIFIED);
        assert!(!v4.equal(&v6));
    }

    #[test]
    fn test_socket_addr_port_matters() {
        let a: SocketAddr = "127.0.0.1:80".parse().unwrap();
        let b: SocketAddr = "[::ffff:127.0.0.1]:80".parse().unwrap();
        let c: SocketAddr = "127.0.0.1:81".parse().unwrap();
        assert!(a.equal(&b));
        assert!(!a.equal(&c));
    }
}
