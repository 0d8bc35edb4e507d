use crate::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::str::FromStr;

/// `edns_client_subnet` value that suppresses the option entirely.
pub const SUBNET_DISABLED_SENTINEL: &str = "0.0.0.0/0";

/// Prefix applied to an IPv4 caller address when no subnet is given.
pub const DERIVED_IPV4_PREFIX: u8 = 24;

/// Prefix applied to an IPv6 caller address when no subnet is given.
pub const DERIVED_IPV6_PREFIX: u8 = 36;

/// Address family of the subnet carried in the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// EDNS client-subnet option (RFC 7871) attached to an outgoing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSubnet {
    pub family: AddressFamily,
    pub source_prefix: u8,
    pub scope_prefix: u8,
    /// Base address of the network, already masked to `source_prefix`.
    pub address: IpAddr,
}

impl ClientSubnet {
    pub fn from_network(network: IpNetwork) -> Self {
        let family = if network.is_ipv4() {
            AddressFamily::Ipv4
        } else {
            AddressFamily::Ipv6
        };

        Self {
            family,
            source_prefix: network.prefix(),
            scope_prefix: 0,
            address: network.network(),
        }
    }

    /// Parses an explicit CIDR block such as `198.51.100.0/24`.
    ///
    /// A bare address without a prefix length is not a CIDR block.
    pub fn from_cidr(cidr: &str) -> Result<Self, DomainError> {
        if !cidr.contains('/') {
            return Err(DomainError::InvalidCidr);
        }
        let network = IpNetwork::from_str(cidr).map_err(|_| DomainError::InvalidCidr)?;
        Ok(Self::from_network(network))
    }

    /// Derives a deliberately coarse subnet from the caller's `host:port`
    /// address: /24 for IPv4 (including IPv4-mapped IPv6), /36 for IPv6.
    pub fn from_remote_addr(remote_addr: &str) -> Result<Self, DomainError> {
        let host = split_host(remote_addr).ok_or(DomainError::BadRemoteAddress)?;
        let ip = IpAddr::from_str(host).map_err(|_| DomainError::BadIpAddress)?;

        let network = match ip {
            IpAddr::V4(v4) => IpNetwork::new(IpAddr::V4(v4), DERIVED_IPV4_PREFIX),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => IpNetwork::new(IpAddr::V4(v4), DERIVED_IPV4_PREFIX),
                None => IpNetwork::new(IpAddr::V6(v6), DERIVED_IPV6_PREFIX),
            },
        }
        .map_err(|_| DomainError::BadIpAddress)?;

        Ok(Self::from_network(network))
    }
}

/// Host part of `host:port` or `[host]:port`.
fn split_host(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, port) = rest.split_once("]:")?;
        return (!port.is_empty()).then_some(host);
    }

    let (host, port) = addr.rsplit_once(':')?;
    if host.contains(':') || port.is_empty() {
        return None;
    }
    Some(host)
}
