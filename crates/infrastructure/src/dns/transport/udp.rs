//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) on a socket connected to the
//! server, so the kernel drops datagrams from any other source. Replies
//! are read into a buffer sized for EDNS(0). Truncated replies are
//! returned unchanged; there is no TCP retry.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use revop_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    async fn exchange(
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to bind UDP socket: {}", e))
        })?;

        socket.connect(server).await.map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to connect UDP socket to {}: {}", server, e))
        })?;

        let bytes_sent = socket.send(message_bytes).await.map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
            DomainError::UpstreamFailure(format!(
                "failed to receive UDP response from {}: {}",
                server, e
            ))
        })?;

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received = bytes_received, "UDP response received");

        Ok(TransportResponse { bytes: recv_buf })
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        tokio::time::timeout(timeout, Self::exchange(server, message_bytes))
            .await
            .map_err(|_| {
                DomainError::UpstreamFailure(format!(
                    "timeout waiting for UDP response from {}",
                    server
                ))
            })?
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
