use async_trait::async_trait;
use hickory_proto::rr::rdata::opt::{ClientSubnet, EdnsCode, EdnsOption};
use revop_application::ports::UpstreamProvider;
use revop_domain::{DnsQuestion, DomainError, QueryParams, ResolveRequest};
use revop_infrastructure::dns::{
    DnsTransport, DnsUpstreamProvider, EndpointPool, TransportResponse, UdpTransport,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod helpers;
use helpers::{MockDnsServer, MockReply};

fn provider_for(addrs: Vec<SocketAddr>, timeout: Duration) -> DnsUpstreamProvider {
    DnsUpstreamProvider::new(
        EndpointPool::new(addrs).unwrap(),
        Arc::new(UdpTransport::new()),
        timeout,
    )
}

fn request(pairs: &[(&str, &str)], remote: &str) -> ResolveRequest {
    let params = QueryParams::from_pairs(pairs.iter().copied());
    ResolveRequest::from_params(&params, Some(remote)).unwrap()
}

#[tokio::test]
async fn test_answer_is_translated() {
    let server = MockDnsServer::start(MockReply::Address(Ipv4Addr::new(93, 184, 216, 34))).await;
    let provider = provider_for(vec![server.addr()], Duration::from_secs(2));

    let response = provider
        .query(&request(&[("name", "example.com")], "192.0.2.1:4000"))
        .await
        .unwrap();

    assert_eq!(response.response_code, 0);
    assert!(response.recursion_available);
    assert_eq!(response.question, vec![DnsQuestion::new("example.com.", 1)]);
    assert_eq!(response.answer.len(), 1);
    assert_eq!(&*response.answer[0].name, "example.com.");
    assert_eq!(response.answer[0].ttl, 60);
    assert_eq!(response.answer[0].data, "93.184.216.34");
}

#[tokio::test]
async fn test_nxdomain_is_not_an_error() {
    let server = MockDnsServer::start(MockReply::NxDomain).await;
    let provider = provider_for(vec![server.addr()], Duration::from_secs(2));

    let response = provider
        .query(&request(&[("name", "nonexistent.invalid")], "192.0.2.1:4000"))
        .await
        .unwrap();

    assert_eq!(response.response_code, 3);
    assert!(response.answer.is_empty());
}

#[tokio::test]
async fn test_query_carries_subnet_and_dnssec_flags() {
    let server = MockDnsServer::start(MockReply::Address(Ipv4Addr::LOCALHOST)).await;
    let provider = provider_for(vec![server.addr()], Duration::from_secs(2));

    provider
        .query(&request(&[("name", "example.com"), ("type", "AAAA")], "198.51.100.77:1234"))
        .await
        .unwrap();

    let received = server.received();
    assert_eq!(received.len(), 1);
    let query = &received[0];
    assert!(query.recursion_desired());
    assert!(!query.checking_disabled());
    assert_eq!(u16::from(query.queries()[0].query_type()), 28);

    let edns = query.extensions().as_ref().expect("EDNS present");
    assert!(edns.dnssec_ok());
    assert_eq!(edns.max_payload(), 4096);
    assert_eq!(
        edns.option(EdnsCode::Subnet),
        Some(&EdnsOption::Subnet(ClientSubnet::new(
            "198.51.100.0".parse().unwrap(),
            24,
            0
        )))
    );
}

#[tokio::test]
async fn test_checking_disabled_query() {
    let server = MockDnsServer::start(MockReply::Address(Ipv4Addr::LOCALHOST)).await;
    let provider = provider_for(vec![server.addr()], Duration::from_secs(2));

    provider
        .query(&request(
            &[("name", "example.com"), ("cd", "true"), ("edns_client_subnet", "0.0.0.0/0")],
            "198.51.100.77:1234",
        ))
        .await
        .unwrap();

    let query = &server.received()[0];
    assert!(query.checking_disabled());
    assert!(query.extensions().is_none());
}

#[tokio::test]
async fn test_silent_upstream_times_out() {
    let server = MockDnsServer::start(MockReply::Silent).await;
    let provider = provider_for(vec![server.addr()], Duration::from_millis(150));

    let err = provider
        .query(&request(&[("name", "example.com")], "192.0.2.1:4000"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UpstreamFailure(_)));
    assert_eq!(server.received().len(), 1);
}

#[tokio::test]
async fn test_mismatched_reply_id_rejected() {
    let server = MockDnsServer::start(MockReply::WrongId).await;
    let provider = provider_for(vec![server.addr()], Duration::from_secs(2));

    let err = provider
        .query(&request(&[("name", "example.com")], "192.0.2.1:4000"))
        .await
        .unwrap_err();

    match err {
        DomainError::UpstreamFailure(msg) => assert!(msg.contains("does not match")),
        other => panic!("unexpected error: {:?}", other),
    }
}

struct RecordingTransport {
    servers: Mutex<Vec<SocketAddr>>,
    reply: fn(&[u8]) -> Vec<u8>,
}

#[async_trait]
impl DnsTransport for RecordingTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.servers.lock().unwrap().push(server);
        Ok(TransportResponse {
            bytes: (self.reply)(message_bytes),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "FAKE"
    }
}

#[tokio::test]
async fn test_one_exchange_per_query_on_selected_endpoint() {
    let addrs: Vec<SocketAddr> = vec![
        "10.0.0.1:53".parse().unwrap(),
        "10.0.0.2:53".parse().unwrap(),
    ];
    let transport = Arc::new(RecordingTransport {
        servers: Mutex::new(Vec::new()),
        reply: |_| vec![0xff],
    });
    let picks = Arc::new(AtomicUsize::new(1));
    let p = picks.clone();
    let pool = EndpointPool::new(addrs.clone())
        .unwrap()
        .with_selector(Arc::new(move |_| p.fetch_add(1, Ordering::SeqCst)));
    let provider = DnsUpstreamProvider::new(pool, transport.clone(), Duration::from_secs(1));

    for _ in 0..2 {
        let err = provider
            .query(&request(&[("name", "example.com")], "192.0.2.1:4000"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UpstreamFailure(_)));
    }

    assert_eq!(*transport.servers.lock().unwrap(), vec![addrs[1], addrs[0]]);
}
