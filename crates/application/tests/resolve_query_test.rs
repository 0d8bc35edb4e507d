mod helpers;

use helpers::MockUpstreamProvider;
use revop_application::use_cases::ResolveQueryUseCase;
use revop_domain::{DnsQuestion, DnsResponse, DnsRr, DomainError, QueryParams};
use std::sync::Arc;

const REMOTE: Option<&str> = Some("198.51.100.23:33333");

fn answer_response() -> DnsResponse {
    DnsResponse {
        recursion_desired: true,
        recursion_available: true,
        question: vec![DnsQuestion::new("example.com.", 1)],
        answer: vec![DnsRr::new("example.com.", 1, 300, "93.184.216.34")],
        ..Default::default()
    }
}

fn make_use_case(provider: &MockUpstreamProvider) -> ResolveQueryUseCase {
    ResolveQueryUseCase::new(Arc::new(provider.clone()))
}

#[tokio::test]
async fn test_execute_forwards_built_question() {
    let provider = MockUpstreamProvider::responding(answer_response());
    let use_case = make_use_case(&provider);
    let params = QueryParams::from_pairs([("name", "example.com"), ("type", "aaaa"), ("cd", "1")]);

    let resolved = use_case.execute(&params, REMOTE).await.unwrap();

    let received = provider.received();
    assert_eq!(received.len(), 1);
    assert_eq!(&*received[0].question.name, "example.com");
    assert_eq!(received[0].question.record_type, 28);
    assert!(received[0].checking_disabled);
    assert_eq!(received[0].client_subnet.unwrap().source_prefix, 24);
    assert_eq!(resolved.request, received[0]);
    assert_eq!(resolved.response, answer_response());
}

#[tokio::test]
async fn test_execute_validation_error_skips_provider() {
    let provider = MockUpstreamProvider::responding(answer_response());
    let use_case = make_use_case(&provider);
    let params = QueryParams::from_pairs([("name", "wut..example.com")]);

    let result = use_case.execute(&params, REMOTE).await;

    assert_eq!(result.unwrap_err(), DomainError::NameFragmentInvalid);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_execute_propagates_provider_failure() {
    let provider = MockUpstreamProvider::failing(DomainError::UpstreamFailure("frig".into()));
    let use_case = make_use_case(&provider);
    let params = QueryParams::from_pairs([("name", "example.com")]);

    let result = use_case.execute(&params, REMOTE).await;

    assert!(matches!(result, Err(DomainError::UpstreamFailure(ref m)) if m == "frig"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_execute_sentinel_subnet_reaches_provider_as_none() {
    let provider = MockUpstreamProvider::responding(DnsResponse::default());
    let use_case = make_use_case(&provider);
    let params = QueryParams::from_pairs([("name", "example.com"), ("edns_client_subnet", "0.0.0.0/0")]);

    use_case.execute(&params, None).await.unwrap();

    assert!(provider.received()[0].client_subnet.is_none());
}
