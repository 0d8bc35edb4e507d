use super::{DnsQuestion, DnsRr};

/// Normalized view of an upstream reply: header bits, response code and
/// the four message sections in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub authenticated_data: bool,
    pub checking_disabled: bool,
    pub response_code: u16,
    pub question: Vec<DnsQuestion>,
    pub answer: Vec<DnsRr>,
    pub authority: Vec<DnsRr>,
    pub extra: Vec<DnsRr>,
}
