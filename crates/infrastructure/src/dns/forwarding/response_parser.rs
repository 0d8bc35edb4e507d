use super::presentation::rdata_text;
use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use revop_domain::{DnsQuestion, DnsResponse, DnsRr, DomainError};

pub struct ResponseParser;

impl ResponseParser {
    pub fn decode(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(response_bytes).map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to parse DNS response: {}", e))
        })
    }

    /// Copy the header bits and every section of a reply into the domain
    /// model. Section order is preserved.
    pub fn to_dns_response(message: &Message) -> DnsResponse {
        DnsResponse {
            truncated: message.truncated(),
            recursion_desired: message.recursion_desired(),
            recursion_available: message.recursion_available(),
            authenticated_data: message.authentic_data(),
            checking_disabled: message.checking_disabled(),
            response_code: u16::from(message.response_code()),
            question: message
                .queries()
                .iter()
                .map(|query| DnsQuestion::new(query.name().to_string(), u16::from(query.query_type())))
                .collect(),
            answer: Self::records(message.answers()),
            authority: Self::records(message.name_servers()),
            extra: Self::records(message.additionals()),
        }
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Self::decode(response_bytes)?;
        Ok(Self::to_dns_response(&message))
    }

    fn records(records: &[Record]) -> Vec<DnsRr> {
        records.iter().map(Self::record).collect()
    }

    /// `data` is the zone-file presentation of the rdata alone; records
    /// without rdata (update-style empties) get an empty string.
    fn record(record: &Record) -> DnsRr {
        let data = record.data().map(rdata_text).unwrap_or_default();

        DnsRr::new(
            record.name().to_string(),
            u16::from(record.record_type()),
            record.ttl(),
            data,
        )
    }
}
