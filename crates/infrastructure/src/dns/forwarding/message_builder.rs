//! DNS Message Builder
//!
//! Turns a validated [`ResolveRequest`] into a wire-format query using
//! `hickory-proto`, including the EDNS(0) and client-subnet options.

use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::{ClientSubnet as EdnsClientSubnet, EdnsOption};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use revop_domain::{ClientSubnet, DomainError, ResolveRequest};

/// UDP payload size advertised when DNSSEC-aware processing is requested.
pub const DNSSEC_UDP_PAYLOAD: u16 = 4096;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query message for a request.
    ///
    /// The header always carries RD, AA and AD. With checking enabled the
    /// message advertises a 4096-byte payload and sets DO; with checking
    /// disabled the CD bit is set instead. A client subnet, when present,
    /// is attached as an EDNS option either way.
    pub fn build(request: &ResolveRequest, id: u16) -> Result<Message, DomainError> {
        let name = Self::parse_name(&request.question.name)?;
        let record_type = RecordType::from(request.question.record_type);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_authoritative(true)
            .set_recursion_desired(true)
            .set_authentic_data(true)
            .set_checking_disabled(request.checking_disabled)
            .add_query(Query::query(name, record_type));

        if !request.checking_disabled {
            let mut edns = Edns::new();
            edns.set_max_payload(DNSSEC_UDP_PAYLOAD);
            edns.set_dnssec_ok(true);
            message.set_edns(edns);
        }

        if let Some(subnet) = &request.client_subnet {
            message
                .extensions_mut()
                .get_or_insert_with(Edns::new)
                .options_mut()
                .insert(EdnsOption::Subnet(Self::to_edns_subnet(subnet)));
        }

        Ok(message)
    }

    /// Build a query with a random id and return both the id and the bytes
    ///
    /// The id is needed to match the reply.
    pub fn build_query_with_id(request: &ResolveRequest) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let message = Self::build(request, id)?;
        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub fn to_edns_subnet(subnet: &ClientSubnet) -> EdnsClientSubnet {
        EdnsClientSubnet::new(subnet.address, subnet.source_prefix, subnet.scope_prefix)
    }

    /// Names are always sent fully qualified.
    fn parse_name(domain: &str) -> Result<Name, DomainError> {
        let parsed = if domain.is_ascii() {
            Name::from_ascii(domain)
        } else {
            Name::from_utf8(domain)
        };

        let mut name = parsed.map_err(|e| {
            DomainError::UpstreamFailure(format!("cannot encode name '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);
        Ok(name)
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        message.to_vec().map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to serialize DNS message: {}", e))
        })
    }
}
