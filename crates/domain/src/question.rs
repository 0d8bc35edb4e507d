//! Translation of `/resolve` query parameters into a validated DNS question.

use crate::client_subnet::{ClientSubnet, SUBNET_DISABLED_SENTINEL};
use crate::{DnsQuestion, DomainError, QueryParams, RecordType};

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Everything the upstream provider needs to issue one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub question: DnsQuestion,
    /// Header CD bit. When unset the query advertises DNSSEC-aware EDNS(0).
    pub checking_disabled: bool,
    pub client_subnet: Option<ClientSubnet>,
}

impl ResolveRequest {
    pub fn new(question: DnsQuestion) -> Self {
        Self {
            question,
            checking_disabled: false,
            client_subnet: None,
        }
    }

    /// Builds a request from the `name`, `type`, `cd` and `edns_client_subnet`
    /// parameters. `remote_addr` is the caller's `host:port`, consulted only
    /// when a client subnet has to be derived.
    pub fn from_params(
        params: &QueryParams,
        remote_addr: Option<&str>,
    ) -> Result<Self, DomainError> {
        let name = validate_name(params.get("name"))?;
        let record_type = parse_record_type(params.get("type"))?;
        let checking_disabled = parse_checking_disabled(params);
        let client_subnet = parse_client_subnet(params.get("edns_client_subnet"), remote_addr)?;

        Ok(Self {
            question: DnsQuestion::new(name, record_type),
            checking_disabled,
            client_subnet,
        })
    }
}

fn validate_name(name: &str) -> Result<&str, DomainError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(DomainError::NameInvalid);
    }
    if name
        .split('.')
        .any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN)
    {
        return Err(DomainError::NameFragmentInvalid);
    }
    Ok(name)
}

/// Mnemonic first, then a decimal code. Absent or empty means `A`.
fn parse_record_type(value: &str) -> Result<u16, DomainError> {
    if value.is_empty() {
        return Ok(RecordType::A.to_u16());
    }

    let code = match value.parse::<RecordType>() {
        Ok(rt) => rt.to_u16(),
        Err(_) if value.bytes().all(|b| b.is_ascii_digit()) => {
            value.parse::<u16>().map_err(|_| DomainError::TypeInvalid)?
        }
        Err(_) => return Err(DomainError::TypeInvalid),
    };

    if code < 1 {
        return Err(DomainError::TypeOutOfRange);
    }
    Ok(code)
}

/// `cd` present exactly once with an empty value counts as set; an absent
/// `cd` does not.
fn parse_checking_disabled(params: &QueryParams) -> bool {
    match params.values("cd").as_slice() {
        [""] => true,
        [] => false,
        [first, ..] => string_to_bool(first, false),
    }
}

fn string_to_bool(value: &str, fallback: bool) -> bool {
    match value {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => fallback,
    }
}

fn parse_client_subnet(
    value: &str,
    remote_addr: Option<&str>,
) -> Result<Option<ClientSubnet>, DomainError> {
    if value == SUBNET_DISABLED_SENTINEL {
        return Ok(None);
    }

    let subnet = if value.is_empty() {
        let remote = remote_addr.ok_or(DomainError::BadRemoteAddress)?;
        ClientSubnet::from_remote_addr(remote)?
    } else {
        ClientSubnet::from_cidr(value)?
    };
    Ok(Some(subnet))
}
