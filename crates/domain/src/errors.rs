use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("length of name parameter must be between 1 and 253")]
    NameInvalid,

    #[error("length of fragment in name parameter must be between 1 and 63")]
    NameFragmentInvalid,

    #[error("type could not be mapped to a valid DNS record type")]
    TypeInvalid,

    #[error("type was not within valid bounds 1 <= x <= 65535")]
    TypeOutOfRange,

    #[error("invalid CIDR was provided")]
    InvalidCidr,

    #[error("bad remote address received")]
    BadRemoteAddress,

    #[error("bad ip address")]
    BadIpAddress,

    #[error("upstream query failed: {0}")]
    UpstreamFailure(String),

    #[error("failed to serialize response: {0}")]
    SerializationFailure(String),
}

impl DomainError {
    /// Errors caused by the caller's input rather than by the gateway or upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::NameInvalid
                | DomainError::NameFragmentInvalid
                | DomainError::TypeInvalid
                | DomainError::TypeOutOfRange
                | DomainError::InvalidCidr
                | DomainError::BadRemoteAddress
                | DomainError::BadIpAddress
        )
    }
}
