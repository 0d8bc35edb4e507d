mod record_type;

pub use record_type::RecordType;

use std::sync::Arc;

/// A resource record as returned by an upstream server, with its rdata
/// rendered in zone-file presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRr {
    pub name: Arc<str>,
    pub record_type: u16,
    pub ttl: u32,
    pub data: String,
}

impl DnsRr {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: u16,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}
