use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Mnemonic for the question type, or `TYPE<n>` for codes outside the registry.
    pub fn type_name(&self) -> String {
        match RecordType::from_u16(self.record_type) {
            Some(rt) => rt.as_str().to_string(),
            None => format!("TYPE{}", self.record_type),
        }
    }
}
