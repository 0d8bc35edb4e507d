//! The public JSON body of `/resolve`, field-compatible with Google's
//! DNS-over-HTTPS JSON API.

use revop_domain::{DnsQuestion, DnsResponse, DnsRr};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GDnsResponse {
    #[serde(rename = "Status")]
    pub status: u16,
    #[serde(rename = "TC")]
    pub tc: bool,
    #[serde(rename = "RD")]
    pub rd: bool,
    #[serde(rename = "RA")]
    pub ra: bool,
    #[serde(rename = "AD")]
    pub ad: bool,
    #[serde(rename = "CD")]
    pub cd: bool,
    #[serde(rename = "Question")]
    pub question: Vec<GDnsQuestion>,
    #[serde(rename = "Answer")]
    pub answer: Vec<GDnsRr>,
    #[serde(rename = "Authority")]
    pub authority: Vec<GDnsRr>,
    #[serde(rename = "Additional")]
    pub additional: Vec<GDnsRr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GDnsQuestion {
    pub name: Arc<str>,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GDnsRr {
    pub name: Arc<str>,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    pub data: String,
}

impl From<&DnsQuestion> for GDnsQuestion {
    fn from(question: &DnsQuestion) -> Self {
        Self {
            name: question.name.clone(),
            record_type: question.record_type,
        }
    }
}

impl From<&DnsRr> for GDnsRr {
    fn from(rr: &DnsRr) -> Self {
        Self {
            name: rr.name.clone(),
            record_type: rr.record_type,
            ttl: rr.ttl,
            data: rr.data.clone(),
        }
    }
}

impl From<&DnsResponse> for GDnsResponse {
    fn from(response: &DnsResponse) -> Self {
        Self {
            status: response.response_code,
            tc: response.truncated,
            rd: response.recursion_desired,
            ra: response.recursion_available,
            ad: response.authenticated_data,
            cd: response.checking_disabled,
            question: response.question.iter().map(GDnsQuestion::from).collect(),
            answer: response.answer.iter().map(GDnsRr::from).collect(),
            authority: response.authority.iter().map(GDnsRr::from).collect(),
            additional: response.extra.iter().map(GDnsRr::from).collect(),
        }
    }
}
