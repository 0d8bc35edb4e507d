//! Zone-file presentation text for rdata (RFC 1035 §5.1, RFC 3597).
//!
//! hickory's `Display` already matches for most types. Character-string
//! types and opaque rdata are rendered here.

use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::RData;
use hickory_proto::serialize::binary::BinEncodable;
use std::fmt::Write;

pub fn rdata_text(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => character_strings(txt.txt_data().iter().map(|s| &s[..])),
        RData::HINFO(hinfo) => character_strings([hinfo.cpu(), hinfo.os()]),
        RData::NULL(opaque) | RData::Unknown { rdata: opaque, .. } => opaque_text(opaque),
        other => other.to_string(),
    }
}

/// Each string quoted, separated by single spaces.
fn character_strings<'a>(strings: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut out = String::new();
    for (i, s) in strings.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push('"');
        for &b in s {
            match b {
                b'"' | b'\\' => {
                    out.push('\\');
                    out.push(b as char);
                }
                0x20..=0x7e => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{:03}", b);
                }
            }
        }
        out.push('"');
    }
    out
}

/// RFC 3597 generic form: `\# <len> <hex>`.
fn opaque_text(opaque: &NULL) -> String {
    let bytes = match opaque.to_bytes() {
        Ok(bytes) => bytes,
        Err(_) => return opaque.to_string(),
    };

    let mut out = format!("\\# {}", bytes.len());
    if !bytes.is_empty() {
        out.push(' ');
        for b in &bytes {
            let _ = write!(out, "{:02x}", b);
        }
    }
    out
}
