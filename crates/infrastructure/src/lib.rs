//! revop infrastructure: the upstream DNS provider
pub mod dns;
