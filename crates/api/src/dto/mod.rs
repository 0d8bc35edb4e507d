pub mod gdns;

pub use gdns::{GDnsQuestion, GDnsResponse, GDnsRr};
