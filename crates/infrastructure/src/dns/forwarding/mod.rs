pub mod message_builder;
pub mod presentation;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
