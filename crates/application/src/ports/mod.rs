mod upstream_provider;

pub use upstream_provider::UpstreamProvider;
