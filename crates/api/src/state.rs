use axum::http::HeaderValue;
use revop_application::use_cases::ResolveQueryUseCase;
use revop_domain::config::HttpConfig;
use revop_domain::ConfigError;
use std::sync::Arc;

/// Content type Google's public resolver answers with.
pub const GOOGLE_CONTENT_TYPE: &str = "application/x-javascript; charset=UTF-8";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Per-response headers, validated once at startup.
#[derive(Debug, Clone)]
pub struct ResponseHeaders {
    pub content_type: HeaderValue,
    pub server: Option<HeaderValue>,
}

impl ResponseHeaders {
    pub fn from_config(config: &HttpConfig) -> Result<Self, ConfigError> {
        let content_type = HeaderValue::from_static(if config.json_content_type {
            JSON_CONTENT_TYPE
        } else {
            GOOGLE_CONTENT_TYPE
        });

        let server = config
            .server_header
            .as_deref()
            .map(|value| {
                HeaderValue::from_str(value).map_err(|_| {
                    ConfigError::Validation(format!("Invalid server header value: {:?}", value))
                })
            })
            .transpose()?;

        Ok(Self {
            content_type,
            server,
        })
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: HeaderValue::from_static(GOOGLE_CONTENT_TYPE),
            server: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub resolve: Arc<ResolveQueryUseCase>,
    pub headers: Arc<ResponseHeaders>,
}

impl AppState {
    pub fn new(resolve: Arc<ResolveQueryUseCase>, http: &HttpConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            resolve,
            headers: Arc::new(ResponseHeaders::from_config(http)?),
        })
    }
}
