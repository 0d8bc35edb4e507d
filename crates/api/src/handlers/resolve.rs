use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use revop_domain::{DomainError, QueryParams};
use std::net::SocketAddr;
use tracing::{error, info};

use crate::dto::GDnsResponse;
use crate::errors::ApiError;
use crate::state::AppState;

const X_XSS_PROTECTION: HeaderName = HeaderName::from_static("x-xss-protection");

/// `GET /resolve`: one validated question, one upstream exchange, one
/// JSON document.
pub async fn resolve(State(state): State<AppState>, request: Request) -> Response {
    let params = query_params(request.uri().query());
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    let resolved = match state
        .resolve
        .execute(&params, remote_addr.as_deref())
        .await
    {
        Ok(resolved) => resolved,
        Err(err) => {
            error!(
                error = %err,
                name = params.get("name"),
                remote = remote_addr.as_deref().unwrap_or("-"),
                "Failed to resolve request"
            );
            return ApiError(err).into_response();
        }
    };

    let body = match serde_json::to_vec(&GDnsResponse::from(&resolved.response)) {
        Ok(body) => body,
        Err(e) => {
            let err = DomainError::SerializationFailure(e.to_string());
            error!(error = %err, "Failed to encode response");
            return ApiError(err).into_response();
        }
    };

    let question = &resolved.request.question;
    info!(
        name = %question.name,
        record_type = %question.type_name(),
        rcode = resolved.response.response_code,
        "Responded to request"
    );

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, state.headers.content_type.clone());
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("private"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    if let Some(server) = &state.headers.server {
        headers.insert(header::SERVER, server.clone());
    }

    response
}

fn query_params(query: Option<&str>) -> QueryParams {
    QueryParams::from_pairs(url::form_urlencoded::parse(query.unwrap_or("").as_bytes()))
}
