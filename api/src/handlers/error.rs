//! Error and success envelopes
//!
//! Every response body is a `radar_shared::ApiResponse`. Domain errors map to
//! HTTP statuses here and nowhere else.

use actix_web::{
    error::InternalError,
    http::StatusCode,
    web, HttpRequest, HttpResponse,
};
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationErrors;

use radar_core::DomainError;
use radar_shared::{error_codes, ApiResponse};

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The caller's request id, or a fresh one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidCode | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::AlreadyExists { .. } => StatusCode::CONFLICT,
        DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::NotifierFailure { .. } => StatusCode::BAD_GATEWAY,
    }
}

/// Message shown to the caller; collaborator details stay in the logs
fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::StoreUnavailable { .. } => {
            "Service temporarily unavailable. Please try again later".to_string()
        }
        DomainError::NotifierFailure { .. } => {
            "Could not deliver the verification code. Please try again later".to_string()
        }
        other => other.to_string(),
    }
}

pub fn domain_error_response(error: &DomainError, request_id: &str) -> HttpResponse {
    let status = status_for(error);

    if error.is_collaborator_failure() {
        tracing::error!(request_id, error = %error, code = error.error_code(), "Request failed");
    } else {
        tracing::info!(request_id, error = %error, code = error.error_code(), "Request rejected");
    }

    let mut body = ApiResponse::<()>::error(error.error_code(), public_message(error))
        .with_request_id(request_id);
    if let DomainError::Validation(validation) = error {
        body = body.with_field(validation.field());
    }

    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(body)
}

/// 400 response for DTO validation failures
pub fn validation_response(errors: &ValidationErrors, request_id: &str) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    let field = fields.first().copied().unwrap_or("body");

    tracing::info!(request_id, field, "Request validation failed");

    let body = ApiResponse::<()>::error(
        error_codes::VALIDATION_ERROR,
        format!("Invalid value for field: {}", field),
    )
    .with_field(field)
    .with_request_id(request_id);

    HttpResponse::BadRequest()
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(body)
}

pub fn success_response<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: T,
    request_id: &str,
) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(ApiResponse::success(message, data).with_request_id(request_id))
}

fn bad_request(message: String, req: &HttpRequest) -> HttpResponse {
    let request_id = request_id(req);
    tracing::info!(request_id = %request_id, %message, "Malformed request");
    HttpResponse::BadRequest()
        .insert_header((REQUEST_ID_HEADER, request_id.as_str()))
        .json(ApiResponse::<()>::error(error_codes::BAD_REQUEST, message).with_request_id(request_id))
}

/// JSON extractor config that answers malformed bodies with the envelope
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            let response = bad_request(format!("Invalid JSON body: {}", err), req);
            InternalError::from_response(err, response).into()
        })
}

/// Query extractor config that answers malformed query strings with the envelope
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let response = bad_request(format!("Invalid query string: {}", err), req);
        InternalError::from_response(err, response).into()
    })
}
