//! Email verification endpoints
//!
//! Both take their input from the query string, matching the mobile client:
//! `POST /api/v1/verification/send?Email=...` and
//! `POST /api/v1/verification/verify?Email=...&Code=...`.

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use radar_core::{
    DomainError, EventRepository, NotifierTrait, QuestionRepository, UserRepository,
    ValidationError,
};

use crate::dto::{SendCodeResponse, UserResponse, VerificationQuery, VerifyCodeResponse};
use crate::handlers::{domain_error_response, request_id, success_response};
use crate::state::AppState;

fn required_email(query: &VerificationQuery) -> Result<&str, DomainError> {
    query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ValidationError::required("email").into())
}

/// Handler for POST /api/v1/verification/send
pub async fn send_code<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    query: web::Query<VerificationQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    let email = match required_email(&query) {
        Ok(email) => email,
        Err(e) => return domain_error_response(&e, &request_id),
    };

    match state.verification_service.request_verification(email).await {
        Ok(result) => {
            let response = SendCodeResponse {
                expires_at: result.expires_at(),
                expires_in_minutes: state.verification_service.config().code_expiration_minutes,
                email: result.email,
            };
            success_response(StatusCode::OK, "Verification mail sent", response, &request_id)
        }
        Err(e) => domain_error_response(&e, &request_id),
    }
}

/// Handler for POST /api/v1/verification/verify
///
/// A missing code is passed through as empty and rejected as `InvalidCode`.
pub async fn verify_code<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    query: web::Query<VerificationQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    let email = match required_email(&query) {
        Ok(email) => email,
        Err(e) => return domain_error_response(&e, &request_id),
    };
    let code = query.code.as_deref().unwrap_or_default();

    match state
        .verification_service
        .confirm_verification(email, code)
        .await
    {
        Ok(result) => success_response(
            StatusCode::OK,
            "Account verified",
            VerifyCodeResponse {
                user: UserResponse::from(result.user),
                verified_at: result.verified_at,
            },
            &request_id,
        ),
        Err(e) => domain_error_response(&e, &request_id),
    }
}
