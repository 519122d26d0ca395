use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use radar_core::{EventRepository, NotifierTrait, QuestionRepository, UserRepository};

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::{domain_error_response, request_id, success_response, validation_response};
use crate::state::AppState;

/// Handler for POST /api/v1/users
///
/// Registers an unverified user. 201 on success, 409 if the email is taken.
pub async fn register<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    if let Err(errors) = body.validate() {
        return validation_response(&errors, &request_id);
    }

    match state.user_service.register(&body.email).await {
        Ok(user) => success_response(
            StatusCode::CREATED,
            "User registered",
            UserResponse::from(user),
            &request_id,
        ),
        Err(e) => domain_error_response(&e, &request_id),
    }
}
