//! Question endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use radar_core::{EventRepository, NotifierTrait, QuestionRepository, UserRepository};

use crate::dto::AskQuestionRequest;
use crate::handlers::{
    domain_error_response, first_header, request_id, success_response, validation_response,
};
use crate::state::AppState;

pub const USER_NAME_HEADERS: &[&str] = &["User-Name", "User_name"];
pub const EVENT_NAME_HEADERS: &[&str] = &["Event-Name", "Event_name"];

/// Handler for POST /api/v1/questions
///
/// The asker and target event come from headers, falling back to the body.
pub async fn ask_question<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    body: web::Json<AskQuestionRequest>,
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

    let submission = body.into_inner().into_submission(
        first_header(&req, USER_NAME_HEADERS),
        first_header(&req, EVENT_NAME_HEADERS),
    );

    match state.question_service.submit(submission).await {
        Ok(question) => {
            success_response(StatusCode::CREATED, "Question submitted", question, &request_id)
        }
        Err(e) => domain_error_response(&e, &request_id),
    }
}

/// Handler for GET /api/v1/events/{name}/questions
pub async fn list_questions<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    match state.question_service.questions_for_event(&path).await {
        Ok(questions) => {
            success_response(StatusCode::OK, "Questions retrieved", questions, &request_id)
        }
        Err(e) => domain_error_response(&e, &request_id),
    }
}
