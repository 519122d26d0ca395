//! Event endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use radar_core::{
    DomainError, EventFilterCriteria, EventRepository, NotifierTrait, QuestionRepository,
    UserRepository,
};

use crate::dto::{CreateEventRequest, EventFilterQuery};
use crate::handlers::{
    domain_error_response, first_header, request_id, success_response, validation_response,
};
use crate::state::AppState;

/// Headers naming the organizer, in precedence order
pub const ORGANIZER_HEADERS: &[&str] = &["Organizer-Name", "Organizer_name"];

/// Handler for POST /api/v1/events
pub async fn create_event<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    body: web::Json<CreateEventRequest>,
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

    let organizer = first_header(&req, ORGANIZER_HEADERS);
    let new_event = body.into_inner().into_new_event(organizer);

    match state.event_service.create_event(new_event).await {
        Ok(event) => success_response(StatusCode::CREATED, "Event created", event, &request_id),
        Err(e) => domain_error_response(&e, &request_id),
    }
}

/// Handler for GET /api/v1/events
pub async fn list_events<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    match state.event_service.all_events().await {
        Ok(events) => success_response(StatusCode::OK, "Events retrieved", events, &request_id),
        Err(e) => domain_error_response(&e, &request_id),
    }
}

/// Handler for GET /api/v1/events/filter
///
/// Absent or blank parameters leave that attribute unconstrained.
pub async fn filter_events<U, E, Q, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, E, Q, N>>,
    query: web::Query<EventFilterQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request_id = request_id(&req);

    let criteria = match EventFilterCriteria::from_raw(
        query.sex.as_deref(),
        query.campus_only.as_deref(),
        query.free.as_deref(),
    ) {
        Ok(criteria) => criteria,
        Err(e) => return domain_error_response(&DomainError::from(e), &request_id),
    };

    match state.event_service.filter(&criteria).await {
        Ok(events) => success_response(StatusCode::OK, "Events retrieved", events, &request_id),
        Err(e) => domain_error_response(&e, &request_id),
    }
}
