//! Application factory
//!
//! Builds the actix-web `App` with routes, middleware and shared state.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use radar_core::{EventRepository, NotifierTrait, QuestionRepository, UserRepository};
use radar_shared::config::CorsConfig;
use radar_shared::{error_codes, ApiResponse};

use crate::handlers::{json_config, query_config};
use crate::middleware::create_cors;
use crate::routes::{events, health, questions, users, verification};
use crate::state::AppState;

/// Default JSON body limit in bytes
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

/// Register all routes for the given state type
pub fn configure_routes<U, E, Q, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    cfg.route("/health", web::get().to(health::health_check::<U, E, Q, N>))
        .service(
            web::scope("/api/v1")
                .route("/users", web::post().to(users::register::<U, E, Q, N>))
                .service(
                    web::scope("/verification")
                        .route("/send", web::post().to(verification::send_code::<U, E, Q, N>))
                        .route("/verify", web::post().to(verification::verify_code::<U, E, Q, N>)),
                )
                .service(
                    web::scope("/events")
                        .route("", web::post().to(events::create_event::<U, E, Q, N>))
                        .route("", web::get().to(events::list_events::<U, E, Q, N>))
                        .route("/filter", web::get().to(events::filter_events::<U, E, Q, N>))
                        .route(
                            "/{name}/questions",
                            web::get().to(questions::list_questions::<U, E, Q, N>),
                        ),
                )
                .route("/questions", web::post().to(questions::ask_question::<U, E, Q, N>)),
        );
}

/// Create and configure the application with all dependencies
pub fn create_app<U, E, Q, N>(
    app_state: web::Data<AppState<U, E, Q, N>>,
    cors_config: &CorsConfig,
    json_limit: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config(json_limit))
        .app_data(query_config())
        .wrap(create_cors(cors_config))
        .wrap(TracingLogger::default())
        .configure(configure_routes::<U, E, Q, N>)
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
