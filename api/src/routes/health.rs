use actix_web::{web, HttpResponse};

use radar_core::{EventRepository, NotifierTrait, QuestionRepository, UserRepository};
use radar_shared::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// Handler for GET /health
///
/// 200 when the store answers, 503 otherwise. The process itself is alive
/// either way, so the overall status is `degraded` rather than `unhealthy`.
pub async fn health_check<U, E, Q, N>(state: web::Data<AppState<U, E, Q, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EventRepository + 'static,
    Q: QuestionRepository + 'static,
    N: NotifierTrait + 'static,
{
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.user_service.store_health().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: HealthStatus::Healthy,
            store: HealthStatus::Healthy,
            version,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check found store unavailable");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: HealthStatus::Degraded,
                store: HealthStatus::Unhealthy,
                version,
            })
        }
    }
}
