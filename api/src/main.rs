use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use radar_api::{create_app, AppState};
use radar_infra::config::NotifierConfig;
use radar_infra::database::{
    DatabasePool, PostgresEventRepository, PostgresQuestionRepository, PostgresUserRepository,
};
use radar_infra::notifier::create_notifier;
use radar_shared::config::AppConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    let bind_address = config.server.bind_address();
    tracing::info!(
        environment = %config.environment,
        bind = %bind_address,
        "Starting Radar API server"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to apply database migrations")?;
    }

    let notifier = create_notifier(&NotifierConfig::from_env())
        .context("invalid notifier configuration")?;

    let users = Arc::new(PostgresUserRepository::new(pool.get_pool().clone()));
    let events = Arc::new(PostgresEventRepository::new(pool.get_pool().clone()));
    let questions = Arc::new(PostgresQuestionRepository::new(pool.get_pool().clone()));

    let state = web::Data::new(AppState::new(
        users,
        events,
        questions,
        Arc::new(notifier),
        &config.verification,
    ));

    let cors = config.cors.clone();
    let json_limit = config.server.max_payload_size;

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, json_limit));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    pool.close().await;
    tracing::info!("Radar API server stopped");
    Ok(())
}
