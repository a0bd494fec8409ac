pub mod app;
pub mod handlers;
pub mod middleware;
pub mod openapi;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::config::{MailConfig, ServerConfig};
use crate::database::{connection::*, migrations::Migrator, seed_data};
use crate::services::SmtpMailer;
use anyhow::Result;
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn start_server(config: &ServerConfig, mail: &MailConfig) -> Result<()> {
    let database_url = get_database_url(Some(&config.database));
    let db = establish_connection(&database_url).await?;

    setup_database(&db).await?;
    info!("Database migrations completed");

    let mailer = Arc::new(SmtpMailer::from_config(mail));
    let app = app::create_app(db.clone(), mailer, config.cors_origin.as_deref()).await?;

    log_routes();

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database");
    db.close().await?;
    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  GET  /api                   - Service status");
    info!("  POST /api/contact           - Submit contact form");
    info!("  GET  /api/contact           - List contact submissions");
    info!("  GET  /api/blog              - Published posts (category, page, per_page)");
    info!("  GET  /api/blog/:id          - Single published post");
    info!("  POST /api/blog              - Create post");
    info!("  GET  /api/testimonials      - Approved testimonials");
    info!("  POST /api/testimonials      - Submit testimonial for review");
    info!("  GET  /api/projects          - Projects (category, featured)");
    info!("  POST /api/projects          - Create project");
    info!("  /docs                       - Swagger UI documentation");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for CTRL-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}

/// Migrates, then inserts sample content into an empty database.
pub async fn seed_database(database_path: &str) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    setup_database(&db).await?;
    seed_data::create_example_content(&db).await?;
    Ok(())
}
