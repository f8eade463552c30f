//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::normalize_path::NormalizePath;

use crate::application::services::{AttendanceService, AttendanceServiceImpl};
use crate::config::Settings;
use crate::domain::{
    ClubRepository, MemberRepository, MembershipRepository, TrainerRepository,
    WorkoutScheduleRepository, WorkoutTypeRepository,
};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgAttendanceRepository, PgClubRepository, PgMemberRepository, PgMembershipRepository,
    PgTrainerRepository, PgWorkoutScheduleRepository, PgWorkoutTypeRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub members: Arc<dyn MemberRepository>,
    pub clubs: Arc<dyn ClubRepository>,
    pub trainers: Arc<dyn TrainerRepository>,
    pub workout_types: Arc<dyn WorkoutTypeRepository>,
    pub schedules: Arc<dyn WorkoutScheduleRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub attendance: Arc<dyn AttendanceService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the PostgreSQL repositories and the attendance service over one pool.
    pub fn from_pool(db: PgPool, settings: Settings) -> Self {
        let schedules = Arc::new(PgWorkoutScheduleRepository::new(db.clone()));
        let attendance = AttendanceServiceImpl::new(
            Arc::new(PgAttendanceRepository::new(db.clone())),
            schedules.clone(),
        );

        Self {
            members: Arc::new(PgMemberRepository::new(db.clone())),
            clubs: Arc::new(PgClubRepository::new(db.clone())),
            trainers: Arc::new(PgTrainerRepository::new(db.clone())),
            workout_types: Arc::new(PgWorkoutTypeRepository::new(db.clone())),
            memberships: Arc::new(PgMembershipRepository::new(db.clone())),
            schedules,
            attendance: Arc::new(attendance),
            settings: Arc::new(settings),
            db,
        }
    }
}

/// Build the router with every layer applied
///
/// Paths are normalized before routing, so `/api/members/` is served like
/// `/api/members`.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    let app = routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors);

    Router::new().fallback_service(NormalizePath::trim_trailing_slash(app))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    db: PgPool,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to PostgreSQL")?;
        tracing::info!(
            max_connections = settings.database.max_connections,
            "Database connection pool created"
        );

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to apply database schema")?;
            tracing::info!("Database schema is up to date");
        }

        let addr = settings.server_addr();
        let state = AppState::from_pool(db.clone(), settings);
        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self {
            listener,
            router,
            db,
        })
    }

    /// Run the server until Ctrl+C or SIGTERM, then drain the pool
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped, closing database pool");
        self.db.close().await;

        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
