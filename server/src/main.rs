//! Tutoria booking service binary.
//!
//! Wires the PostgreSQL stores and the configured email transport into the
//! HTTP router, then serves until a shutdown signal arrives. The process
//! owns exactly one connection pool, created here and closed explicitly on
//! shutdown.

mod config;

use anyhow::{Context, Result};
use config::{EmailSettings, ServerConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tutoria_booking::providers::{
    ConsoleEmailProvider, EmailProvider, ResendEmailProvider, SmtpEmailProvider,
};
use tutoria_booking::stores::postgres;
use tutoria_booking::stores::{PostgresAccessCodeStore, PostgresBookingStore};
use tutoria_booking::{Environment, ReminderConfig, Secrets};
use tutoria_web::{api_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    postgres::migrate(&pool).await?;

    let ServerConfig {
        bind_addr,
        secrets,
        operator_email,
        email,
        reminder,
        ..
    } = config;

    match email {
        EmailSettings::Resend { api_key, from } => {
            serve(
                bind_addr,
                pool,
                ResendEmailProvider::new(api_key, from),
                secrets,
                operator_email,
                reminder,
            )
            .await
        }
        EmailSettings::Smtp {
            server,
            port,
            username,
            password,
            from_email,
            from_name,
        } => {
            let provider =
                SmtpEmailProvider::new(server, port, username, password, from_email, from_name)?;
            serve(bind_addr, pool, provider, secrets, operator_email, reminder).await
        }
        EmailSettings::Console => {
            tracing::warn!("no email transport configured; emails will be logged, not sent");
            serve(
                bind_addr,
                pool,
                ConsoleEmailProvider::new(),
                secrets,
                operator_email,
                reminder,
            )
            .await
        }
    }
}

/// Build the environment over the shared pool and serve until shutdown.
async fn serve<E>(
    bind_addr: SocketAddr,
    pool: PgPool,
    email: E,
    secrets: Secrets,
    operator_email: Option<String>,
    reminder: ReminderConfig,
) -> Result<()>
where
    E: EmailProvider + Clone + 'static,
{
    let env = Environment::new(
        PostgresAccessCodeStore::new(pool.clone()),
        PostgresBookingStore::new(pool.clone()),
        email,
        secrets,
        operator_email,
        reminder,
    );

    let app = api_router(AppState::new(env))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Explicit end of the process-wide pool's lifecycle.
    pool.close().await;
    tracing::info!("connection pool closed");
    Ok(())
}

fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Resolve on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
