//! Supertodolists server binary.
//!
//! Composition root: load config, initialize logging, pick adapters, serve.

use std::error::Error;
use std::io::IsTerminal;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use supertodolists::adapters::auth::{Argon2PasswordHasher, EmailAuthenticationBackend};
use supertodolists::adapters::email::{ResendEmailSender, TracingEmailSender};
use supertodolists::adapters::http::{app_router, AppState, SessionCookie};
use supertodolists::adapters::postgres::{
    PostgresItemRepository, PostgresListReader, PostgresListRepository, PostgresSessionStore,
    PostgresUserRepository,
};
use supertodolists::config::{
    AppConfig, DatabaseConfig, EmailConfig, LogFormat, ServerConfig, StorageBackend,
};
use supertodolists::domain::user::PasswordPolicy;
use supertodolists::ports::{EmailSender, PasswordHasher, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_logging(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let mailer = email_sender(&config.email);
    let cookie = SessionCookie::from_config(&config.auth, config.is_production());

    let state = match config.database.backend() {
        StorageBackend::Memory => {
            tracing::warn!("running with in-memory storage; data is lost on shutdown");
            AppState::in_memory(&config.auth, hasher, mailer, cookie)
        }
        StorageBackend::Postgres => {
            let pool = connect(&config.database).await?;
            postgres_state(pool, &config, hasher, mailer, cookie).await?
        }
    };

    let app = app_router(state, &config.server);

    tracing::info!(
        addr = %addr,
        environment = ?config.server.environment,
        "Starting server"
    );
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the logging system based on configuration.
///
/// `RUST_LOG` overrides `server.log_level`. `Auto` picks JSON when stdout is
/// not a terminal.
fn init_logging(config: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let use_json = match config.log_format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !std::io::stdout().is_terminal(),
    };

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init();
    }
}

async fn connect(config: &DatabaseConfig) -> Result<PgPool, Box<dyn Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}

async fn postgres_state(
    pool: PgPool,
    config: &AppConfig,
    hasher: Arc<dyn PasswordHasher>,
    mailer: Arc<dyn EmailSender>,
    session_cookie: SessionCookie,
) -> Result<AppState, Box<dyn Error>> {
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));

    let sessions = PostgresSessionStore::new(pool.clone(), config.auth.session_ttl_secs);
    let purged = sessions.purge_expired().await?;
    if purged > 0 {
        tracing::info!(purged, "removed expired sessions");
    }

    Ok(AppState {
        auth_backend: Arc::new(EmailAuthenticationBackend::new(
            users.clone(),
            hasher.clone(),
        )),
        users,
        lists: Arc::new(PostgresListRepository::new(pool.clone())),
        items: Arc::new(PostgresItemRepository::new(pool.clone())),
        list_reader: Arc::new(PostgresListReader::new(pool)),
        hasher,
        sessions: Arc::new(sessions),
        mailer,
        password_policy: PasswordPolicy::new(config.auth.min_password_length),
        session_cookie,
    })
}

fn email_sender(config: &EmailConfig) -> Arc<dyn EmailSender> {
    match (config.enabled, &config.resend_api_key) {
        (true, Some(key)) => Arc::new(ResendEmailSender::new(key.clone(), config.from_header())),
        _ => {
            tracing::info!("outbound email disabled; messages are only logged");
            Arc::new(TracingEmailSender::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
