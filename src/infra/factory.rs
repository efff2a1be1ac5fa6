use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::{User, ROLE_MAIN_ADMIN};
use crate::domain::ports::UserRepository;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_early_access_repo::SqliteEarlyAccessRepo, sqlite_event_admin_repo::SqliteEventAdminRepo,
    sqlite_event_repo::SqliteEventRepo, sqlite_guest_repo::SqliteGuestRepo,
    sqlite_rsvp_repo::SqliteRsvpRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let auth_service = Arc::new(AuthService::new(config));
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepo::new(pool.clone()));

    seed_main_admin(config, &user_repo, &auth_service).await;

    AppState {
        config: config.clone(),
        user_repo,
        event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
        event_admin_repo: Arc::new(SqliteEventAdminRepo::new(pool.clone())),
        guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
        rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
        early_access_repo: Arc::new(SqliteEarlyAccessRepo::new(pool)),
        auth_service,
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

/// One-time seed: creates the main admin when MAIN_ADMIN_EMAIL and
/// MAIN_ADMIN_PASSWORD are set and no main_admin row exists yet.
async fn seed_main_admin(
    config: &Config,
    user_repo: &Arc<dyn UserRepository>,
    auth_service: &Arc<AuthService>,
) {
    let (Some(email), Some(password)) = (&config.main_admin_email, &config.main_admin_password)
    else {
        return;
    };

    let exists = user_repo
        .main_admin_exists()
        .await
        .expect("Failed to check for existing main admin");
    if exists {
        return;
    }

    let hash = auth_service
        .hash_password(password)
        .expect("Failed to hash main admin password");
    let admin = User::new(email.clone(), hash, ROLE_MAIN_ADMIN.to_string());
    user_repo
        .create(&admin)
        .await
        .expect("Failed to seed main admin");

    info!("Seeded main admin: {}", email);
}
