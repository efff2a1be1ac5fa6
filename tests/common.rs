use invite_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::{User, ROLE_MAIN_ADMIN},
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_early_access_repo::SqliteEarlyAccessRepo,
        sqlite_event_admin_repo::SqliteEventAdminRepo,
        sqlite_event_repo::SqliteEventRepo,
        sqlite_guest_repo::SqliteGuestRepo,
        sqlite_rsvp_repo::SqliteRsvpRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const MAIN_ADMIN_EMAIL: &str = "admin@example.com";
pub const MAIN_ADMIN_PASSWORD: &str = "changeme";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: "test-signing-secret".to_string(),
            main_admin_email: None,
            main_admin_password: None,
        };

        let auth_service = Arc::new(AuthService::new(&config));

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            event_admin_repo: Arc::new(SqliteEventAdminRepo::new(pool.clone())),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            early_access_repo: Arc::new(SqliteEarlyAccessRepo::new(pool.clone())),
            auth_service: auth_service.clone(),
        });

        // Every test starts with one seeded main admin.
        let hash = auth_service.hash_password(MAIN_ADMIN_PASSWORD).unwrap();
        let admin = User::new(MAIN_ADMIN_EMAIL.to_string(), hash, ROLE_MAIN_ADMIN.to_string());
        state.user_repo.create(&admin).await.unwrap();

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({ "email": email, "password": password });

        let response = self
            .post_json("/api/auth/login", &payload, None)
            .await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["token"].as_str().expect("No token in login body").to_string()
    }

    pub async fn login_main_admin(&self) -> String {
        self.login(MAIN_ADMIN_EMAIL, MAIN_ADMIN_PASSWORD).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.request("GET", uri, None, token).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value, token: Option<&str>) -> Response<Body> {
        self.request("POST", uri, Some(body), token).await
    }

    pub async fn patch_json(&self, uri: &str, body: &Value, token: Option<&str>) -> Response<Body> {
        self.request("PATCH", uri, Some(body), token).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.request("DELETE", uri, None, token).await
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
