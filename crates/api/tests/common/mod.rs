#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use bookshelf_api::auth::cookie::SESSION_COOKIE;
use bookshelf_api::auth::jwt::{generate_session_token, JwtConfig};
use bookshelf_api::auth::password::hash_password;
use bookshelf_api::config::ServerConfig;
use bookshelf_api::router::build_app_router;
use bookshelf_api::state::AppState;
use bookshelf_api::views::Views;
use bookshelf_db::models::user::CreateUser;
use bookshelf_db::repositories::UserRepo;

pub const TEST_SECRET: &str = "integration-test-secret";
const BOUNDARY: &str = "bookshelf-test-boundary";

/// Smallest byte sequences the cover check accepts as images.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";
pub const NOT_AN_IMAGE: &[u8] = b"%PDF-1.4 definitely not a picture";

/// A router over a test database plus the temporary media root it writes to.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub config: ServerConfig,
    /// Held so the directory lives as long as the app.
    pub media: TempDir,
}

/// Build a test `ServerConfig`. Auto-seeding is off so tests start from an
/// empty catalog unless they opt in.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        media_root: media_root.to_path_buf(),
        request_timeout_secs: 30,
        max_upload_bytes: 64 * 1024,
        auto_seed: false,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            session_expiry_mins: 60,
        },
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    build_test_app_with(pool, |_| {})
}

/// Like [`build_test_app`] but lets the caller tweak the config first.
pub fn build_test_app_with(pool: SqlitePool, tweak: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let media = tempfile::tempdir().expect("create media dir");
    let mut config = test_config(media.path());
    tweak(&mut config);

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        views: Arc::new(Views::new().expect("templates compile")),
    };

    TestApp {
        router: build_app_router(state, &config),
        pool,
        config,
        media,
    }
}

impl TestApp {
    /// A `Cookie` header value carrying a valid session for the given user.
    pub fn session_for(&self, user_id: i64, username: &str) -> String {
        let token = generate_session_token(user_id, username, &self.config.jwt).unwrap();
        format!("{SESSION_COOKIE}={token}")
    }

    /// Create a staff user and return a session cookie for them.
    pub async fn login_as_staff(&self) -> String {
        let user = create_user(&self.pool, "librarian", "shelf-secret").await;
        self.session_for(user, "librarian")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.get_as(uri, None).await
    }

    pub async fn get_as(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_bearer(&self, uri: &str, token: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// POST a `multipart/form-data` body with text fields and an optional cover file.
    pub async fn post_multipart(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        cover: Option<&[u8]>,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        let body = multipart_body(fields, cover);
        self.send(builder.body(Body::from(body)).unwrap()).await
    }
}

/// Encode text fields and an optional `cover` file part.
pub fn multipart_body(fields: &[(&str, &str)], cover: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = cover {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cover\"; \
                 filename=\"cover.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Insert a user with a real Argon2 hash and return its id.
pub async fn create_user(pool: &SqlitePool, username: &str, password: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
        },
    )
    .await
    .unwrap();
    user.id
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response.headers()[LOCATION].to_str().unwrap()
}
