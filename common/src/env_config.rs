use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to initialize and run the server: database
/// connection details, JWT configuration, server host and port, worker count,
/// CORS settings, logging preferences, object-storage settings, and the
/// endpoint of the external image-processing server.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Configuration for JWT (JSON Web Token) authentication.
    pub jwt_config: JwtConfig,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// Server-wide request quota, in requests per second.
    pub rate_limit_per_sec: u32,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// The URL password-reset links point back to.
    pub client_url: String,
    /// Object-storage (S3-compatible) settings.
    pub storage: StorageConfig,
    /// Where finished-order notifications are delivered.
    pub ai_server: AiServerConfig,
}

#[derive(Clone, Debug)]
/// Settings for the S3-compatible object store holding uploads and the
/// external processor's output artifacts.
pub struct StorageConfig {
    /// Bucket that holds the per-user `incoming/` and `outgoing/` prefixes.
    pub bucket: String,
    /// Custom endpoint for S3-compatible stores (Spaces, MinIO). When unset,
    /// the SDK's default AWS endpoint resolution applies.
    pub endpoint: Option<String>,
    /// Region passed to the SDK; S3-compatible stores mostly ignore it.
    pub region: String,
    /// Lifetime of presigned download URLs, in seconds.
    pub presign_expiry_secs: u64,
}

#[derive(Clone, Debug)]
/// Settings for the outbound notification to the external AI processor.
pub struct AiServerConfig {
    /// Full URL the order notification is POSTed to.
    pub url: String,
    /// Per-request timeout applied to the notify call.
    pub request_timeout_secs: u64,
    /// How often the outbox worker scans for undelivered notifications.
    pub outbox_poll_secs: u64,
}

#[derive(Clone, Debug)]
/// Configuration for JSON Web Token (JWT) authentication.
///
/// Contains the secret key used to sign JWTs and the expiration time in hours
/// for issued tokens.
pub struct JwtConfig {
    /// The secret key used to sign and verify JWTs.
    pub secret: String,
    /// The expiration time for JWTs in hours.
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Creates a new `JwtConfig` instance from environment variables.
    ///
    /// - `JWT_SECRET`: Required. The secret key for JWT signing.
    /// - `JWT_EXPIRATION_HOURS`: Optional. Defaults to 24 hours.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or `JWT_EXPIRATION_HOURS` is set but
    /// not a valid number.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        JwtConfig {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a valid number"),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    /// - `DATABASE_URL`: Connection string for Postgres
    /// - `JWT_SECRET`: Secret key for JWT signing (via `JwtConfig::from_env()`)
    /// - `STORAGE_BUCKET`: Object-storage bucket name
    /// - `AI_SERVER_PATH`: URL of the external image-processing server
    ///
    /// Optional (with defaults):
    /// - `IP` (default "127.0.0.1"), `PORT` (8080), `WORKERS` (4)
    /// - `CORS_ALLOWED_ORIGIN` (default "http://localhost:5173")
    /// - `RATE_LIMIT_PER_SEC` (10)
    /// - `ENABLE_CONSOLE_LOGGING` (default true)
    /// - `CLIENT_URL` (default "http://localhost:5173")
    /// - `STORAGE_ENDPOINT`, `STORAGE_REGION` ("us-east-1"),
    ///   `PRESIGN_EXPIRY_SECS` (3600)
    /// - `AI_REQUEST_TIMEOUT_SECS` (10), `OUTBOX_POLL_SECS` (5)
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a numeric value cannot be
    /// parsed.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_config: JwtConfig::from_env(),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            rate_limit_per_sec: env::var("RATE_LIMIT_PER_SEC")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("RATE_LIMIT_PER_SEC must be a valid number"),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            client_url: env::var("CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            storage: StorageConfig {
                bucket: env::var("STORAGE_BUCKET").expect("STORAGE_BUCKET must be set"),
                endpoint: env::var("STORAGE_ENDPOINT").ok(),
                region: env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                presign_expiry_secs: env::var("PRESIGN_EXPIRY_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse()
                    .expect("PRESIGN_EXPIRY_SECS must be a valid number"),
            },
            ai_server: AiServerConfig {
                url: env::var("AI_SERVER_PATH").expect("AI_SERVER_PATH must be set"),
                request_timeout_secs: env::var("AI_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("AI_REQUEST_TIMEOUT_SECS must be a valid number"),
                outbox_poll_secs: env::var("OUTBOX_POLL_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("OUTBOX_POLL_SECS must be a valid number"),
            },
        })
    }
}
