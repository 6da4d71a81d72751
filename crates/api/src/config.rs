use crate::auth::jwt::JwtConfig;

/// Where entity data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local maps; contents are lost on restart.
    Memory,
    /// PostgreSQL via a connection pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    /// Seed sample tours, testimonials and blog posts into an empty catalog.
    pub seed_sample_data: bool,
    /// Argon2id PHC hash of the admin password. Admin login is disabled
    /// when unset.
    pub admin_password_hash: Option<String>,
    pub log_format: LogFormat,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Default pool size for the PostgreSQL backing.
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `memory`                   |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `SEED_SAMPLE_DATA`     | `true`                     |
    /// | `ADMIN_PASSWORD_HASH`  | unset                      |
    /// | `LOG_FORMAT`           | `text`                     |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values; the server cannot run misconfigured.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".into())
            .as_str()
        {
            "memory" => StorageConfig::Memory,
            "postgres" => StorageConfig::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORAGE_BACKEND=postgres"),
                max_connections: std::env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
                    .parse()
                    .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            },
            other => panic!("STORAGE_BACKEND must be 'memory' or 'postgres', got '{other}'"),
        };

        let seed_sample_data: bool = std::env::var("SEED_SAMPLE_DATA")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_SAMPLE_DATA must be true or false");

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let log_format = match std::env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => panic!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            seed_sample_data,
            admin_password_hash,
            log_format,
            jwt,
        }
    }
}
