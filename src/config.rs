use rocket::figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_PATH: &str = "/api";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// Full connection string. When set it wins over the individual parts below.
    pub url: Option<String>,
    pub host: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: u64,
    /// Per-statement timeout applied to every pooled connection, in milliseconds.
    pub statement_timeout_ms: u64,
    /// Open connections on first use instead of at launch.
    pub lazy_connect: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub address: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Shared secret that, presented verbatim as the `Authorization` header,
    /// grants full access. `None` or empty disables the override.
    pub dev_auth_key: Option<String>,
    pub session_ttl_hours: i64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            name: "bakery".to_string(),
            username: "bakery".to_string(),
            password: String::new(),
            max_connections: 16,
            min_connections: 2,
            acquire_timeout: 5,
            statement_timeout_ms: 30_000,
            lazy_connect: false,
        }
    }
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("postgres://{}:{}@{}/{}", self.username, self.password, self.host, self.name),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            address: "127.0.0.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_API_BASE_PATH.to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            dev_auth_key: None,
            session_ttl_hours: 72,
        }
    }
}

impl AuthConfig {
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }

    /// The developer key, if one is configured and non-empty.
    pub fn dev_key(&self) -> Option<&str> {
        self.dev_auth_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Built-in defaults
    /// 2. Bakery.toml (base configuration file)
    /// 3. Environment variables prefixed with BAKERY_, sections separated by a double
    ///    underscore (e.g. BAKERY_AUTH__SESSION_TTL_HOURS)
    /// 4. Bare deployment variables: SERVER_IP, DB_NAME, DB_USERNAME, DB_PASSWORD,
    ///    DATABASE_URL and DEV_AUTH_KEY
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("Bakery.toml"))
            .merge(Env::prefixed("BAKERY_").split("__"))
            .merge(Env::raw().only(&["SERVER_IP"]).map(|_| "database.host".into()))
            .merge(Env::raw().only(&["DB_NAME"]).map(|_| "database.name".into()))
            .merge(Env::raw().only(&["DB_USERNAME"]).map(|_| "database.username".into()))
            .merge(Env::raw().only(&["DB_PASSWORD"]).map(|_| "database.password".into()))
            .merge(Env::raw().only(&["DATABASE_URL"]).map(|_| "database.url".into()))
            .merge(Env::raw().only(&["DEV_AUTH_KEY"]).map(|_| "auth.dev_auth_key".into()))
    }
}
