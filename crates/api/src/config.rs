/// Error raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL.
    pub url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database credentials have defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for draining in-flight requests on shutdown (default: `10`).
    pub shutdown_timeout_secs: u64,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                                  |
    /// |-------------------------|------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                |
    /// | `PORT` / `SERVER_PORT`  | `8080`                                   |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                     |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`                                     |
    /// | `DATABASE_URL`          | built from `POSTGRES_*`                  |
    /// | `POSTGRES_USER`         | required if `DATABASE_URL` is unset      |
    /// | `POSTGRES_PASSWORD`     | required if `DATABASE_URL` is unset      |
    /// | `POSTGRES_HOST`         | `localhost`                              |
    /// | `POSTGRES_PORT`         | `5432`                                   |
    /// | `POSTGRES_DB`           | value of `POSTGRES_USER`                 |
    /// | `DB_MAX_CONNECTIONS`    | `20`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match get("PORT") {
            Some(value) => parse("PORT", value)?,
            None => parse_or("SERVER_PORT", get("SERVER_PORT"), 8080)?,
        };
        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30)?;
        let shutdown_timeout_secs =
            parse_or("SHUTDOWN_TIMEOUT_SECS", get("SHUTDOWN_TIMEOUT_SECS"), 10)?;

        let url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let user = get("POSTGRES_USER").ok_or(ConfigError::Missing("POSTGRES_USER"))?;
                let password =
                    get("POSTGRES_PASSWORD").ok_or(ConfigError::Missing("POSTGRES_PASSWORD"))?;
                let db_host = get("POSTGRES_HOST").unwrap_or_else(|| "localhost".into());
                let db_port = get("POSTGRES_PORT").unwrap_or_else(|| "5432".into());
                let db_name = get("POSTGRES_DB").unwrap_or_else(|| user.clone());
                format!("postgres://{user}:{password}@{db_host}:{db_port}/{db_name}?sslmode=disable")
            }
        };
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 20)?;

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            shutdown_timeout_secs,
            database: DatabaseConfig {
                url,
                max_connections,
            },
        })
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |v| parse(var, v))
}
