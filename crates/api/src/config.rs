/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Base URL of the MCP suggestion service.
    pub mcp_server_url: String,
    /// Timeout for a single MCP call in seconds (default: `5`).
    pub mcp_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `MCP_SERVER_URL`       | `http://localhost:3100`    |
    /// | `MCP_TIMEOUT_SECS`     | `5`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(studio_db::DEFAULT_MAX_CONNECTIONS);

        let mcp_server_url =
            std::env::var("MCP_SERVER_URL").unwrap_or_else(|_| "http://localhost:3100".into());

        let mcp_timeout_secs: u64 = std::env::var("MCP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("MCP_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            mcp_server_url,
            mcp_timeout_secs,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
