//! Server configuration from the environment

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::infra::mailjet::{DEFAULT_SENDER_EMAIL, MailjetConfig};
use platform::password::PasswordScheme;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub addr: SocketAddr,
    pub db_max_connections: u32,
    pub db_connect_timeout: Duration,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    /// `None` disables email delivery
    pub mailjet: Option<MailjetConfig>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host: IpAddr = var("API_HOST")
            .as_deref()
            .unwrap_or(DEFAULT_HOST)
            .parse()
            .context("API_HOST must be an IP address")?;
        let port = match var("API_PORT") {
            Some(port) => port.parse().context("API_PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(n) => n.parse().context("DB_MAX_CONNECTIONS must be a number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let connect_timeout_ms = match var("DB_CONNECT_TIMEOUT_MS") {
            Some(ms) => ms.parse().context("DB_CONNECT_TIMEOUT_MS must be a number")?,
            None => DEFAULT_CONNECT_TIMEOUT_MS,
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let auth = match var("COOKIE_PROFILE").as_deref() {
            None | Some("production") => AuthConfig::default(),
            Some("development") => AuthConfig::development(),
            Some(other) => bail!("COOKIE_PROFILE must be production or development, got {other}"),
        };
        let auth = match var("PASSWORD_SCHEME") {
            Some(code) => auth.with_password_scheme(
                PasswordScheme::from_code(&code)
                    .with_context(|| format!("Unknown PASSWORD_SCHEME: {code}"))?,
            ),
            None => auth,
        };

        let mailjet = match (var("MAILJET_API_KEY"), var("MAILJET_SECRET_KEY")) {
            (Some(api_key), Some(secret_key)) => Some(MailjetConfig {
                api_key,
                secret_key,
                sender_email: var("MAILJET_SENDER_EMAIL")
                    .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            addr: SocketAddr::new(host, port),
            db_max_connections,
            db_connect_timeout: Duration::from_millis(connect_timeout_ms),
            frontend_origins,
            auth,
            mailjet,
        })
    }
}
