/*
 * Responsibility
 * - 環境変数 (.env を含む) から設定を読み込む
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::services::auth::AuthorityFailurePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Where access tokens are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityConfig {
    Static { tokens_file: PathBuf },
    Valkey { url: String, prefix: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub authority: AuthorityConfig,
    pub authority_timeout: Option<Duration>,
    pub authority_failure: AuthorityFailurePolicy,

    pub request_timeout: Duration,
    pub request_body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (process env, test maps).
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&get, "PORT", 3000)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(get("APP_ENV"));

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let authority = match get("TOKEN_AUTHORITY")
            .unwrap_or_else(|| "static".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "static" => AuthorityConfig::Static {
                tokens_file: get("STATIC_TOKENS_FILE")
                    .map(PathBuf::from)
                    .ok_or(ConfigError::Missing("STATIC_TOKENS_FILE"))?,
            },
            "valkey" => AuthorityConfig::Valkey {
                url: get("VALKEY_URL").ok_or(ConfigError::Missing("VALKEY_URL"))?,
                prefix: get("VALKEY_TOKEN_PREFIX").unwrap_or_else(|| "access_token".to_string()),
            },
            _ => return Err(ConfigError::Invalid("TOKEN_AUTHORITY")),
        };

        // 0 disables the lookup timeout.
        let authority_timeout_ms: u64 = parse_or(&get, "AUTHORITY_TIMEOUT_MS", 2000)?;
        let authority_timeout =
            (authority_timeout_ms > 0).then(|| Duration::from_millis(authority_timeout_ms));

        let authority_failure = parse_or(
            &get,
            "AUTHORITY_FAILURE_POLICY",
            AuthorityFailurePolicy::default(),
        )?;

        let request_timeout_seconds: u64 = parse_or(&get, "REQUEST_TIMEOUT_SECONDS", 30)?;
        if request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        let request_body_limit: usize = parse_or(&get, "REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            authority,
            authority_timeout,
            authority_failure,
            request_timeout: Duration::from_secs(request_timeout_seconds),
            request_body_limit,
        })
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_static_authority() {
        let config = config(&[("STATIC_TOKENS_FILE", "tokens.json")]).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(
            config.authority,
            AuthorityConfig::Static {
                tokens_file: PathBuf::from("tokens.json")
            }
        );
        assert_eq!(config.authority_timeout, Some(Duration::from_millis(2000)));
        assert_eq!(config.authority_failure, AuthorityFailurePolicy::Propagate);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit, 1024 * 1024);
    }

    #[test]
    fn static_authority_requires_tokens_file() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::Missing("STATIC_TOKENS_FILE")
        );
    }

    #[test]
    fn valkey_authority() {
        let config = config(&[
            ("TOKEN_AUTHORITY", "Valkey"),
            ("VALKEY_URL", "redis://localhost:6379"),
            ("AUTHORITY_TIMEOUT_MS", "0"),
            ("AUTHORITY_FAILURE_POLICY", "anonymous"),
            ("APP_ENV", "prod"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(
            config.authority,
            AuthorityConfig::Valkey {
                url: "redis://localhost:6379".into(),
                prefix: "access_token".into()
            }
        );
        assert_eq!(config.authority_timeout, None);
        assert_eq!(config.authority_failure, AuthorityFailurePolicy::Anonymous);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn valkey_authority_requires_url() {
        assert_eq!(
            config(&[("TOKEN_AUTHORITY", "valkey")]).unwrap_err(),
            ConfigError::Missing("VALKEY_URL")
        );
    }

    #[test]
    fn invalid_values_fail_startup() {
        let base = ("STATIC_TOKENS_FILE", "tokens.json");

        assert_eq!(
            config(&[base, ("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            config(&[base, ("AUTHORITY_FAILURE_POLICY", "retry")]).unwrap_err(),
            ConfigError::Invalid("AUTHORITY_FAILURE_POLICY")
        );
        assert_eq!(
            config(&[base, ("TOKEN_AUTHORITY", "ldap")]).unwrap_err(),
            ConfigError::Invalid("TOKEN_AUTHORITY")
        );
        assert_eq!(
            config(&[base, ("REQUEST_TIMEOUT_SECONDS", "0")]).unwrap_err(),
            ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")
        );
    }
}
