use std::fmt;
use std::net::IpAddr;

#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Drop and repopulate the store at startup.
    pub generate: bool,
    /// `None` when `GENERATE_TEST_ROWS` is not a non-negative integer that fits a row id.
    pub generate_test_rows: Option<u32>,
    pub per_page: u32,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

/// Loaded for completeness; nothing reads these yet.
#[derive(Clone, Default)]
pub struct SecurityConfig {
    pub secret_key: Option<String>,
    pub password_salt: Option<String>,
    pub password_hash: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_required = |key: &str| {
            lookup(key).ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let environment = match env_or("APP_ENV", "development").as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let database_url = match environment {
            Environment::Production => match lookup("DB_URL") {
                Some(url) => url,
                None => env_required("DATABASE_URL")?,
            },
            Environment::Development => env_required("DATABASE_URL")?,
        };

        let host: IpAddr = env_or("PROJBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROJBOARD_HOST: {e}"))?;

        let port: u16 = env_or("PROJBOARD_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PROJBOARD_PORT: {e}"))?;

        let default_level = match environment {
            Environment::Production => "info",
            Environment::Development => "debug",
        };
        let log_level = env_or("PROJBOARD_LOG_LEVEL", default_level);

        let generate = parse_flag(&env_or("GENERATE", "0"))
            .map_err(|e| format!("Invalid GENERATE: {e}"))?;

        let generate_test_rows = parse_rows(&env_or("GENERATE_TEST_ROWS", "0"));

        let per_page = parse_per_page(&env_or("DEFAULT_PER_PAGE", "10"))?;

        let security = SecurityConfig {
            secret_key: lookup("SECRET_KEY"),
            password_salt: lookup("SECURITY_PASSWORD_SALT"),
            password_hash: lookup("SECURITY_PASSWORD_HASH"),
        };

        Ok(Config {
            environment,
            database_url,
            host,
            port,
            log_level,
            generate,
            generate_test_rows,
            per_page,
            security,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("generate", &self.generate)
            .field("generate_test_rows", &self.generate_test_rows)
            .field("per_page", &self.per_page)
            .field("security", &self.security)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("SecurityConfig")
            .field("secret_key", &redact(&self.secret_key))
            .field("password_salt", &redact(&self.password_salt))
            .field("password_hash", &redact(&self.password_hash))
            .finish()
    }
}

/// Integer flag: any non-zero value enables.
fn parse_flag(value: &str) -> Result<bool, std::num::ParseIntError> {
    value.trim().parse::<i64>().map(|v| v != 0)
}

/// Row ids are `INTEGER`, so counts past `i32::MAX` are rejected like any
/// other bad value.
fn parse_rows(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&rows| i32::try_from(rows).is_ok())
}

fn parse_per_page(value: &str) -> Result<u32, String> {
    let per_page: u32 = value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid DEFAULT_PER_PAGE: {e}"))?;
    if per_page == 0 || i32::try_from(per_page).is_err() {
        return Err(format!("DEFAULT_PER_PAGE must be between 1 and {}", i32::MAX));
    }
    Ok(per_page)
}
