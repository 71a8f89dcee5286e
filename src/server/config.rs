use crate::server::{
    error::{config::ConfigError, AppError},
    service::inventory::DEFAULT_LOW_STOCK_THRESHOLD,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Top of every hour.
const DEFAULT_EXPIRY_SWEEP_CRON: &str = "0 0 * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Stock level in millilitres below which hospital admins get an alert.
    pub low_stock_threshold: i32,
    /// Lets a request's recipient trigger donor matching themselves.
    pub allow_recipient_matching: bool,
    /// Six-field cron expression for the expired stock sweep.
    pub expiry_sweep_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Unset optional variables fall back to their defaults; set but malformed
    /// values are rejected rather than ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let low_stock_threshold = match lookup("LOW_STOCK_THRESHOLD_ML") {
            Some(value) => parse_threshold(&value)?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        let allow_recipient_matching = match lookup("ALLOW_RECIPIENT_MATCHING") {
            Some(value) => parse_flag("ALLOW_RECIPIENT_MATCHING", &value)?,
            None => false,
        };

        let expiry_sweep_cron =
            lookup("EXPIRY_SWEEP_CRON").unwrap_or_else(|| DEFAULT_EXPIRY_SWEEP_CRON.to_string());

        Ok(Self {
            database_url,
            bind_addr,
            low_stock_threshold,
            allow_recipient_matching,
            expiry_sweep_cron,
        })
    }
}

fn parse_threshold(value: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "LOW_STOCK_THRESHOLD_ML".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parsed: i32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number of millilitres"))?;

    if parsed <= 0 {
        return Err(invalid("must be greater than zero"));
    }

    Ok(parsed)
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true, false, 1 or 0".to_string(),
        }),
    }
}
