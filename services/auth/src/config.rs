use stepauth_core::config::{ConfigError, parse_var_or, required_var};

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing access credentials. Env var: `JWT_SECRET` (required).
    pub jwt_secret: String,
    /// TCP port to listen on (default 3000). Env var: `PORT`.
    pub port: u16,
    /// Mark issued cookies `Secure` (default false). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Seconds between expired-session sweeps; 0 disables the sweep (default).
    /// Env var: `SESSION_REAPER_INTERVAL_SECS`.
    pub session_reaper_interval_secs: u64,
}

impl AuthConfig {
    /// Load from the process environment. A missing `JWT_SECRET` is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: required_var("JWT_SECRET")?,
            port: parse_var_or("PORT", 3000)?,
            cookie_secure: parse_var_or("COOKIE_SECURE", false)?,
            session_reaper_interval_secs: parse_var_or("SESSION_REAPER_INTERVAL_SECS", 0)?,
        })
    }
}
