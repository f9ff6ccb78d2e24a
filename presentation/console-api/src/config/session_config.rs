use std::env;

use anyhow::Context;
use chrono::TimeDelta;

const DEFAULT_IDLE_TTL_SECS: i64 = 3600;

/// How long an untouched console session is kept.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// `None` keeps sessions until they are closed.
    pub idle_ttl: Option<TimeDelta>,
}

impl SessionConfig {
    /// Environment variables:
    /// - SESSION_IDLE_TTL_SECS: idle lifetime in seconds, 0 disables expiry (default: 3600)
    ///
    /// # Errors
    /// Returns error if the variable is set but is not a non-negative integer
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(env::var("SESSION_IDLE_TTL_SECS").ok().as_deref())
    }

    fn parse(idle_ttl: Option<&str>) -> anyhow::Result<Self> {
        let secs = match idle_ttl.map(str::trim).filter(|t| !t.is_empty()) {
            Some(secs) => secs
                .parse::<u32>()
                .with_context(|| format!("invalid SESSION_IDLE_TTL_SECS: {secs}"))?
                .into(),
            None => DEFAULT_IDLE_TTL_SECS,
        };

        Ok(Self {
            idle_ttl: (secs > 0).then(|| TimeDelta::seconds(secs)),
        })
    }
}
