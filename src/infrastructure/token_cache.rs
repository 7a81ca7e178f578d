//! Access-token cache file

use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Seconds a cached token stays usable after acquisition
pub const TOKEN_VALIDITY_SECS: i64 = 7200;

/// A bearer token together with its acquisition time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub obtained_at: i64,
}

impl CachedToken {
    /// A token is fresh only while strictly inside the validity window.
    /// A future-dated acquisition time counts as stale.
    pub fn is_fresh(&self, now: i64) -> bool {
        let age = now - self.obtained_at;
        age > 0 && age < TOKEN_VALIDITY_SECS
    }
}

/// On-disk cache holding one token as "<epoch-seconds> <token>"
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: PathBuf) -> Self {
        TokenCache { path }
    }

    /// Read the cached token; None when the file is missing or malformed
    pub fn read(&self) -> Option<CachedToken> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let mut parts = contents.split_whitespace();

        let obtained_at = parts.next()?.parse::<f64>().ok()? as i64;
        let value = parts.next()?.to_string();

        Some(CachedToken { value, obtained_at })
    }

    /// Persist a token with its acquisition timestamp
    pub fn write(&self, token: &CachedToken) -> Result<()> {
        fs::write(&self.path, format!("{}\t{}", token.obtained_at, token.value))?;
        Ok(())
    }

    /// Return the cached token while it is fresh; otherwise call `refresh`
    /// exactly once, store the result and return it.
    pub fn token<F>(&self, now: i64, refresh: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(cached) = self.read() {
            if cached.is_fresh(now) {
                return Ok(cached.value);
            }
        }

        debug!("access token missing or expired, refreshing");
        let value = refresh()?;
        self.write(&CachedToken {
            value: value.clone(),
            obtained_at: now,
        })?;

        Ok(value)
    }
}
