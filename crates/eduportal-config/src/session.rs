use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// JSON file mirroring the signed-in user between restarts.
    pub storage_path: PathBuf,
    /// Upper bound on session bootstrap; expiry resolves to signed out.
    pub bootstrap_timeout: Duration,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            storage_path: env::var("SESSION_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/session.json")),
            bootstrap_timeout: Duration::from_millis(
                env::var("SESSION_BOOTSTRAP_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5000),
            ),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("storage/session.json"),
            bootstrap_timeout: Duration::from_secs(5),
        }
    }
}
