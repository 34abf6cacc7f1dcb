//! Access-control settings.
//!
//! `ACCESS_DEFAULT_POLICY` decides what happens to a path that has no access
//! rule. The dashboard has always treated such paths as public, so `allow`
//! stays the default; set `deny` to make every unregistered path fail closed.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPolicy {
    #[default]
    Allow,
    Deny,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid default policy '{0}', expected 'allow' or 'deny'")]
pub struct InvalidPolicy(pub String);

impl FromStr for DefaultPolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(DefaultPolicy::Allow),
            "deny" => Ok(DefaultPolicy::Deny),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for DefaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultPolicy::Allow => f.write_str("allow"),
            DefaultPolicy::Deny => f.write_str("deny"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccessConfig {
    pub default_policy: DefaultPolicy,
    pub login_path: String,
    pub unauthorized_path: String,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        let default_policy = match env::var("ACCESS_DEFAULT_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: InvalidPolicy| {
                // A typo here must not silently open every unregistered path.
                warn!(error = %e, "Falling back to deny for unregistered paths");
                DefaultPolicy::Deny
            }),
            Err(_) => DefaultPolicy::Allow,
        };

        Self {
            default_policy,
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".to_string()),
            unauthorized_path: env::var("UNAUTHORIZED_PATH")
                .unwrap_or_else(|_| "/unauthorized".to_string()),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            default_policy: DefaultPolicy::Allow,
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("allow".parse::<DefaultPolicy>(), Ok(DefaultPolicy::Allow));
        assert_eq!(" DENY ".parse::<DefaultPolicy>(), Ok(DefaultPolicy::Deny));
        assert!("maybe".parse::<DefaultPolicy>().is_err());
    }

    #[test]
    fn test_default_policy_is_allow() {
        assert_eq!(DefaultPolicy::default(), DefaultPolicy::Allow);
        assert_eq!(AccessConfig::default().default_policy, DefaultPolicy::Allow);
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [DefaultPolicy::Allow, DefaultPolicy::Deny] {
            assert_eq!(policy.to_string().parse::<DefaultPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_default_redirect_paths() {
        let config = AccessConfig::default();
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.unauthorized_path, "/unauthorized");
    }
}
