use std::env;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_base_url: String,
    pub review_max_attempts: u32,
    pub review_base_delay_ms: u64,
    pub review_max_results: usize,
    pub parallel_builds: bool,
    pub build_failure_policy: BuildFailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let anthropic_model =
            env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let anthropic_base_url =
            env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let review_max_attempts = env::var("REVIEW_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let review_base_delay_ms = env::var("REVIEW_BASE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_000);

        let review_max_results = env::var("REVIEW_MAX_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let parallel_builds = env::var("PARALLEL_BUILDS")
            .ok()
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let build_failure_policy = match env::var("BUILD_FAILURE_POLICY") {
            Ok(v) => v.parse()?,
            Err(_) => BuildFailurePolicy::FailFast,
        };

        if review_max_attempts == 0 {
            return Err(Error::Config(
                "REVIEW_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            anthropic_api_key,
            anthropic_model,
            anthropic_base_url,
            review_max_attempts,
            review_base_delay_ms,
            review_max_results,
            parallel_builds,
            build_failure_policy,
        })
    }

    pub fn api_key(&self) -> Result<&str> {
        self.anthropic_api_key.as_deref().ok_or_else(|| {
            Error::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            anthropic_model: DEFAULT_MODEL.to_string(),
            anthropic_base_url: DEFAULT_BASE_URL.to_string(),
            review_max_attempts: 3,
            review_base_delay_ms: 1_000,
            review_max_results: 50,
            parallel_builds: false,
            build_failure_policy: BuildFailurePolicy::FailFast,
        }
    }
}

/// What the pipeline does when one of the per-template builds fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildFailurePolicy {
    /// Abort the whole run on the first failed build.
    #[default]
    FailFast,
    /// Keep the successful builds; fail only when none succeed.
    SkipFailed,
}

impl std::str::FromStr for BuildFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Ok(BuildFailurePolicy::FailFast),
            "skip-failed" | "skip_failed" | "partial" => Ok(BuildFailurePolicy::SkipFailed),
            other => Err(Error::Config(format!(
                "unknown BUILD_FAILURE_POLICY '{}' (expected fail-fast or skip-failed)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub parallel_builds: bool,
    pub build_failure_policy: BuildFailurePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel_builds: false,
            build_failure_policy: BuildFailurePolicy::FailFast,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            parallel_builds: config.parallel_builds,
            build_failure_policy: config.build_failure_policy,
        }
    }
}

impl From<&Config> for RetryPolicy {
    fn from(config: &Config) -> Self {
        RetryPolicy::new(
            config.review_max_attempts,
            Duration::from_millis(config.review_base_delay_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_parsing() {
        assert_eq!(
            "fail-fast".parse::<BuildFailurePolicy>().unwrap(),
            BuildFailurePolicy::FailFast
        );
        assert_eq!(
            " Skip-Failed ".parse::<BuildFailurePolicy>().unwrap(),
            BuildFailurePolicy::SkipFailed
        );
        assert!("sometimes".parse::<BuildFailurePolicy>().is_err());
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = Config {
            review_max_attempts: 4,
            review_base_delay_ms: 250,
            ..Config::default()
        };
        let policy = RetryPolicy::from(&config);
        assert_eq!(policy.max_attempts, 4);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::default();
        assert!(matches!(config.api_key(), Err(Error::Config(_))));
    }
}
