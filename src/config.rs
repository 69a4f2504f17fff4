//! Configuration for the spinner service and its providers

use serde::{Deserialize, Serialize};
use log::{debug, warn};

pub const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";
pub const OPENROUTER_API_BASE: &str
  = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] =
[   "http://localhost:3000"
  , "http://127.0.0.1:3000"
  , "http://localhost:3001"
];

/// Base URLs for the chat-completion endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints
{   /// Primary endpoint (`openai`)
    pub openai: String
  , /// OpenRouter-compatible endpoint (`openrouter`)
    pub openrouter: String
}

impl Default for Endpoints
{   fn default() -> Self
    {   Endpoints
        {   openai: OPENAI_API_BASE.to_string()
          , openrouter: OPENROUTER_API_BASE.to_string()
        }
    }
}

/// Timeout and retry settings for remote calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailoverConfig
{   /// Retries after the first attempt
    pub max_retries: usize
  , /// Backoff multiplier for retries
    pub backoff_multiplier: f32
  , /// Initial backoff duration in milliseconds
    pub initial_backoff_ms: u64
  , /// Per-attempt timeout in seconds
    pub timeout_secs: u64
}

impl Default for FailoverConfig
{   fn default() -> Self
    {   FailoverConfig
        {   max_retries: 1
          , backoff_multiplier: 2.0
          , initial_backoff_ms: 250
          , timeout_secs: 30
        }
    }
}

/// Spinner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinnerConfig
{   /// Credential for the process-wide default client
    pub default_api_key: Option<String>
  , /// Model used when a request does not name one
    pub default_model: String
  , /// Address the HTTP server binds to
    pub bind_addr: String
  , /// Origins allowed by CORS
    pub allowed_origins: Vec<String>
  , /// Endpoint base URLs
    pub endpoints: Endpoints
  , /// Timeout and retry settings
    pub failover: FailoverConfig
}

impl Default for SpinnerConfig
{   fn default() -> Self
    {   SpinnerConfig
        {   default_api_key: None
          , default_model: DEFAULT_MODEL.to_string()
          , bind_addr: DEFAULT_BIND_ADDR.to_string()
          , allowed_origins: DEFAULT_ALLOWED_ORIGINS
              .iter()
              .map(|o| o.to_string())
              .collect()
          , endpoints: Endpoints::default()
          , failover: FailoverConfig::default()
        }
    }
}

impl SpinnerConfig
{   /// Build configuration from process environment variables
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let get = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };
        let mut config = SpinnerConfig::default();

        config.default_api_key = get("OPENAI_API_KEY");
        if config.default_api_key.is_none()
        {   warn!("OPENAI_API_KEY not set, default client disabled");
        }
        if let Some(model) = get("DEFAULT_MODEL")
        {   config.default_model = model;
        }
        if let Some(addr) = get("SPINNER_BIND_ADDR")
        {   config.bind_addr = addr;
        }
        if let Some(origins) = get("SPINNER_ALLOWED_ORIGINS")
        {   config.allowed_origins = origins
              .split(',')
              .map(|o| o.trim().to_string())
              .filter(|o| !o.is_empty())
              .collect();
        }
        if let Some(base) = get("OPENAI_API_BASE")
        {   config.endpoints.openai = base;
        }
        if let Some(base) = get("OPENROUTER_API_BASE")
        {   config.endpoints.openrouter = base;
        }
        if let Some(secs) = get("SPINNER_TIMEOUT_SECS")
        {   config.failover.timeout_secs
              = parse_number("SPINNER_TIMEOUT_SECS", &secs)?;
        }
        if let Some(retries) = get("SPINNER_MAX_RETRIES")
        {   config.failover.max_retries
              = parse_number("SPINNER_MAX_RETRIES", &retries)?;
        }

        debug!(
          "Loaded config: model={}, bind={}, origins={}",
          config.default_model,
          config.bind_addr,
          config.allowed_origins.len()
        );
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(
  key: &str
, value: &str
) -> Result<T, crate::error::Error>
{   value.parse::<T>().map_err(|_| {
      crate::error::Error::InvalidConfiguration(
        format!("{} must be a non-negative integer, got {:?}", key, value)
      )
    })
}
