use std::fmt;

/// Custom error type for spinner operations
/// Implements Clone so results can be logged and reported freely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No credential available for a provider
    MissingApiKey(String)
  , /// Provider name is reserved but has no client yet
    ProviderNotImplemented(String)
  , /// Transport level failure (connect, DNS, TLS, body read)
    HttpError(String)
  , /// Endpoint answered with a non-success status
    ApiError
    {   status: u16
      , message: String
    }
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Rate limit exceeded
    RateLimitExceeded
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Request failed validation
    InvalidRequest(String)
  , /// Timeout error
    Timeout
  , /// Generic error
    Other(String)
}

impl Error
{   /// Whether a second attempt at the same call could succeed
    pub fn is_transient(&self) -> bool
    {   match self
        {   Error::HttpError(_)
          | Error::RateLimitExceeded
          | Error::Timeout => true
          , Error::ApiError { status, .. } => *status >= 500
          , _ => false
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(provider) => {
              write!(f, "Missing API key for: {}", provider)
            }
          , Error::ProviderNotImplemented(provider) => {
              write!(f,
                "Provider not yet implemented: {}",
                provider
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, message } => {
              write!(f, "API error ({}): {}", status, message)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::RateLimitExceeded => {
              write!(f, "API rate limit exceeded")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::InvalidRequest(msg) => {
              write!(f, "Invalid request: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
