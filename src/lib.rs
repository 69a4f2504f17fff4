pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod failover;
pub mod catalog;
pub mod prompt;
pub mod mock;
pub mod generator;
pub mod server;
use serde::{Deserialize, Serialize};

/*

spinner: a small service that turns a topic, a hook and a style into a
60-second short-video script, rewrites scripts into variations, and
suggests video topics. it always answers: when no provider key is set,
or the provider call fails, it answers with canned content instead.

spinner/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and provider names
│   ├── main.rs         # Binary: env, logging, HTTP server
│   ├── error.rs        # Error type
│   ├── config.rs       # Environment configuration
│   ├── request.rs      # Request/response types
│   ├── providers/      # Completion clients and resolution
│   ├── failover.rs     # Timeout and retry policy
│   ├── prompt.rs       # Prompt templates
│   ├── mock.rs         # Canned fallback content
│   ├── catalog.rs      # Suggestion catalog and matcher
│   ├── generator.rs    # The orchestrator
│   └── server.rs       # axum routes
└── tests/

*/

pub use config::SpinnerConfig;
pub use error::Error;
pub use generator::{Provenance, ScriptGenerator};
pub use request::{
  GenerationRequest, GenerationResult, SuggestionRequest, SuggestionResult,
  VariationKind, VariationRequest,
};

/// Provider names a request may carry.
/// Only `OpenAI` and `OpenRouter` have clients; the rest are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider
{   /// OpenAI chat completions (the primary endpoint)
    OpenAI
  , /// OpenRouter (unified API over many providers)
    OpenRouter
  , /// Anthropic (Claude models), reserved
    Anthropic
  , /// Google (AI Studio: Gemini), reserved
    Google
}

impl Provider
{   /// Parse a request's provider field; names match exactly
    pub fn from_name(name: &str) -> Option<Self>
    {   match name
        {   "openai" => Some(Provider::OpenAI)
          , "openrouter" => Some(Provider::OpenRouter)
          , "anthropic" => Some(Provider::Anthropic)
          , "google" => Some(Provider::Google)
          , _ => None
        }
    }

    pub fn name(&self) -> &'static str
    {   match self
        {   Provider::OpenAI => "openai"
          , Provider::OpenRouter => "openrouter"
          , Provider::Anthropic => "anthropic"
          , Provider::Google => "google"
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn provider_names_round_trip()
    {   for provider in [
          Provider::OpenAI
        , Provider::OpenRouter
        , Provider::Anthropic
        , Provider::Google
        ]
        {   assert_eq!(Provider::from_name(provider.name()), Some(provider));
        }
        assert_eq!(Provider::from_name("mistral"), None);
    }

    #[test]
    fn provider_names_are_exact()
    {   for name in ["OpenAI", " openai", "OPENAI", "OpenRouter", "openrouter "]
        {   assert_eq!(Provider::from_name(name), None, "{:?}", name);
        }
    }
}
