//! Generation orchestrator.
//!
//! Every operation resolves a completion client, builds its prompt, makes
//! one bounded call and, if there is no client or the call fails, answers
//! with mock content instead. Failures never reach the caller: results are
//! always `succeeded`, and the status message says where the text came from.

use std::borrow::Cow;
use log::{debug, info, warn};

use crate::config::{Endpoints, SpinnerConfig};
use crate::failover::RetryPolicy;
use crate::providers::{CompletionClient, CompletionParams};
use crate::request::{
  GenerationRequest, GenerationResult, SuggestionRequest, SuggestionResult,
  VariationRequest,
};
use crate::{mock, prompt};

pub const SCRIPT_PARAMS: CompletionParams = CompletionParams
{   max_tokens: 1000
  , temperature: 0.7
};

pub const VARIATION_PARAMS: CompletionParams = CompletionParams
{   max_tokens: 800
  , temperature: 0.8
};

pub const SUGGESTION_PARAMS: CompletionParams = CompletionParams
{   max_tokens: 300
  , temperature: 0.8
};

/// Where a piece of generated text came from
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance
{   /// Live completion
    Provider
    {   provider: &'static str
      , model: String
    }
  , /// No credential resolved to a client
    NoClient
  , /// The call failed; carries the reason
    Fallback(crate::error::Error)
}

impl Provenance
{   pub fn is_fallback(&self) -> bool
    {   !matches!(self, Provenance::Provider { .. })
    }

    pub fn status_message(&self) -> String
    {   match self
        {   Provenance::Provider { provider, model } => {
              format!("Generated using {}/{}", provider, model)
            }
          , Provenance::NoClient => {
              "Generated using mock data (no API key provided)".to_string()
            }
          , Provenance::Fallback(e) => {
              format!("Using fallback generation due to: {}", e)
            }
        }
    }
}

/// Shared, read-only orchestrator; one per process
pub struct ScriptGenerator
{   default_client: CompletionClient
  , default_model: String
  , endpoints: Endpoints
  , http_client: reqwest::Client
  , retry: RetryPolicy
}

impl ScriptGenerator
{   /// Build from configuration; the default client exists only
    /// when a default credential is configured.
    pub fn new(config: &SpinnerConfig) -> Self
    {   let http_client = reqwest::Client::new();
        let default_client = CompletionClient::resolve(
          crate::Provider::OpenAI.name()
        , config.default_api_key.as_deref().unwrap_or("")
        , &config.endpoints
        , &http_client
        );
        info!(
          "Default client {}",
          if default_client.is_available() { "configured" } else { "absent" }
        );

        ScriptGenerator
        {   default_client
          , default_model: config.default_model.clone()
          , endpoints: config.endpoints.clone()
          , http_client
          , retry: RetryPolicy::from(&config.failover)
        }
    }

    /// Replace the timeout/retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self
    {   self.retry = retry;
        self
    }

    /// Whether a process-wide default client exists
    pub fn is_configured(&self) -> bool
    {   self.default_client.is_available()
    }

    pub fn default_model(&self) -> &str
    {   &self.default_model
    }

    /// Client for the request's credentials, else the default client
    pub fn resolve_client(
      &self
    , provider: &str
    , credential: &str
    ) -> Cow<'_, CompletionClient>
    {   let client = CompletionClient::resolve(
          provider,
          credential,
          &self.endpoints,
          &self.http_client
        );
        if client.is_available()
        {   debug!("Using request credential for {}", client.provider_name());
            Cow::Owned(client)
        } else
        {   debug!("Falling back to default client");
            Cow::Borrowed(&self.default_client)
        }
    }

    fn model_for<'a>(&'a self, requested: &'a str) -> &'a str
    {   if requested.trim().is_empty()
        {   &self.default_model
        } else
        {   requested
        }
    }

    /// One live attempt. `Err` carries why mock content must be used.
    async fn complete(
      &self
    , provider: &str
    , credential: &str
    , model: &str
    , params: CompletionParams
    , prompt: String
    ) -> Result<(String, Provenance), Provenance>
    {   let client = self.resolve_client(provider, credential);
        if !client.is_available()
        {   return Err(Provenance::NoClient);
        }

        let model = self.model_for(model);
        debug!(
          "Calling {}/{} (max_tokens={}, temperature={})",
          client.provider_name(), model, params.max_tokens, params.temperature
        );

        match self.retry.run(|| client.complete(&prompt, model, params)).await
        {   Ok(text) => {
              info!("Generated with {}/{}", client.provider_name(), model);
              Ok((
                text,
                Provenance::Provider
                {   provider: client.provider_name()
                  , model: model.to_string()
                }
              ))
            }
          , Err(e) => Err(Provenance::Fallback(e))
        }
    }

    /// Write a 60-second script
    pub async fn generate_script(
      &self
    , request: &GenerationRequest
    ) -> GenerationResult
    {   debug!("generate_script style={:?}", request.style);
        let outcome = self.complete(
          &request.provider,
          &request.credential,
          &request.model,
          SCRIPT_PARAMS,
          prompt::build_script_prompt(request)
        ).await;

        match outcome
        {   Ok((text, provenance)) => generated(text, &provenance)
          , Err(provenance) => {
              generated(mock::mock_script(&request.style), &provenance)
            }
        }
    }

    /// Rewrite an existing script
    pub async fn generate_variation(
      &self
    , request: &VariationRequest
    ) -> GenerationResult
    {   debug!("generate_variation kind={:?}", request.variation_kind);
        let outcome = self.complete(
          &request.provider,
          &request.credential,
          &request.model,
          VARIATION_PARAMS,
          prompt::build_variation_prompt(
            &request.original_script,
            &request.variation_kind
          )
        ).await;

        match outcome
        {   Ok((text, provenance)) => generated(text, &provenance)
          , Err(provenance) => {
              generated(
                mock::mock_variation(&request.variation_kind).to_string(),
                &provenance
              )
            }
        }
    }

    /// Topic ideas for a query, at most `limit` of them
    pub async fn get_suggestions(
      &self
    , request: &SuggestionRequest
    ) -> SuggestionResult
    {   debug!("get_suggestions limit={}", request.limit);
        let outcome = self.complete(
          &request.provider,
          &request.credential,
          &request.model,
          SUGGESTION_PARAMS,
          prompt::build_suggestion_prompt(&request.query, request.limit)
        ).await;

        let (suggestions, provenance) = match outcome
        {   Ok((text, provenance)) => {
              let lines = split_suggestions(&text, request.limit);
              if lines.is_empty()
              {   warn!("Provider returned no usable suggestions");
                  let reason = Provenance::Fallback(
                    crate::error::Error::ParseError(
                      "no suggestions in response".to_string()
                    )
                  );
                  (mock::mock_suggestions(&request.query, request.limit), reason)
              } else
              {   (lines, provenance)
              }
            }
          , Err(provenance) => {
              (mock::mock_suggestions(&request.query, request.limit), provenance)
            }
        };

        SuggestionResult
        {   suggestions
          , succeeded: true
          , status_message: report(&provenance)
        }
    }
}

/// Status message for a finished operation; mock answers are logged louder
fn report(provenance: &Provenance) -> String
{   let message = provenance.status_message();
    if provenance.is_fallback()
    {   warn!("Answering with mock content: {}", message);
    } else
    {   debug!("{}", message);
    }
    message
}

fn generated(text: String, provenance: &Provenance) -> GenerationResult
{   GenerationResult
    {   text
      , succeeded: true
      , status_message: report(provenance)
    }
}

/// Non-blank trimmed lines, at most `limit`
pub fn split_suggestions(text: &str, limit: usize) -> Vec<String>
{   text.lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .take(limit)
      .map(str::to_string)
      .collect()
}
