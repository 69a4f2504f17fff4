//! Completion providers and client resolution

pub mod openai;

pub use openai::ChatCompletionsClient;

use log::{debug, error};

use crate::config::Endpoints;
use crate::Provider;

/// Sampling settings for a single completion call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams
{   pub max_tokens: u32
  , pub temperature: f32
}

/// A resolved completion capability.
/// `Unavailable` stands in wherever no call can be made.
#[derive(Debug, Clone)]
pub enum CompletionClient
{   /// Primary chat-completions endpoint
    Primary(ChatCompletionsClient)
  , /// OpenRouter-compatible endpoint, same wire format
    Compatible(ChatCompletionsClient)
  , Unavailable
}

impl CompletionClient
{   /// Map a provider name and credential to a client.
    /// Never performs network I/O.
    pub fn resolve(
      provider: &str
    , api_key: &str
    , endpoints: &Endpoints
    , http_client: &reqwest::Client
    ) -> Self
    {   if api_key.trim().is_empty()
        {   debug!("No credential for provider {:?}", provider);
            return CompletionClient::Unavailable;
        }

        match Provider::from_name(provider)
        {   Some(Provider::OpenAI) => {
              CompletionClient::Primary(ChatCompletionsClient::new(
                endpoints.openai.clone()
              , api_key
              , http_client.clone()
              ))
            }
          , Some(Provider::OpenRouter) => {
              CompletionClient::Compatible(ChatCompletionsClient::new(
                endpoints.openrouter.clone()
              , api_key
              , http_client.clone()
              ))
            }
          , Some(reserved) => {
              debug!("{}", crate::error::Error::ProviderNotImplemented(
                reserved.name().to_string()
              ));
              CompletionClient::Unavailable
            }
          , None => {
              debug!("Unknown provider {:?}", provider);
              CompletionClient::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool
    {   !matches!(self, CompletionClient::Unavailable)
    }

    /// Provider name used in status messages
    pub fn provider_name(&self) -> &'static str
    {   match self
        {   CompletionClient::Primary(_) => Provider::OpenAI.name()
          , CompletionClient::Compatible(_) => Provider::OpenRouter.name()
          , CompletionClient::Unavailable => "none"
        }
    }

    pub async fn complete(
      &self
    , prompt: &str
    , model: &str
    , params: CompletionParams
    ) -> Result<String, crate::error::Error>
    {   match self
        {   CompletionClient::Primary(client)
          | CompletionClient::Compatible(client) => {
              client.complete(
                prompt,
                model,
                params.max_tokens,
                params.temperature
              ).await
            }
          , CompletionClient::Unavailable => {
              error!("complete called on unavailable client");
              Err(crate::error::Error::MissingApiKey(
                "unresolved provider".to_string()
              ))
            }
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    fn resolve(provider: &str, key: &str) -> CompletionClient
    {   CompletionClient::resolve(
          provider,
          key,
          &Endpoints::default(),
          &reqwest::Client::new()
        )
    }

    #[test]
    fn empty_credential_is_unavailable_for_every_provider()
    {   for provider in ["openai", "openrouter", "anthropic", "bogus"]
        {   assert!(!resolve(provider, "").is_available());
            assert!(!resolve(provider, "  ").is_available());
        }
    }

    #[test]
    fn openai_targets_primary_endpoint()
    {   match resolve("openai", "sk-test")
        {   CompletionClient::Primary(client) => {
              assert_eq!(client.api_base(), crate::config::OPENAI_API_BASE);
            }
          , other => panic!("expected primary client, got {:?}", other)
        }
    }

    #[test]
    fn openrouter_targets_compatible_endpoint()
    {   match resolve("openrouter", "sk-or-test")
        {   CompletionClient::Compatible(client) => {
              assert_eq!(
                client.api_base(),
                crate::config::OPENROUTER_API_BASE
              );
            }
          , other => panic!("expected compatible client, got {:?}", other)
        }
    }

    #[test]
    fn provider_case_variants_are_unavailable()
    {   for provider in ["OpenAI", "OPENAI", " openai", "OpenRouter"]
        {   assert!(!resolve(provider, "sk-test").is_available(), "{:?}", provider);
        }
    }

    #[test]
    fn reserved_and_unknown_providers_are_unavailable()
    {   assert!(!resolve("anthropic", "key").is_available());
        assert!(!resolve("google", "key").is_available());
        assert!(!resolve("mistral", "key").is_available());
    }

    #[tokio::test]
    async fn unavailable_client_refuses_to_complete()
    {   let params = CompletionParams
        {   max_tokens: 10
          , temperature: 0.5
        };
        let result = CompletionClient::Unavailable
          .complete("hi", "gpt-4", params)
          .await;
        assert!(matches!(
          result,
          Err(crate::error::Error::MissingApiKey(_))
        ));
    }
}
