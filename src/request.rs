//! Request and response types for the three generation operations

use serde::{Deserialize, Serialize};

fn default_provider() -> String
{   crate::Provider::OpenAI.name().to_string()
}

fn default_limit() -> usize
{   6
}

/// Known script transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationKind
{   Shorter
  , Engaging
  , Social
}

impl VariationKind
{   /// Parse a wire name exactly; `None` for anything else
    pub fn from_name(name: &str) -> Option<Self>
    {   match name
        {   "shorter" => Some(VariationKind::Shorter)
          , "engaging" => Some(VariationKind::Engaging)
          , "social" => Some(VariationKind::Social)
          , _ => None
        }
    }
}

/// New script request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub topic: String
  , #[serde(default)]
    pub refined_topic: String
  , pub hook: String
  , pub style: String
  , #[serde(default = "default_provider")]
    pub provider: String
  , /// Per-request credential, empty when absent
    #[serde(default, rename = "api_key")]
    pub credential: String
  , /// Empty means the configured default model
    #[serde(default)]
    pub model: String
}

impl GenerationRequest
{   /// `refined_topic` when set, otherwise `topic`
    pub fn effective_topic(&self) -> &str
    {   if self.refined_topic.is_empty()
        {   &self.topic
        } else
        {   &self.refined_topic
        }
    }
}

/// Rewrite of an existing script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariationRequest
{   pub original_script: String
  , /// `shorter`, `engaging` or `social`; other values are tolerated
    #[serde(rename = "variation_type")]
    pub variation_kind: String
  , #[serde(default = "default_provider")]
    pub provider: String
  , #[serde(default, rename = "api_key")]
    pub credential: String
  , #[serde(default)]
    pub model: String
}

/// Topic ideas for a free-text query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest
{   pub query: String
  , #[serde(default = "default_limit")]
    pub limit: usize
  , #[serde(default = "default_provider")]
    pub provider: String
  , #[serde(default, rename = "api_key")]
    pub credential: String
  , #[serde(default)]
    pub model: String
}

impl Default for SuggestionRequest
{   fn default() -> Self
    {   SuggestionRequest
        {   query: String::new()
          , limit: default_limit()
          , provider: default_provider()
          , credential: String::new()
          , model: String::new()
        }
    }
}

impl SuggestionRequest
{   /// Shape checks the handlers run before generation
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.limit == 0
        {   return Err(crate::error::Error::InvalidRequest(
              "limit must be a positive integer".to_string()
            ));
        }
        Ok(())
    }
}

/// Outcome of script or variation generation.
/// `succeeded` is always true; `status_message` records provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult
{   #[serde(rename = "script")]
    pub text: String
  , #[serde(rename = "success")]
    pub succeeded: bool
  , #[serde(rename = "message", default)]
    pub status_message: String
}

/// Outcome of a suggestion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult
{   pub suggestions: Vec<String>
  , #[serde(rename = "success")]
    pub succeeded: bool
  , #[serde(rename = "message", default)]
    pub status_message: String
}
