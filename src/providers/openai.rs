use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Assistant message; `content` may be null on refusals
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

// ===== Chat Completions Client =====

/// Client for any endpoint speaking the chat-completions wire format
#[derive(Clone)]
pub struct ChatCompletionsClient
{   api_base: String
  , api_key: String
  , http_client: reqwest::Client
}

impl std::fmt::Debug for ChatCompletionsClient
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("ChatCompletionsClient")
          .field("api_base", &self.api_base)
          .field("api_key", &"<redacted>")
          .finish()
    }
}

impl ChatCompletionsClient
{   pub fn new(
      api_base: impl Into<String>
    , api_key: impl Into<String>
    , http_client: reqwest::Client
    ) -> Self
    {   let api_base = api_base.into();
        debug!("Creating ChatCompletionsClient for {}", api_base);
        ChatCompletionsClient
        {   api_base: api_base.trim_end_matches('/').to_string()
          , api_key: api_key.into()
          , http_client
        }
    }

    pub fn api_base(&self) -> &str
    {   &self.api_base
    }

    /// Send a single user message and return the first choice's text
    pub async fn complete(
      &self
    , prompt: &str
    , model: &str
    , max_tokens: u32
    , temperature: f32
    ) -> Result<String, crate::error::Error>
    {   debug!("Sending completion to {} for: {}", self.api_base, model);

        let request = ChatCompletionRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: prompt.to_string()
              }
            ]
          , max_tokens: Some(max_tokens)
          , temperature: Some(temperature)
        };

        trace!("Completion request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .bearer_auth(&self.api_key)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Completion response status: {}", status);

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {   error!("Rate limited by {}", self.api_base);
            return Err(crate::error::Error::RateLimitExceeded);
        }

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Completion API error {}: {}", status, error_text);
            return Err(crate::error::Error::ApiError
            {   status: status.as_u16()
              , message: error_text
            });
        }

        let chat_response: ChatCompletionResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        let choice = chat_response.choices
          .into_iter()
          .next()
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::NoChoicesInResponse
          })?;

        trace!("Finish reason: {:?}", choice.finish_reason);
        choice.message.content.ok_or_else(|| {
          error!("Choice carried no content");
          crate::error::Error::ParseError(
            "choice message has no content".to_string()
          )
        })
    }
}
