//! HTTP surface: thin axum handlers over `ScriptGenerator`

use std::sync::Arc;
use axum::{
  extract::{Json, State},
  http::{HeaderValue, Method, StatusCode},
  response::{IntoResponse, Response},
  routing::{get, post},
  Router,
};
use log::{debug, warn};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::generator::ScriptGenerator;
use crate::request::{
  GenerationRequest, GenerationResult, SuggestionRequest, SuggestionResult,
  VariationRequest,
};

const SERVICE_NAME: &str = "60-Second Script Spinner API";

/// Readiness report for `/health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport
{   pub status: &'static str
  , pub openai_configured: bool
  , pub default_model: String
  , pub message: &'static str
}

impl From<&ScriptGenerator> for HealthReport
{   fn from(generator: &ScriptGenerator) -> Self
    {   HealthReport
        {   status: "healthy"
          , openai_configured: generator.is_configured()
          , default_model: generator.default_model().to_string()
          , message: "API is ready to generate scripts!"
        }
    }
}

/// Build the router with CORS limited to `allowed_origins`
pub fn router(
  generator: Arc<ScriptGenerator>
, allowed_origins: &[String]
) -> Router
{   let origins: Vec<HeaderValue> = allowed_origins
      .iter()
      .filter_map(|origin| match origin.parse::<HeaderValue>()
      {   Ok(value) => Some(value)
        , Err(_) => {
            warn!("Ignoring invalid CORS origin {:?}", origin);
            None
          }
      })
      .collect();

    let cors = CorsLayer::new()
      .allow_origin(origins)
      .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
      ])
      .allow_headers(Any);

    Router::new()
      .route("/", get(root))
      .route("/health", get(health))
      .route("/generate-script", post(generate_script))
      .route("/generate-variation", post(generate_variation))
      .route("/get-suggestions", post(get_suggestions))
      .layer(cors)
      .with_state(generator)
}

async fn root(
  State(generator): State<Arc<ScriptGenerator>>
) -> Json<serde_json::Value>
{   Json(json!({
      "message": format!("{} is running!", SERVICE_NAME),
      "openai_configured": generator.is_configured(),
    }))
}

async fn health(
  State(generator): State<Arc<ScriptGenerator>>
) -> Json<HealthReport>
{   Json(HealthReport::from(generator.as_ref()))
}

async fn generate_script(
  State(generator): State<Arc<ScriptGenerator>>
, Json(request): Json<GenerationRequest>
) -> Json<GenerationResult>
{   debug!("POST /generate-script");
    Json(generator.generate_script(&request).await)
}

async fn generate_variation(
  State(generator): State<Arc<ScriptGenerator>>
, Json(request): Json<VariationRequest>
) -> Json<GenerationResult>
{   debug!("POST /generate-variation");
    Json(generator.generate_variation(&request).await)
}

async fn get_suggestions(
  State(generator): State<Arc<ScriptGenerator>>
, Json(request): Json<SuggestionRequest>
) -> Result<Json<SuggestionResult>, Response>
{   debug!("POST /get-suggestions");
    request.validate().map_err(|e| {
      warn!("Rejected suggestion request: {}", e);
      (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": e.to_string() })),
      ).into_response()
    })?;
    Ok(Json(generator.get_suggestions(&request).await))
}
