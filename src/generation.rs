//! Generation-service boundary.
//!
//! Every call the planner makes to the content model is a [`GenerationRequest`]:
//! system instructions, the JSON schema the answer must satisfy, and the content
//! payload. Any transport fault or non-conforming answer is an error for that call;
//! there is no retry here.

use crate::error::PlannerError;
use crate::provider::{
    ChatMessage, CompletionOptions, ModelProviderClient, ProviderConfig, ProviderFactory,
};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// What a request asks for. Carried alongside the text so that implementations
/// (and test doubles) can route without parsing prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestKind {
    SemesterInfo,
    WeekBatch { start_week: u32, count: u32 },
    Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: RequestKind,
    pub system: String,
    pub schema: Value,
    pub payload: String,
}

impl GenerationRequest {
    /// Build a request whose schema is derived from `T`.
    pub fn for_schema<T: JsonSchema>(
        kind: RequestKind,
        system: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            system: system.into(),
            schema: schema_value::<T>(),
            payload: payload.into(),
        }
    }
}

pub fn schema_value<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or(Value::Null)
}

/// Blocking-per-call, schema-constrained content generation.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, PlannerError>;
}

#[async_trait]
impl<G: StructuredGenerator + ?Sized> StructuredGenerator for std::sync::Arc<G> {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, PlannerError> {
        (**self).generate(request).await
    }
}

/// Issue `request` and decode the answer into `T`.
pub async fn generate_typed<T: DeserializeOwned>(
    generator: &dyn StructuredGenerator,
    request: &GenerationRequest,
) -> Result<T, PlannerError> {
    let value = generator.generate(request).await?;
    serde_json::from_value(value).map_err(|e| {
        PlannerError::SchemaMismatch(format!("{:?} response: {}", request.kind, e))
    })
}

/// [`StructuredGenerator`] over a chat-completion provider.
pub struct ProviderGenerator {
    client: Box<dyn ModelProviderClient>,
    options: CompletionOptions,
}

impl ProviderGenerator {
    pub fn new(client: Box<dyn ModelProviderClient>, options: CompletionOptions) -> Self {
        Self { client, options }
    }

    /// Build the client described by a provider profile.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, PlannerError> {
        let provider = config.to_model_provider()?;
        let client = ProviderFactory::create_client(&provider)?;
        Ok(Self::new(client, config.default_options.clone()))
    }

    fn system_with_schema(request: &GenerationRequest) -> String {
        let schema = serde_json::to_string_pretty(&request.schema).unwrap_or_default();
        format!(
            "{}\n\nRespond with a single JSON object only, no prose, matching this JSON schema:\n{}",
            request.system, schema
        )
    }
}

#[async_trait]
impl StructuredGenerator for ProviderGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, PlannerError> {
        debug!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            kind = ?request.kind,
            "Issuing generation request"
        );
        let messages = vec![
            ChatMessage::system(Self::system_with_schema(request)),
            ChatMessage::user(request.payload.clone()),
        ];
        let response = self.client.complete(messages, self.options.clone()).await?;
        debug!(
            kind = ?request.kind,
            total_tokens = response.total_tokens,
            "Generation response received"
        );
        parse_json_object(&response.content)
    }
}

/// Pull the JSON object out of a model answer, tolerating Markdown fences and
/// surrounding prose.
pub fn parse_json_object(content: &str) -> Result<Value, PlannerError> {
    let trimmed = content.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }
    let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) else {
        return Err(PlannerError::SchemaMismatch(
            "Response contains no JSON object".to_string(),
        ));
    };
    if end < start {
        return Err(PlannerError::SchemaMismatch(
            "Response contains no JSON object".to_string(),
        ));
    }
    serde_json::from_str(&trimmed[start..=end])
        .map_err(|e| PlannerError::SchemaMismatch(format!("Invalid JSON in response: {}", e)))
}
