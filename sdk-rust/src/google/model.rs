use super::api::{
    Content, GenerateContentParameters, GenerateContentResponse,
    GenerateContentResponseUsageMetadata, Part as GooglePart,
};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    LanguageModelStream, Message, ModelResponse, ModelUsage, PartialModelResponse,
};
use async_stream::try_stream;
use futures::StreamExt;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use tracing::info_span;
use tracing_futures::Instrument;

const PROVIDER: &str = "google";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Carries the API key. The key must stay out of request URLs since those
/// appear in transport errors.
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            LanguageModelError::InvalidInput(
                "Google API key contains characters not allowed in a header".to_string(),
            )
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        let span = info_span!(
            "portfolio_sdk.generate",
            provider = PROVIDER,
            model = %self.model_id,
            messages = input.messages.len()
        );

        async move {
            let params = convert_to_generate_content_parameters(input)?;

            let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);

            let headers = self.request_headers()?;
            let response: GenerateContentResponse =
                client_utils::send_json(&self.client, &url, &params, headers).await?;

            let candidate = response
                .candidates
                .and_then(|c| c.into_iter().next())
                .ok_or_else(|| {
                    LanguageModelError::Invariant(PROVIDER, "No candidate in response".to_string())
                })?;

            let text = map_google_text(candidate.content.and_then(|c| c.parts).unwrap_or_default());
            if text.is_empty() {
                return Err(LanguageModelError::Invariant(
                    PROVIDER,
                    format!(
                        "Candidate has no text (finish reason: {:?})",
                        candidate.finish_reason
                    ),
                ));
            }

            let usage = response.usage_metadata.as_ref().map(map_google_usage_metadata);
            tracing::debug!(chars = text.len(), ?usage, "received model response");

            Ok(ModelResponse { text, usage })
        }
        .instrument(span)
        .await
    }

    async fn stream(&self, input: LanguageModelInput) -> LanguageModelResult<LanguageModelStream> {
        let span = info_span!(
            "portfolio_sdk.stream",
            provider = PROVIDER,
            model = %self.model_id,
            messages = input.messages.len()
        );

        let params = convert_to_generate_content_parameters(input)?;

        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model_id
        );

        let headers = self.request_headers()?;
        let mut chunk_stream = client_utils::send_sse_stream::<_, GenerateContentResponse>(
            &self.client,
            &url,
            &params,
            headers,
            PROVIDER,
        )
        .instrument(span.clone())
        .await?;

        let stream = try_stream! {
            let mut last_usage: Option<ModelUsage> = None;

            while let Some(chunk) = chunk_stream.next().await {
                let response = chunk?;

                let parts = response
                    .candidates
                    .and_then(|c| c.into_iter().next())
                    .and_then(|candidate| candidate.content)
                    .and_then(|content| content.parts);

                if let Some(parts) = parts {
                    let text = map_google_text(parts);
                    if !text.is_empty() {
                        yield PartialModelResponse {
                            delta: Some(text),
                            usage: None,
                        };
                    }
                }

                // Gemini reports cumulative usage on every chunk; only the
                // last one is forwarded.
                if let Some(usage_metadata) = response.usage_metadata.as_ref() {
                    last_usage = Some(map_google_usage_metadata(usage_metadata));
                }
            }

            if let Some(usage) = last_usage {
                yield PartialModelResponse {
                    delta: None,
                    usage: Some(usage),
                };
            }
        };

        Ok(LanguageModelStream::from_stream(stream.instrument(span)))
    }
}

fn convert_to_generate_content_parameters(
    input: LanguageModelInput,
) -> LanguageModelResult<GenerateContentParameters> {
    if input.messages.is_empty() {
        return Err(LanguageModelError::InvalidInput(
            "At least one message is required".to_string(),
        ));
    }

    let system_instruction = input.system_prompt.map(|system_prompt| Content {
        role: Some("system".to_string()),
        parts: Some(vec![GooglePart {
            text: Some(system_prompt),
            ..Default::default()
        }]),
    });

    Ok(GenerateContentParameters {
        contents: convert_to_google_contents(input.messages),
        system_instruction,
    })
}

fn convert_to_google_contents(messages: Vec<Message>) -> Vec<Content> {
    messages
        .into_iter()
        .map(|message| Content {
            role: Some(message.role.as_str().to_string()),
            parts: Some(
                message
                    .parts
                    .into_iter()
                    .map(|part| GooglePart {
                        text: Some(part.text),
                        ..Default::default()
                    })
                    .collect(),
            ),
        })
        .collect()
}

/// Joins the visible text of a candidate. Thought parts are dropped.
fn map_google_text(parts: Vec<GooglePart>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.thought.unwrap_or(false))
        .filter_map(|part| part.text)
        .collect()
}

fn map_google_usage_metadata(usage: &GenerateContentResponseUsageMetadata) -> ModelUsage {
    ModelUsage {
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0)
            + usage.thoughts_token_count.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn converts_turns_to_google_contents() {
        let params = convert_to_generate_content_parameters(LanguageModelInput {
            system_prompt: Some("Be brief.".to_string()),
            messages: vec![Message::user("Halo"), Message::model("Hai!")],
            ..Default::default()
        })
        .unwrap();

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Halo" }] },
                    { "role": "model", "parts": [{ "text": "Hai!" }] }
                ],
                "systemInstruction": {
                    "role": "system",
                    "parts": [{ "text": "Be brief." }]
                }
            })
        );
        assert_eq!(Role::Model.as_str(), "model");
    }

    #[test]
    fn rejects_empty_conversation() {
        let result = convert_to_generate_content_parameters(LanguageModelInput::default());
        assert!(matches!(result, Err(LanguageModelError::InvalidInput(_))));
    }

    #[test]
    fn skips_thought_parts() {
        let text = map_google_text(vec![
            GooglePart {
                thought: Some(true),
                text: Some("thinking...".to_string()),
            },
            GooglePart {
                thought: None,
                text: Some("Jawaban".to_string()),
            },
        ]);
        assert_eq!(text, "Jawaban");
    }
}
