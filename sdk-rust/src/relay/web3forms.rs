use super::{ContactSubmission, FormRelay, RelayResponse};
use crate::{RelayError, RelayResult};
use reqwest::Client;
use serde::Serialize;

const PROVIDER: &str = "web3forms";

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub struct Web3FormsRelay {
    access_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Clone, Default)]
pub struct Web3FormsRelayOptions {
    pub access_key: String,
    pub endpoint: Option<String>,
    pub client: Option<Client>,
}

#[derive(Serialize)]
struct Web3FormsPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: &'a str,
}

impl Web3FormsRelay {
    #[must_use]
    pub fn new(options: Web3FormsRelayOptions) -> Self {
        let Web3FormsRelayOptions {
            access_key,
            endpoint,
            client,
        } = options;

        Self {
            access_key,
            endpoint: endpoint.unwrap_or_else(|| WEB3FORMS_ENDPOINT.to_string()),
            client: client.unwrap_or_else(Client::new),
        }
    }
}

#[async_trait::async_trait]
impl FormRelay for Web3FormsRelay {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn submit(&self, submission: &ContactSubmission) -> RelayResult<RelayResponse> {
        let payload = Web3FormsPayload {
            access_key: &self.access_key,
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            subject: &submission.subject,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        // Web3Forms reports rejections (e.g. an invalid access key) as a JSON
        // body with `success: false`, often alongside a 4xx status.
        match serde_json::from_str::<RelayResponse>(&body) {
            Ok(relay_response) => {
                tracing::debug!(
                    %status,
                    success = relay_response.success,
                    "relay answered"
                );
                Ok(relay_response)
            }
            Err(_) if !status.is_success() => Err(RelayError::StatusCode(status, body)),
            Err(error) => Err(RelayError::InvalidResponse(
                PROVIDER,
                format!("Failed to parse relay response: {error}"),
            )),
        }
    }
}
