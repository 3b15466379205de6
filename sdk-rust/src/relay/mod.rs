mod web3forms;

use crate::RelayResult;
use serde::{Deserialize, Serialize};

pub use web3forms::{Web3FormsRelay, Web3FormsRelayOptions, WEB3FORMS_ENDPOINT};

/// A contact form submission as forwarded to a relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

/// The relay's verdict on a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A third-party service that forwards form submissions to the site owner.
#[async_trait::async_trait]
pub trait FormRelay: Send + Sync {
    fn provider(&self) -> &'static str;
    async fn submit(&self, submission: &ContactSubmission) -> RelayResult<RelayResponse>;
}
