use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use rand::rngs::StdRng;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::HintCredential;
use game_core::HintEngine;
use game_types::{HintRequest, HintResponse};

/// Source of category hints for wrong guesses
#[async_trait]
pub trait HintService: Send + Sync {
    async fn generate_hint(&self, request: &HintRequest) -> Result<String>;
}

/// In-process hint generation; also backs the `/api/generate-hint` endpoint
pub struct LocalHintService {
    rng: Mutex<StdRng>,
}

impl LocalHintService {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn hint_for(&self, request: &HintRequest) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        HintEngine::generate(
            &request.target_block,
            &request.guessed_block,
            &request.previous_hints,
            &mut *rng,
        )
    }

    /// Answer a raw hint request body. Never fails: a body that cannot be
    /// understood still gets a generic hint naming whatever category is known.
    pub fn respond(&self, body: &[u8]) -> HintResponse {
        match serde_json::from_slice::<HintRequest>(body) {
            Ok(request) => {
                debug!(
                    target_block = %request.target_block,
                    guessed_block = %request.guessed_block,
                    previous = request.previous_hints.len(),
                    "Generating hint"
                );
                HintResponse {
                    hint: self.hint_for(&request),
                }
            }
            Err(err) => {
                warn!("Malformed hint request: {}", err);
                let target = serde_json::from_slice::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| {
                        value
                            .get("targetBlock")
                            .and_then(|v| v.as_str())
                            .map(str::to_string)
                    });
                HintResponse {
                    hint: HintEngine::generic_fallback(target.as_deref()),
                }
            }
        }
    }
}

#[async_trait]
impl HintService for LocalHintService {
    async fn generate_hint(&self, request: &HintRequest) -> Result<String> {
        Ok(self.hint_for(request))
    }
}

/// Client for a hint service running as a separate deployment
pub struct RemoteHintService {
    client: Client,
    endpoint: String,
    credential: HintCredential,
}

impl RemoteHintService {
    pub fn new(base_url: &str, credential: HintCredential, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build hint service client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate-hint", base_url.trim_end_matches('/')),
            credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HintService for RemoteHintService {
    async fn generate_hint(&self, request: &HintRequest) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(request)
            .send()
            .await
            .context("Hint service unreachable")?
            .error_for_status()
            .context("Hint service returned an error status")?;

        let body: HintResponse = response
            .json()
            .await
            .context("Hint service returned an invalid body")?;

        if body.hint.trim().is_empty() {
            return Err(anyhow!("Hint service returned an empty hint"));
        }

        Ok(body.hint)
    }
}
