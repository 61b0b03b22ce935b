//! HTTP client for the upstream viewer endpoints.
//!
//! Thin transport wrapper: each method fetches one resource and decodes it,
//! returning an error the session turns into an empty slice plus a notice.
//! No retries here; the user re-triggers an action to retry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{NexusError, Result};
use crate::graph::GraphPayload;
use crate::lineage::GoldenRecord;
use crate::reference::ModuleInfo;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Client for the entity/reference upstream API
#[derive(Debug, Clone)]
pub struct NexusClient {
    http: reqwest::Client,
    base_url: String,
}

impl NexusClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn modules(&self) -> Result<Vec<ModuleInfo>> {
        self.get_json("/references/modules", "module list").await
    }

    pub async fn dictionary(&self, module_id: &str) -> Result<Vec<Value>> {
        self.get_json(&format!("/references/{}/dictionary", module_id), "dictionary")
            .await
    }

    pub async fn sample(&self, module_id: &str) -> Result<Value> {
        self.get_json(&format!("/references/{}/sample", module_id), "sample")
            .await
    }

    pub async fn golden_record(&self, entity_id: &str) -> Result<GoldenRecord> {
        self.get_json(
            &format!("/entities/{}/golden-record", entity_id),
            "golden record",
        )
        .await
    }

    pub async fn graph(&self, entity_id: &str) -> Result<GraphPayload> {
        self.get_json(&format!("/graph/{}", entity_id), "graph").await
    }

    /// Single-turn chat with the assistant collaborator (opaque to the core)
    pub async fn chat(&self, message: &str) -> Result<String> {
        let url = format!("{}/agent/chat", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NexusError::Status {
                resource: "agent chat".to_string(),
                status: status.as_u16(),
            });
        }
        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, resource, "fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NexusError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| NexusError::Decode {
            resource: resource.to_string(),
            source,
        })
    }
}
