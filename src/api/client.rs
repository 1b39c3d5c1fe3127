//! Async HTTP client for the smurfy-net MWO data API.

use crate::api::records::{RawMechMap, RawOmnipodMap};
use crate::core::error::{QuirkError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Production API base URL. Endpoints hang off it as `{name}.json`.
pub const DEFAULT_BASE_URL: &str = "http://mwo.smurfy-net.de/api/data/";

/// Client for the two endpoints the tables need.
pub struct SmurfyClient {
    client: Client,
    base_url: String,
}

impl SmurfyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}{}.json", self.base_url, name)
    }

    async fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let url = self.endpoint(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuirkError::Api(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuirkError::Api(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| QuirkError::Api(e.to_string()))
    }

    /// The full mech list (battlemechs and omnimechs, id-keyed).
    pub async fn get_mechs(&self) -> Result<RawMechMap> {
        self.get_json("mechs").await
    }

    /// All omnipods, keyed chassis → pod id.
    pub async fn get_omnipods(&self) -> Result<RawOmnipodMap> {
        self.get_json("omnipods").await
    }
}
