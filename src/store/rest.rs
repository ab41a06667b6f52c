//! REST implementation of the store contract. The hosted table exposes a
//! generic row API with column filters (`id=eq.{id}`); every function here
//! encapsulates one request so the rest of the codebase never sees HTTP.

use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::config::StoreConfig;
use crate::models::{Creator, CreatorDraft};

use super::{CreatorStore, StoreError, StoreResult};

/// Path of the row API beneath the store endpoint.
const TABLE_PATH: &str = "/rest/v1/creators";

/// Asks the store to echo the affected rows back, saving the second round
/// trip after inserts and updates.
const PREFER_REPRESENTATION: &str = "return=representation";

/// Thin handle to the hosted `creators` table. Holds the HTTP client, the
/// resolved table URL, and the credential sent with every request.
pub struct RestStore {
    http: Client,
    table_url: String,
    api_key: String,
}

impl RestStore {
    /// Build the client from resolved configuration. No request is issued
    /// here; the first screen activation performs the first call.
    pub fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(Self {
            http,
            table_url: table_url(&config.url),
            api_key: config.api_key.clone(),
        })
    }

    /// Attach the credential headers, send, and screen out non-success
    /// statuses. Transport errors and HTTP failures both collapse into
    /// `Unavailable`; callers only distinguish not-found.
    fn send(&self, builder: RequestBuilder) -> StoreResult<Response> {
        let response = builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("store request failed with HTTP {status}");
            Err(StoreError::Unavailable(format!(
                "store returned HTTP {status}"
            )))
        }
    }

    /// Decode the row-array body every table endpoint responds with.
    fn rows(response: Response) -> StoreResult<Vec<Creator>> {
        response
            .json()
            .map_err(|err| StoreError::Unavailable(format!("invalid store response: {err}")))
    }
}

/// Join the endpoint and table path without doubling the separator.
fn table_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), TABLE_PATH)
}

impl CreatorStore for RestStore {
    fn list_all(&self) -> StoreResult<Vec<Creator>> {
        debug!("store call: list_all");
        let response = self.send(self.http.get(&self.table_url).query(&[("select", "*")]))?;
        Self::rows(response)
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Creator> {
        debug!("store call: get_by_id id={id}");
        let filter = format!("eq.{id}");
        let response = self.send(
            self.http
                .get(&self.table_url)
                .query(&[("select", "*"), ("id", filter.as_str())]),
        )?;
        Self::rows(response)?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, draft: &CreatorDraft) -> StoreResult<Creator> {
        debug!("store call: insert name={}", draft.name);
        // The row API takes a batch; we always send exactly one row.
        let response = self.send(
            self.http
                .post(&self.table_url)
                .header("Prefer", PREFER_REPRESENTATION)
                .json(&[draft]),
        )?;
        Self::rows(response)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Unavailable("store returned no inserted row".to_string()))
    }

    fn update(&self, id: i64, patch: &CreatorDraft) -> StoreResult<Creator> {
        debug!("store call: update id={id}");
        let filter = format!("eq.{id}");
        let response = self.send(
            self.http
                .patch(&self.table_url)
                .query(&[("id", filter.as_str())])
                .header("Prefer", PREFER_REPRESENTATION)
                .json(patch),
        )?;
        // An empty representation means the filter matched nothing.
        Self::rows(response)?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        debug!("store call: delete_by_id id={id}");
        let filter = format!("eq.{id}");
        self.send(
            self.http
                .delete(&self.table_url)
                .query(&[("id", filter.as_str())]),
        )?;
        // The store reports success whether or not a row matched, which is
        // exactly the idempotence the delete flow relies on.
        Ok(())
    }
}
