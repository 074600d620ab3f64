//! CTFd REST client: challenge list and challenge detail.

mod error;
mod model;

pub use error::ApiError;
pub use model::{
    ChallengeDetail, ChallengeSummary, NO_DESCRIPTION, UNCATEGORIZED, UNNAMED_CHALLENGE,
};

use crate::auth::{api_headers, Credential};
use crate::http::HttpClient;
use model::{Envelope, WireChallenge};
use std::collections::HashMap;
use url::Url;

/// Client bound to one CTFd instance and one credential. Not `Debug`: the
/// header map holds the secret.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    api_base: Url,
    headers: HashMap<String, String>,
}

impl ApiClient {
    /// `site_url` is the instance root (e.g. `https://ctf.example.com/`);
    /// requests go to `<origin>/api/v1/...`.
    pub fn new(http: HttpClient, site_url: &str, credential: &Credential) -> Result<Self, ApiError> {
        let api_base = Url::parse(site_url)?.join("/api/v1")?;
        Ok(Self {
            http,
            api_base,
            headers: api_headers(credential),
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// `GET /api/v1/challenges`.
    pub fn list_challenges(&self) -> Result<Vec<ChallengeSummary>, ApiError> {
        let url = format!("{}/challenges", self.api_base);
        let envelope: Envelope<Vec<WireChallenge>> = self.get_json(&url)?;
        Ok(envelope.data.into_iter().map(ChallengeSummary::from).collect())
    }

    /// `GET /api/v1/challenges/<id>`.
    pub fn get_challenge_detail(&self, id: u64) -> Result<ChallengeDetail, ApiError> {
        let url = format!("{}/challenges/{}", self.api_base, id);
        let envelope: Envelope<WireChallenge> = self.get_json(&url)?;
        Ok(ChallengeDetail::from(envelope.data))
    }

    /// Resolves an attached-file reference against the API base.
    pub fn resolve(&self, reference: &str) -> Result<Url, ApiError> {
        Ok(self.api_base.join(reference)?)
    }

    /// Headers for an asset request. The credential only goes to the API's own origin.
    pub fn asset_headers(&self, url: &Url) -> HashMap<String, String> {
        if url.origin() == self.api_base.origin() {
            self.headers.clone()
        } else {
            HashMap::new()
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get_bytes(url, &self.headers)?;
        if !response.is_success() {
            return Err(ApiError::Http(response.status));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}
