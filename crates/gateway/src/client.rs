use async_trait::async_trait;
use catalogue_core::{
    CATALOGUES_PATH, Catalogue, CatalogueDraft, CatalogueId, Envelope, ItemBody, ListBody, Outcome,
};
use reqwest::{Response, StatusCode, header};

use crate::{CatalogueApi, ClientConfig, GatewayError};

/// Maximum body length kept in error messages and logs.
pub const MAX_ERROR_BODY_LEN: usize = 200;

/// Confirmation used when a write succeeds with an empty body (HTTP 204).
pub const WRITE_ACKNOWLEDGED: &str = "Request completed successfully.";

/// Re-rendered login page means the credentials were refused.
const LOGIN_REJECTED: &str = "Invalid username or password.";

/// Client for the catalogue REST API.
///
/// Redirects are not followed: the backend answers unauthenticated API calls
/// with a redirect to its login page, which is reported as
/// [`GatewayError::Unauthenticated`]. Session cookies are kept between calls.
pub struct CatalogueClient {
    client: reqwest::Client,
    base_url: String,
    config: ClientConfig,
}

impl std::fmt::Debug for CatalogueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CatalogueClient {
    /// Creates a client for `config.base_url`.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built (TLS backend failure).
    pub fn new(config: ClientConfig) -> Result<Self, GatewayError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_owned();
        reqwest::Url::parse(&base_url).map_err(|e| GatewayError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, config })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{CATALOGUES_PATH}", self.base_url)
    }

    fn item_url(&self, id: CatalogueId) -> String {
        format!("{}{CATALOGUES_PATH}/{id}", self.base_url)
    }

    /// Log in with the configured credentials, if any.
    ///
    /// Returns whether a login was performed.
    ///
    /// # Errors
    /// Propagates [`Self::login`] failures.
    pub async fn authenticate(&self) -> Result<bool, GatewayError> {
        let Some((username, password)) = self.config.credentials() else {
            return Ok(false);
        };
        self.login(username, password).await?;
        Ok(true)
    }

    /// Open a backend session with the login form.
    ///
    /// A redirect away from the login page means success; the form being
    /// rendered again means the credentials were refused.
    ///
    /// # Errors
    /// [`GatewayError::Rejected`] for bad credentials, a transport error
    /// otherwise.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let status = response.status();
        if status.is_redirection() {
            let location = redirect_location(&response);
            if location.contains("/login") {
                return Err(GatewayError::Rejected(LOGIN_REJECTED.to_owned()));
            }
            tracing::info!(username, "logged in to catalogue backend");
            return Ok(());
        }
        if status.is_success() {
            tracing::warn!(username, "catalogue backend refused login");
            return Err(GatewayError::Rejected(LOGIN_REJECTED.to_owned()));
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Malformed {
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
        })
    }

    /// End the backend session.
    ///
    /// # Errors
    /// Returns an error if the request fails or the backend answers with an
    /// error status.
    pub async fn logout(&self) -> Result<(), GatewayError> {
        let response = self.client.get(format!("{}/logout", self.base_url)).send().await?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(());
        }
        Err(GatewayError::Malformed { status: status.as_u16(), body: String::new() })
    }

    /// Read the body, turning a login redirect into `Unauthenticated`.
    async fn read_body(response: Response) -> Result<(StatusCode, String), GatewayError> {
        let status = response.status();
        if status.is_redirection() {
            return Err(GatewayError::Unauthenticated { location: redirect_location(&response) });
        }
        let body = response.text().await?;
        Ok((status, body))
    }

    fn malformed(status: StatusCode, body: &str) -> GatewayError {
        let body = truncate(body, MAX_ERROR_BODY_LEN).to_owned();
        tracing::error!(status = status.as_u16(), %body, "unrecognized catalogue API response");
        GatewayError::Malformed { status: status.as_u16(), body }
    }

    fn parse_read<B, T>(
        status: StatusCode,
        body: &str,
        into_outcome: impl FnOnce(B) -> Option<Outcome<T>>,
    ) -> Result<T, GatewayError>
    where
        B: serde::de::DeserializeOwned,
    {
        let parsed: B = serde_json::from_str(body).map_err(|_| Self::malformed(status, body))?;
        match into_outcome(parsed) {
            Some(Outcome::Accepted(value)) => Ok(value),
            Some(Outcome::Rejected(reason)) => Err(GatewayError::Rejected(reason)),
            None => Err(Self::malformed(status, body)),
        }
    }

    /// Writes answer `{message}` or `{error}`. A message on an error status
    /// is the backend's abort shape and counts as a rejection.
    fn parse_write(status: StatusCode, body: &str) -> Result<String, GatewayError> {
        if body.trim().is_empty() {
            return if status.is_success() {
                Ok(WRITE_ACKNOWLEDGED.to_owned())
            } else {
                Err(Self::malformed(status, body))
            };
        }
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(body).map_err(|_| Self::malformed(status, body))?;
        match envelope.into_write_outcome() {
            Some(Outcome::Accepted(message)) if status.is_success() => Ok(message),
            Some(Outcome::Accepted(message) | Outcome::Rejected(message)) => {
                Err(GatewayError::Rejected(message))
            },
            None => Err(Self::malformed(status, body)),
        }
    }
}

#[async_trait]
impl CatalogueApi for CatalogueClient {
    async fn list_all(&self) -> Result<Vec<Catalogue>, GatewayError> {
        tracing::debug!(url = %self.collection_url(), "GET catalogues");
        let response = self.client.get(self.collection_url()).send().await?;
        let (status, body) = Self::read_body(response).await?;
        Self::parse_read(status, &body, ListBody::into_outcome)
    }

    async fn get_one(&self, id: CatalogueId) -> Result<Catalogue, GatewayError> {
        tracing::debug!(id, "GET catalogue");
        let response = self.client.get(self.item_url(id)).send().await?;
        let (status, body) = Self::read_body(response).await?;
        Self::parse_read(status, &body, ItemBody::into_outcome)
    }

    async fn create(&self, draft: &CatalogueDraft) -> Result<String, GatewayError> {
        tracing::debug!(id = ?draft.catalogue_id, "POST catalogue");
        let response = self.client.post(self.collection_url()).json(draft).send().await?;
        let (status, body) = Self::read_body(response).await?;
        Self::parse_write(status, &body)
    }

    async fn update(&self, id: CatalogueId, draft: &CatalogueDraft) -> Result<String, GatewayError> {
        tracing::debug!(id, "PUT catalogue");
        let body = draft.clone().without_id();
        let response = self.client.put(self.item_url(id)).json(&body).send().await?;
        let (status, body) = Self::read_body(response).await?;
        Self::parse_write(status, &body)
    }

    async fn remove(&self, id: CatalogueId) -> Result<String, GatewayError> {
        tracing::debug!(id, "DELETE catalogue");
        let response = self.client.delete(self.item_url(id)).send().await?;
        let (status, body) = Self::read_body(response).await?;
        Self::parse_write(status, &body)
    }
}

fn redirect_location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
