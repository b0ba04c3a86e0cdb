use crate::{FormMode, Property, PropertyDetails, PropertyId};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the property listing backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn with_credentials(
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        Self::with_credentials(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        Self::with_credentials(request).send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);
        Self::with_credentials(request).send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        Self::with_credentials(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.get("health_check").await?;
        ok_empty(response).await
    }

    /// Fetch every listing.
    pub async fn list_properties(&self) -> Result<Vec<Property>, ClientError> {
        let response = self.get("properties").await?;
        ok_body(response).await
    }

    pub async fn get_property(
        &self,
        id: &PropertyId,
    ) -> Result<Property, ClientError> {
        let response = self.get(&format!("properties/{id}")).await?;
        ok_body(response).await
    }

    /// Create a listing; the server assigns its id.
    pub async fn create_property(
        &self,
        details: &PropertyDetails,
    ) -> Result<Property, ClientError> {
        let response = self.post("properties", details).await?;
        ok_body(response).await
    }

    pub async fn update_property(
        &self,
        id: &PropertyId,
        details: &PropertyDetails,
    ) -> Result<Property, ClientError> {
        let response = self.put(&format!("properties/{id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_property(
        &self,
        id: &PropertyId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("properties/{id}")).await?;
        ok_empty(response).await
    }

    /// Create or update depending on the form mode.
    pub async fn submit_property(
        &self,
        mode: &FormMode,
        details: &PropertyDetails,
    ) -> Result<Property, ClientError> {
        match mode {
            FormMode::Create => self.create_property(details).await,
            FormMode::Edit(id) => self.update_property(id, details).await,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::APIError(StatusCode::NOT_FOUND, _))
    }

    /// Status returned by the server, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
