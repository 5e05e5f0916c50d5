//! Typed operations against the REST data API.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::query::Query;
use crate::BackendClient;

impl BackendClient {
    /// Fetches matching rows from a table.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, ClientError> {
        let response = self
            .http
            .get(self.rest_url(table))
            .query(query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer(access_token))
            .send()
            .await?;
        let response = Self::check_rest(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches exactly one row; an empty result is [`ClientError::NotFound`].
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
        access_token: Option<&str>,
    ) -> Result<T, ClientError> {
        let mut rows: Vec<T> = self.select(table, query.limit(1), access_token).await?;
        match rows.pop() {
            Some(row) => Ok(row),
            None => Err(ClientError::NotFound),
        }
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
        access_token: Option<&str>,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer(access_token))
            .json(&[body])
            .send()
            .await?;
        let response = Self::check_rest(response).await?;
        let mut rows: Vec<T> = response.json().await?;
        rows.pop().ok_or(ClientError::NotFound)
    }

    /// Updates the rows the query scopes to and returns the first stored
    /// representation. Row-level security may shrink the scope to nothing,
    /// which surfaces as [`ClientError::NotFound`].
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: Query,
        body: &B,
        access_token: Option<&str>,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .patch(self.rest_url(table))
            .query(query.params())
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer(access_token))
            .json(body)
            .send()
            .await?;
        let response = Self::check_rest(response).await?;
        let mut rows: Vec<T> = response.json().await?;
        rows.pop().ok_or(ClientError::NotFound)
    }

    /// Deletes the rows the query scopes to.
    pub async fn delete(
        &self,
        table: &str,
        query: Query,
        access_token: Option<&str>,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.rest_url(table))
            .query(query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer(access_token))
            .send()
            .await?;
        Self::check_rest(response).await?;
        Ok(())
    }

    /// Insert-or-merge on the primary key, discarding the representation.
    pub async fn upsert<B: Serialize>(
        &self,
        table: &str,
        body: &B,
        access_token: Option<&str>,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .bearer_auth(self.bearer(access_token))
            .json(&[body])
            .send()
            .await?;
        Self::check_rest(response).await?;
        Ok(())
    }

    /// Turns a non-success data API response into a [`ClientError::Api`]
    /// carrying the server's message/details/hint verbatim.
    pub(crate) async fn check_rest(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("Data API request failed with {status}: {body}");
        let error: ApiError = serde_json::from_str(&body).unwrap_or(ApiError {
            message: (!body.is_empty()).then_some(body),
            ..ApiError::default()
        });
        Err(ClientError::Api(error))
    }
}
