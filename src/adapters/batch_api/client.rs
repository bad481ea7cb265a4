//! Batch import API client

use crate::adapters::http::describe_transport_error;
use crate::domain::{AccessToken, BatchRequest, SubmitError};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

/// Posts batch envelopes to the batch import API
///
/// The bearer token is attached to each request individually; the shared
/// client never carries an `Authorization` default.
#[derive(Debug, Clone)]
pub struct BatchSubmitter {
    client: Client,
}

impl BatchSubmitter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Submits `request` to `batch_url` and returns the raw response body
    ///
    /// # Errors
    ///
    /// A [`SubmitError`] for any transport failure or non-2xx status. The
    /// status is kept when a response was received.
    pub async fn submit(
        &self,
        token: &AccessToken,
        request: &BatchRequest,
        batch_url: &str,
    ) -> Result<String, SubmitError> {
        tracing::debug!(
            batch_url = %batch_url,
            payload_len = request.payload.len(),
            filename = ?request.filename,
            external_reference = ?request.external_reference,
            format = ?request.format,
            update_null = request.update_null,
            "Submitting batch"
        );

        let response = self
            .client
            .post(batch_url)
            .header(AUTHORIZATION, token.bearer_header())
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::transport(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("batch API returned status {status}")
            } else {
                format!("batch API returned status {status}: {body}")
            };
            return Err(SubmitError::from_status(status.as_u16(), message));
        }

        let body = response.text().await.map_err(|e| {
            SubmitError::transport(format!("failed to read batch API response: {e}"))
        })?;

        tracing::info!(status = %status, "Batch API accepted the submission");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn request() -> BatchRequest {
        BatchRequest {
            payload: "PGEvPg==".to_string(),
            update_null: false,
            format: None,
            filename: Some("f.xml".to_string()),
            external_reference: Some("ref1".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_returns_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/batch")
            .match_header("authorization", "Bearer abc")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "Data": "PGEvPg==",
                "UpdateNull": false,
                "Format": null,
                "Filename": "f.xml",
                "ExternalReference": "ref1"
            })))
            .with_status(200)
            .with_body("  {\"id\":\"123\"}\n")
            .expect(1)
            .create_async()
            .await;

        let submitter = BatchSubmitter::new(Client::new());
        let url = format!("{}/import/batch", server.url());
        let body = submitter
            .submit(&AccessToken::new("abc"), &request(), &url)
            .await
            .unwrap();

        assert_eq!(body, "  {\"id\":\"123\"}\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/import/batch")
            .with_status(500)
            .with_body("database unavailable")
            .create_async()
            .await;

        let submitter = BatchSubmitter::new(Client::new());
        let url = format!("{}/import/batch", server.url());
        let err = submitter
            .submit(&AccessToken::new("abc"), &request(), &url)
            .await
            .unwrap_err();

        assert_eq!(err.status, Some(500));
        assert!(err.message.contains("batch API returned status 500"));
        assert!(err.message.contains("database unavailable"));
    }

    #[tokio::test]
    async fn test_submit_accepts_any_2xx() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/import/batch")
            .with_status(202)
            .with_body("queued")
            .create_async()
            .await;

        let submitter = BatchSubmitter::new(Client::new());
        let url = format!("{}/import/batch", server.url());
        let body = submitter
            .submit(&AccessToken::new("abc"), &request(), &url)
            .await
            .unwrap();

        assert_eq!(body, "queued");
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let submitter = BatchSubmitter::new(Client::new());
        let err = submitter
            .submit(
                &AccessToken::new("abc"),
                &request(),
                "http://127.0.0.1:1/import/batch",
            )
            .await
            .unwrap_err();

        assert_eq!(err.status, None);
        assert!(err.to_string().starts_with("Error calling API:"));
    }
}
